//! modconflict - version conflict detector for Go module graphs
//!
//! This crate reads the requirement graph of a Go module (`go mod graph`
//! output), finds modules that are reached at more than one version and
//! reports every path that leads to them, along with the `go.mod`
//! requirements and the toolchain's explanation of why each conflicting
//! module is needed.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
pub mod report;
pub mod source;
pub mod workdir;
