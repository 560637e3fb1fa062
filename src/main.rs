use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use modconflict::analysis::AnalysisOptions;
use modconflict::export::ExportFormat;
use modconflict::graph::{PathMode, DEFAULT_VISIT_LIMIT};
use modconflict::parser::{go_mod, GO_MOD_FILE};
use modconflict::report::{run_report, ReportSettings};
use modconflict::source::{GoCli, ModuleSource, SourceResult};
use modconflict::workdir::WorkingDir;

#[derive(Parser)]
#[command(name = "modconflict")]
#[command(version)]
#[command(about = "Find Go modules required at more than one version", long_about = None)]
struct Cli {
    /// Directory holding go.mod
    #[arg(
        short = 'd',
        long,
        env = "MODCONFLICT_GO_MOD_LOCATION",
        default_value = "."
    )]
    go_mod_location: PathBuf,

    /// Read the module graph from a file instead of running `go mod graph` (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    graph_file: Option<PathBuf>,

    /// Go binary to run
    #[arg(long, env = "MODCONFLICT_GO", default_value = "go")]
    go: String,

    /// Output format: text, json or markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Keep every path to a shared module instead of the last one visited
    #[arg(long)]
    all_paths: bool,

    /// Skip the `go mod why` query for each conflict
    #[arg(long)]
    no_why: bool,

    /// Also report the `go` and `toolchain` pseudo-modules
    #[arg(long)]
    include_toolchain: bool,

    /// Module name to leave out of conflict detection (repeatable)
    #[arg(long = "ignore", value_name = "MODULE")]
    ignore: Vec<String>,

    /// How many times the path walk may enter one module
    #[arg(long, env = "MODCONFLICT_VISIT_LIMIT", default_value_t = DEFAULT_VISIT_LIMIT)]
    visit_limit: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with status 2 when conflicts are found
    #[arg(long)]
    deny_conflicts: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    // Relative graph file paths are resolved from where the tool was started.
    let graph_input = cli.graph_file.as_deref().map(read_graph_file);

    tracing::info!(location = %cli.go_mod_location.display(), "location for go.mod");
    let _workdir = match WorkingDir::enter(&cli.go_mod_location) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "cannot change to project path {}: {}",
                cli.go_mod_location.display(),
                e
            );
            None
        }
    };

    let manifest = go_mod::parse_file(Path::new(GO_MOD_FILE));
    let go = GoCli::new(cli.go.as_str());
    let graph_text = graph_input.unwrap_or_else(|| go.module_graph());

    let mut analysis = AnalysisOptions {
        path_mode: if cli.all_paths {
            PathMode::AllPaths
        } else {
            PathMode::LastVisit
        },
        ignored: cli.ignore.clone(),
        visit_limit: cli.visit_limit,
    };
    if !cli.include_toolchain {
        analysis = analysis.ignore_toolchain();
    }

    let settings = ReportSettings {
        format: cli.format,
        color: use_color(cli),
        analysis,
        skip_why: cli.no_why,
        deny_conflicts: cli.deny_conflicts,
    };

    let stdout = io::stdout();
    let status = run_report(
        &settings,
        manifest,
        graph_text,
        &go,
        &mut stdout.lock(),
        &mut io::stderr(),
    )
    .context("cannot write report")?;

    Ok(ExitCode::from(status.code()))
}

fn read_graph_file(path: &Path) -> SourceResult<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn use_color(cli: &Cli) -> bool {
    cli.format == ExportFormat::Text
        && !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal()
}
