//! Scoped change of the process working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Changes into a directory and changes back when dropped.
///
/// The go commands resolve `go.mod` from the working directory, so the
/// whole run happens inside the project directory.
#[derive(Debug)]
pub struct WorkingDir {
    previous: PathBuf,
}

impl WorkingDir {
    /// Changes into `dir`, remembering the current directory.
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        tracing::debug!(from = %previous.display(), to = %dir.display(), "changed directory");
        Ok(Self { previous })
    }

    /// Returns the directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            tracing::warn!(
                dir = %self.previous.display(),
                error = %e,
                "cannot change back to previous directory"
            );
        }
    }
}
