use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] inistore::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn is_lookup(&self) -> bool {
        matches!(self, CliError::Store(e) if e.is_lookup())
    }

    /// 1 when a section or key is missing, 2 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_lookup() {
            ExitCode::from(1)
        } else {
            ExitCode::from(2)
        }
    }
}
