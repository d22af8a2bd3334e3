use dockergen_common::error::DockergenError;
use thiserror::Error;

pub type DockergenCliResult<T = (), E = DockergenCliError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum DockergenCliError {
    #[error("{0}")]
    Common(#[from] DockergenError),
    #[error("Unable to parse arguments: {0}")]
    Command(#[from] clap::error::Error),
}

impl DockergenCliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DockergenCliError::Command(e) => e.exit_code(),
            DockergenCliError::Common(_) => 1,
        }
    }

    /// Validation failures are logged at error level where they happen.
    pub fn already_logged(&self) -> bool {
        matches!(self, DockergenCliError::Common(e) if e.is_validation())
    }
}
