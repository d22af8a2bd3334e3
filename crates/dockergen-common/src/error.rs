use std::path::PathBuf;

pub type DockergenResult<T = (), E = DockergenError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DockergenError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid Yaml: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// The config document parsed, but its root is not a key-value mapping.
    #[error("Invalid Yaml: expected a mapping at the document root, found {0}")]
    NotAMapping(String),

    /// Required config fields that were absent or empty.
    #[error("Validation error: name and startup_command are required fields (missing: {})", .0.join(", "))]
    Validation(Vec<&'static str>),
}

impl DockergenError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DockergenError::FileNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DockergenError::Validation(_))
    }
}
