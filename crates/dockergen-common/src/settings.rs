use std::path::Path;
use std::str::FromStr;

use config::{Environment, File};
use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;

use crate::error::{DockergenError, DockergenResult};

pub const ENV_PREFIX: &str = "DOCKERGEN";

/// Ambient settings for the tool itself. The app config being rendered is
/// not read through here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Layers `config/dockergen.*` (optional), then `settings_file` (required
    /// when given), then `DOCKERGEN_*` environment variables.
    pub fn load(settings_file: Option<&Path>) -> DockergenResult<Self> {
        Self::load_with_env(settings_file, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with_env(settings_file: Option<&Path>, env: Environment) -> DockergenResult<Self> {
        let mut s = config::Config::builder()
            .set_default("log_level", default_log_level())?
            .add_source(File::with_name("config/dockergen").required(false));
        if let Some(path) = settings_file {
            s = s.add_source(File::from(path));
        }
        let s = s.add_source(env).build()?;

        let cfg = s.try_deserialize()?;
        Ok(cfg)
    }

    pub fn level_filter(&self) -> DockergenResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|e| {
            DockergenError::Config(config::ConfigError::Message(format!(
                "invalid log_level {:?}: {}",
                self.log_level, e
            )))
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
