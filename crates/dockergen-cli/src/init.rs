use dockergen_common::{error::DockergenResult, metadata::LevelFilter, settings::Settings};

use crate::Cli;

pub fn init_config(cli: &Cli) -> DockergenResult<Settings> {
    Settings::load(cli.settings.as_deref())
}

/// `--log-level` wins over whatever the settings sources resolved.
pub fn resolve_log_level(cli: &Cli, settings: &Settings) -> DockergenResult<LevelFilter> {
    match cli.log_level {
        Some(level) => Ok(level),
        None => settings.level_filter(),
    }
}
