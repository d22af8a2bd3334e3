use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use dockergen_common::{metadata::LevelFilter, util::tracing::setup_tracing};

use crate::error::DockergenCliResult;
use crate::init::{init_config, resolve_log_level};

pub mod generate;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    #[clap(short('l'), long, value_name("LEVEL"))]
    pub log_level: Option<LevelFilter>,

    /// Optional settings file layered over config/dockergen.*
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

pub fn exec() -> DockergenCliResult {
    exec_from(std::env::args_os())
}

pub fn exec_from<I, T>(args: I) -> DockergenCliResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    dotenv::dotenv().ok();
    let cli = Cli::try_parse_from(args)?;

    // Tracing comes up even when settings fail so the failure gets logged.
    let level = init_config(&cli).and_then(|settings| resolve_log_level(&cli, &settings));
    setup_tracing(level.as_ref().copied().unwrap_or(LevelFilter::INFO))?;
    level?;

    generate::run(&cli.generate, Path::new("."))?;
    Ok(())
}
