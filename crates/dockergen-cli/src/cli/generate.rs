use std::path::{Path, PathBuf};

use clap::Args;
use dockergen_common::{
    app_config::{load_config, validate},
    error, info,
    template::{load_template, render, write_output},
};

use crate::error::DockergenCliResult;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the app config (name, startup_command)
    #[arg(long, value_name = "PATH")]
    pub yaml_file: PathBuf,

    /// Path to the Dockerfile template
    #[arg(long, value_name = "PATH")]
    pub docker_file: PathBuf,
}

/// Loads and validates the config, renders the template and writes
/// `root/output_files/Dockerfile`. Nothing is written unless every earlier step succeeds.
pub fn run(args: &GenerateArgs, root: &Path) -> DockergenCliResult<PathBuf> {
    let config = load_config(&args.yaml_file)?;
    let app = validate(&config).map_err(|e| {
        error!("{}", e);
        e
    })?;
    app.report();

    let template = load_template(&args.docker_file)?;
    let rendered = render(&template, &app.name, &app.startup_command);

    let path = write_output(root, &rendered)?;
    info!("Dockerfile written: {}", path.display());
    Ok(path)
}
