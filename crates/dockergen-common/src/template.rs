use std::path::{Path, PathBuf};

use crate::error::DockergenResult;
use crate::util::fs_utils::{read_file, write_file};

pub const NAME_PLACEHOLDER: &str = "<name>";
pub const STARTUP_COMMAND_PLACEHOLDER: &str = "\"<startup_command>\"";

pub const OUTPUT_DIR: &str = "output_files";
pub const OUTPUT_FILE: &str = "Dockerfile";

/// Reads a Dockerfile template verbatim.
pub fn load_template(path: &Path) -> DockergenResult<String> {
    read_file(path)
}

/// Splits `startup_command` on whitespace and renders each token as a
/// double-quoted string, joined with `, `.
///
/// `npm start --silent` becomes `"npm", "start", "--silent"`.
pub fn quote_command(startup_command: &str) -> String {
    startup_command
        .split_whitespace()
        .map(|arg| format!("\"{}\"", arg))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substitutes the startup command first, then the name. Missing placeholders
/// leave the template unchanged.
pub fn render(template: &str, name: &str, startup_command: &str) -> String {
    template
        .replace(STARTUP_COMMAND_PLACEHOLDER, &quote_command(startup_command))
        .replace(NAME_PLACEHOLDER, name)
}

/// `root/output_files/Dockerfile`
pub fn output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIR).join(OUTPUT_FILE)
}

/// Writes the rendered Dockerfile under `root`. The `output_files` directory
/// must already exist.
pub fn write_output(root: &Path, rendered: &str) -> DockergenResult<PathBuf> {
    let path = output_path(root);
    write_file(&path, rendered)?;
    Ok(path)
}
