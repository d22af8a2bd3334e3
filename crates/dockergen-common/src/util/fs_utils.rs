use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DockergenError, DockergenResult};

/// Reads a whole file as UTF-8. A missing file is reported as
/// [`DockergenError::FileNotFound`] naming the path, any other failure as an IO error.
pub fn read_file(path: &Path) -> DockergenResult<String> {
    tracing::debug!("Reading file: {}", path.display());
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!("Read {} bytes from {}", contents.len(), path.display());
            Ok(contents)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(DockergenError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Creates or truncates `path` and writes `contents`. Parent directories are not created.
pub fn write_file(path: &Path, contents: &str) -> DockergenResult<()> {
    tracing::debug!("Writing file: {}", path.display());
    std::fs::write(path, contents)?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
