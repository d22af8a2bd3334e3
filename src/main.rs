use dockergen_cli::{error::DockergenCliError, exec};
use dockergen_common::{debug, error};

fn main() {
    match exec() {
        Ok(_) => (),
        Err(DockergenCliError::Command(e)) => e.exit(),
        Err(e) => {
            if e.already_logged() {
                debug!("Error: {}", e);
            } else {
                error!("Error: {}", e);
            }
            std::process::exit(e.exit_code());
        }
    }
}
