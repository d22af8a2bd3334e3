pub mod cli;
pub mod error;
mod init;

pub use cli::{exec, exec_from, Cli};
