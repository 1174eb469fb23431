//! External process invocation and PATH probing.

pub mod command;
pub mod probe;

pub use command::{run, Invocation};
pub use probe::{command_exists, find_in_path};
