pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, try_parse_args_from, Args};
pub use runner::{run, Runner};
