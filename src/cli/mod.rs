pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, Cli, Commands, CopyArgs, ListArgs, TrailingArgs,
};
pub use runner::{run, Runner};
