pub mod commands;
pub mod handlers;

pub use commands::{CheckArg, Cli, Commands, InitTarget, RepoAction, RepoCommand, TargetArgs};
