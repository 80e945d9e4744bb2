mod args;
mod commands;
mod handlers;
mod views;

pub use args::{Cli, Commands, TemplateCommand};
pub use commands::run;
