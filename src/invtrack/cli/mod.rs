mod commands;
mod prompt;
mod render;
mod setup;
mod styles;

pub use commands::run;
