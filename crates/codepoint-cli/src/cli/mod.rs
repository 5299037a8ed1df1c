pub mod args;
pub mod commands;
mod input;
mod output;
