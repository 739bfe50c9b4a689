pub mod cli;
pub mod config;
pub mod number;
pub mod tui;
pub mod version;
