pub mod cli;
pub mod config;
pub mod core;
pub mod credential;
pub mod logging;
pub mod vault;
