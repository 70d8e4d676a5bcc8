//! Command-line front end for the personal income tax engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
