//! Library components for the intake CLI.

pub mod config;
pub mod logging;
pub mod report;
