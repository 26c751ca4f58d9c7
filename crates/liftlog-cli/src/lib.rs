//! CLI library components for Lift Log.

pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
