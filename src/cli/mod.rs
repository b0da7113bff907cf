//! Command line interface for Sibyl.

pub mod args;
pub mod commands;
pub mod output;
