//! Configuration and process wiring.

pub mod bootstrap;
pub mod config;
