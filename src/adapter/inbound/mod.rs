//! Inbound adapters: the HTTP API and the command-line interface.

pub mod cli;
pub mod http;
