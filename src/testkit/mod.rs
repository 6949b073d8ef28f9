//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`model`] - `ScriptedModel`, a [`ChatModel`](crate::port::ChatModel)
//!   with canned replies that records what it was asked.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod model;
