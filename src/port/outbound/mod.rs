//! Outbound ports implemented by infrastructure adapters.

pub mod model;
