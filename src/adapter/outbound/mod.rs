//! Outbound adapters.

pub mod candle;
