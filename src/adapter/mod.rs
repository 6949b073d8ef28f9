//! Adapters connecting ports to the outside world.
//!
//! - [`inbound`] - HTTP API and command-line entry points
//! - [`outbound`] - Model backends implementing [`ChatModel`](crate::port::ChatModel)

pub mod inbound;
pub mod outbound;
