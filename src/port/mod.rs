//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!     ┌───────────┐      ┌─────────────────────┐      ┌─────────────┐
//!     │   HTTP /  │ ───▶ │ Application (chat)  │ ───▶ │  ChatModel  │
//!     │    CLI    │      │  Domain + Port      │      │   Adapter   │
//!     └───────────┘      └─────────────────────┘      └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::model::ChatModel`] - Chat completion backend

pub mod outbound;

pub use outbound::model::ChatModel;
