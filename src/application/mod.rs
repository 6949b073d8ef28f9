//! Application services that orchestrate domain types and ports.

pub mod chat;

pub use chat::ChatService;
