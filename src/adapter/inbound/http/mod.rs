//! HTTP API.
//!
//! | Method | Path        | Body                  | Response                  |
//! |--------|-------------|-----------------------|---------------------------|
//! | POST   | `/api/chat` | `{"message": "..."}`  | `{"response": "..."}`     |
//! | GET    | `/health`   |                       | status, model, start time |
//!
//! Errors are returned as `{"error": "..."}`.

pub mod dto;
pub mod error;
pub mod handler;
pub mod request_id;
pub mod router;

pub use router::{build_router, serve, AppState};
