//! Infrastructure configuration modules.

pub mod logging;
pub mod model;
pub mod paths;
pub mod server;
pub mod settings;
