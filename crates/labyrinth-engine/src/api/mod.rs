pub mod config;
pub mod session;
pub mod snapshot;
pub mod types;
