//! Connection management
//!
//! This module handles:
//! * Connection configuration (TCP or Unix socket target, credentials, timeout)
//! * Handle lifecycle (open, release)
//! * State machine enforcement

mod conn;
mod state;

pub use conn::{
    ConnectionConfig, ConnectionConfigBuilder, ConnectionHandle, TransportType, DEFAULT_HOST,
    DEFAULT_PORT,
};
pub use state::ConnectionState;
