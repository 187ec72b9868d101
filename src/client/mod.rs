//! Client entry points
//!
//! `acquire` opens a session from a [`ConnectionConfig`](crate::ConnectionConfig);
//! `ConnectionInfo` turns a `mysql://` URL into one.

pub mod connection_string;
mod provider;

pub use connection_string::ConnectionInfo;
pub use provider::{acquire, acquire_url, release};
