//! mysql-probe: a fail-fast MySQL connection provider
//!
//! `acquire` opens a session from one shared, immutable [`ConnectionConfig`]
//! and hands back an exclusively owned [`ConnectionHandle`]. Failures are
//! returned as [`Error`]; only the `mysql-probe` binary turns them into a
//! process exit.
//!
//! The MySQL wire protocol itself is handled by `mysql_async`.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> mysql_probe::Result<()> {
//! use mysql_probe::{acquire, ConnectionConfig};
//!
//! let config = ConnectionConfig::builder("localhost", "root", "testdb").build();
//! let handle = acquire(&config).await?;
//! println!("connected, id {}", handle.connection_id());
//! handle.release().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod metrics;

pub use client::{acquire, acquire_url, release, ConnectionInfo};
pub use config::{resolve, ConfigLayer};
pub use connection::{ConnectionConfig, ConnectionHandle, ConnectionState, TransportType};
pub use error::{Error, Result};
