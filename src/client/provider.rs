//! Connection provider

use super::connection_string::ConnectionInfo;
use crate::connection::{ConnectionConfig, ConnectionHandle};
use crate::{Error, Result};
use mysql_async::Conn;
use std::time::Instant;
use tracing::Instrument;

/// Open a session to the server described by `config`
///
/// The configuration is validated first; nothing touches the network when
/// validation fails. Connection failures come back as [`Error::Connection`]
/// with the client's diagnostic attached. Whether to terminate is up to the
/// caller.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> mysql_probe::Result<()> {
/// use mysql_probe::{acquire, ConnectionConfig};
///
/// let config = ConnectionConfig::new("localhost", "root", "testdb");
///
/// let first = acquire(&config).await?;
/// let second = acquire(&config).await?;
/// assert_ne!(first.connection_id(), second.connection_id());
///
/// first.release().await?;
/// second.release().await?;
/// # Ok(())
/// # }
/// ```
pub async fn acquire(config: &ConnectionConfig) -> Result<ConnectionHandle> {
    let target = config.target();
    let started = Instant::now();

    let result: Result<ConnectionHandle> = async {
        config.validate()?;
        crate::metrics::counters::acquire_attempted();

        let connect = Conn::new(config.to_opts());
        let conn = match config.connect_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, connect)
                .await
                .map_err(|_| Error::ConnectTimeout {
                    target: target.clone(),
                    timeout,
                })?,
            None => connect.await,
        }
        .map_err(|source| Error::Connection {
            target: target.clone(),
            source,
        })?;

        let (major, minor, patch) = conn.server_version();
        tracing::info!(
            connection_id = conn.id(),
            server_version = %format!("{}.{}.{}", major, minor, patch),
            "connection established"
        );
        Ok(ConnectionHandle::new(conn, target.clone()))
    }
    .instrument(tracing::info_span!(
        "acquire",
        user = %config.username(),
        database = %config.database()
    ))
    .await;

    match &result {
        Ok(_) => {
            crate::metrics::counters::acquire_succeeded();
            crate::metrics::histograms::acquire_duration("ok", started.elapsed());
        }
        Err(e) if e.is_config_error() => {
            tracing::debug!(error = %e, "configuration rejected before connecting");
        }
        Err(e) => {
            tracing::debug!(category = e.category(), error = %e, "connection attempt failed");
            crate::metrics::counters::acquire_failed(e.category());
            crate::metrics::histograms::acquire_duration("error", started.elapsed());
        }
    }

    result
}

/// Parse a `mysql://` connection string and open a session with it
pub async fn acquire_url(connection_string: &str) -> Result<ConnectionHandle> {
    let config = ConnectionInfo::parse(connection_string)?.to_config()?;
    acquire(&config).await
}

/// Release a handle obtained from [`acquire`]
///
/// Same as [`ConnectionHandle::release`].
pub async fn release(handle: ConnectionHandle) -> Result<()> {
    handle.release().await
}
