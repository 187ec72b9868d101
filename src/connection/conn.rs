//! Connection configuration and handle types

use super::state::ConnectionState;
use crate::{Error, Result};
use mysql_async::{Conn, OptsBuilder};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default MySQL TCP port
pub const DEFAULT_PORT: u16 = 3306;

/// Default host when none is configured
pub const DEFAULT_HOST: &str = "localhost";

/// Transport type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    /// TCP socket
    Tcp,
    /// Unix domain socket
    Unix,
}

/// Connection configuration
///
/// Built once at startup and shared by reference with every `acquire` call.
/// There are no setters; use `ConnectionConfig::builder()` to construct one.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
    socket: Option<PathBuf>,
    connect_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Create a TCP configuration with default port and empty password
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self::builder(host, username, database).build()
    }

    /// Create a builder for advanced configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use mysql_probe::ConnectionConfig;
    /// use std::time::Duration;
    ///
    /// let config = ConnectionConfig::builder("db.internal", "app", "orders")
    ///     .password("secret")
    ///     .port(3307)
    ///     .connect_timeout(Duration::from_secs(5))
    ///     .build();
    ///
    /// assert_eq!(config.target(), "app@db.internal:3307/orders");
    /// ```
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        database: impl Into<String>,
    ) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: String::new(),
            database: database.into(),
            socket: None,
            connect_timeout: None,
        }
    }

    /// Server host name or address
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server TCP port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Login user
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password (may be empty)
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Default schema selected on connect
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Unix socket path, used instead of TCP when set
    pub fn socket(&self) -> Option<&Path> {
        self.socket.as_deref()
    }

    /// Connect timeout (`None` leaves the client default in place)
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Which transport `acquire` will use
    pub fn transport(&self) -> TransportType {
        if self.socket.is_some() {
            TransportType::Unix
        } else {
            TransportType::Tcp
        }
    }

    /// Human-readable connection target, safe to log
    pub fn target(&self) -> String {
        match (self.transport(), &self.socket) {
            (TransportType::Unix, Some(path)) => {
                format!("{}@{}/{}", self.username, path.display(), self.database)
            }
            _ => format!(
                "{}@{}:{}/{}",
                self.username, self.host, self.port, self.database
            ),
        }
    }

    /// Check the constraints the server cannot be asked about
    ///
    /// Host, username and database must be non-empty; the password may be empty.
    pub fn validate(&self) -> Result<()> {
        match self.transport() {
            TransportType::Tcp => {
                if self.host.trim().is_empty() {
                    return Err(Error::Config("host must not be empty".into()));
                }
                if self.port == 0 {
                    return Err(Error::Config("port must be non-zero".into()));
                }
            }
            TransportType::Unix => {
                if self.socket.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                    return Err(Error::Config("socket path must not be empty".into()));
                }
            }
        }
        if self.username.trim().is_empty() {
            return Err(Error::Config("username must not be empty".into()));
        }
        if self.database.trim().is_empty() {
            return Err(Error::Config("database must not be empty".into()));
        }
        if self.connect_timeout == Some(Duration::ZERO) {
            return Err(Error::Config("connect timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Translate into client options
    pub(crate) fn to_opts(&self) -> OptsBuilder {
        let mut opts = OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.username.clone()))
            .db_name(Some(self.database.clone()));

        // The server treats an absent and an empty password the same way
        if !self.password.is_empty() {
            opts = opts.pass(Some(self.password.clone()));
        }

        if let (TransportType::Unix, Some(path)) = (self.transport(), &self.socket) {
            opts = opts.socket(Some(path.to_string_lossy().into_owned()));
        }

        opts
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field(
                "password",
                &if self.password.is_empty() { "" } else { "***" },
            )
            .field("database", &self.database)
            .field("socket", &self.socket)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Builder for creating `ConnectionConfig`
#[derive(Debug, Clone)]
pub struct ConnectionConfigBuilder {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
    socket: Option<PathBuf>,
    connect_timeout: Option<Duration>,
}

impl ConnectionConfigBuilder {
    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the TCP port
    ///
    /// Default: 3306
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Connect through a Unix domain socket instead of TCP
    pub fn socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.socket = Some(path.into());
        self
    }

    /// Set connect timeout
    ///
    /// Default: None (client library default)
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            database: self.database,
            socket: self.socket,
            connect_timeout: self.connect_timeout,
        }
    }
}

/// Open session to a MySQL server
///
/// Owned by whoever called `acquire`. Hand it back through
/// [`ConnectionHandle::release`]; dropping an open handle closes the socket
/// without the graceful `COM_QUIT` exchange and logs a warning.
pub struct ConnectionHandle {
    conn: Option<Conn>,
    state: ConnectionState,
    target: String,
}

impl ConnectionHandle {
    pub(crate) fn new(conn: Conn, target: String) -> Self {
        crate::metrics::gauges::handle_opened();
        Self {
            conn: Some(conn),
            state: ConnectionState::Open,
            target,
        }
    }

    /// Get current handle state
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Connection target this handle was opened against
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Server-assigned connection id
    pub fn connection_id(&self) -> u32 {
        self.conn.as_ref().map(Conn::id).unwrap_or_default()
    }

    /// Server version as (major, minor, patch)
    pub fn server_version(&self) -> (u16, u16, u16) {
        self.conn
            .as_ref()
            .map(Conn::server_version)
            .unwrap_or_default()
    }

    /// Borrow the underlying client connection
    pub fn conn_mut(&mut self) -> Result<&mut Conn> {
        let state = self.state;
        self.conn.as_mut().ok_or_else(|| Error::InvalidState {
            expected: "open".into(),
            actual: state.to_string(),
        })
    }

    /// Release the handle
    ///
    /// Consumes the handle, so it cannot be released twice.
    pub async fn release(mut self) -> Result<()> {
        self.state.transition(ConnectionState::Closed)?;
        crate::metrics::gauges::handle_closed();
        crate::metrics::counters::released();

        let conn = self.conn.take().ok_or_else(|| Error::InvalidState {
            expected: "open handle with a live session".into(),
            actual: "no session".into(),
        })?;
        let id = conn.id();
        conn.disconnect().await.map_err(|source| Error::Connection {
            target: self.target.clone(),
            source,
        })?;
        tracing::debug!(connection_id = id, endpoint = %self.target, "connection released");
        Ok(())
    }
}

impl std::fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("target", &self.target)
            .field("state", &self.state)
            .field("connection_id", &self.connection_id())
            .finish()
    }
}

impl Drop for ConnectionHandle {
    fn drop(&mut self) {
        if self.state.is_open() {
            crate::metrics::gauges::handle_closed();
            tracing::warn!(
                endpoint = %self.target,
                "connection handle dropped without release"
            );
        }
    }
}
