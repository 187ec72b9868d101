//! Connection string parsing
//!
//! Supports formats:
//! * mysql://[user[:password]@][host][:port][/database][?params]
//! * mysql:///database?socket=/path/to/mysqld.sock (Unix socket)
//!
//! Recognized query parameters: `socket`, `connect_timeout` (seconds).

use crate::connection::{ConnectionConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed connection info
///
/// Fields the string leaves out stay `None` so that other configuration
/// sources can fill them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Host (for TCP)
    pub host: Option<String>,
    /// Port (for TCP)
    pub port: Option<u16>,
    /// Unix socket path
    pub socket: Option<PathBuf>,
    /// Database name
    pub database: Option<String>,
    /// Username
    pub user: Option<String>,
    /// Password
    pub password: Option<String>,
    /// Connect timeout
    pub connect_timeout: Option<Duration>,
}

/// Extract a query parameter value from a query string
fn parse_query_param(query_string: &str, param: &str) -> Option<String> {
    if query_string.is_empty() {
        return None;
    }

    let query = query_string.trim_start_matches('?');

    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == param {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Parse a timeout given in whole seconds
pub(crate) fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .parse()
        .map_err(|_| Error::Config(format!("invalid connect_timeout '{}'", value)))?;
    timeout_from_secs(secs)
}

/// Build a connect timeout from whole seconds, rejecting zero
pub(crate) fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(Error::Config("connect_timeout must be greater than zero".into()));
    }
    Ok(Duration::from_secs(secs))
}

/// Split `host[:port]`, accepting bracketed IPv6 literals (`[::1]:3306`)
fn split_host_port(host_port: &str) -> Result<(Option<String>, Option<u16>)> {
    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']').ok_or_else(|| {
            Error::Config(format!("unterminated IPv6 address '{}'", host_port))
        })?;
        let port = match after {
            "" => None,
            _ => Some(after.strip_prefix(':').ok_or_else(|| {
                Error::Config(format!("unexpected '{}' after IPv6 address", after))
            })?),
        };
        (host, port)
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    let port = port
        .map(|port| {
            let port: u16 = port
                .parse()
                .map_err(|_| Error::Config(format!("invalid port '{}'", port)))?;
            if port == 0 {
                return Err(Error::Config("port must be non-zero".into()));
            }
            Ok(port)
        })
        .transpose()?;

    Ok((non_empty(host), port))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl ConnectionInfo {
    /// Parse connection string
    pub fn parse(s: &str) -> Result<Self> {
        let rest = s.strip_prefix("mysql://").ok_or_else(|| {
            Error::Config("connection string must start with mysql://".into())
        })?;

        let (rest, query_string) = match rest.find('?') {
            Some(q_pos) => rest.split_at(q_pos),
            None => (rest, ""),
        };

        let socket = parse_query_param(query_string, "socket")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let connect_timeout = parse_query_param(query_string, "connect_timeout")
            .map(|v| parse_timeout_secs(&v))
            .transpose()?;

        // Format: mysql:///database?socket=...
        if let Some(path) = rest.strip_prefix('/') {
            if socket.is_none() {
                return Err(Error::Config(
                    "connection string without a host requires the socket parameter".into(),
                ));
            }
            return Ok(Self {
                socket,
                database: non_empty(path.trim_start_matches('/')),
                connect_timeout,
                ..Self::default()
            });
        }

        // Format: [user[:password]@]host[:port][/database]
        let (authority, database) = match rest.split_once('/') {
            Some((authority, db)) => (authority, non_empty(db)),
            None => (rest, None),
        };

        // rfind so that an '@' inside the password is kept
        let (auth, host_port) = match authority.rfind('@') {
            Some(pos) => (Some(&authority[..pos]), &authority[pos + 1..]),
            None => (None, authority),
        };

        let (user, password) = match auth {
            Some(auth) => match auth.split_once(':') {
                Some((user, pass)) => (non_empty(user), Some(pass.to_string())),
                None => (non_empty(auth), None),
            },
            None => (None, None),
        };

        let (host, port) = split_host_port(host_port)?;

        Ok(Self {
            host,
            port,
            socket,
            database,
            user,
            password,
            connect_timeout,
        })
    }

    /// Convert to ConnectionConfig, filling unset fields with defaults
    ///
    /// The database has no default and must be present.
    pub fn to_config(&self) -> Result<ConnectionConfig> {
        let database = self
            .database
            .clone()
            .ok_or_else(|| Error::Config("database is required".into()))?;

        let mut builder = ConnectionConfig::builder(
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
            self.user.clone().unwrap_or_else(whoami::username),
            database,
        )
        .port(self.port.unwrap_or(DEFAULT_PORT));

        if let Some(ref password) = self.password {
            builder = builder.password(password);
        }
        if let Some(ref socket) = self.socket {
            builder = builder.socket(socket);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }
}
