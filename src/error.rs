//! Unified error type.

use std::fmt;

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for everything that can fail in sphere.
///
/// Route-level outcomes (404, redirects) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type covers
/// the rest: an unreadable config file, an unreachable or failing database,
/// a broken template, and socket-level I/O.
#[derive(Debug)]
pub enum Error {
    /// `config.json` is missing or does not parse.
    Config(String),
    /// The database rejected a connection, query, or exec.
    Storage(sqlx::Error),
    /// A template failed to load or render.
    Render(tera::Error),
    /// Socket-level failure: binding the listen port, accepting a connection.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Storage(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e)
    }
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        Self::Render(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
