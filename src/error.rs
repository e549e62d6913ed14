//! Error types for routewatch.
//!
//! Every error maps to an UNKNOWN verdict: the check could not complete, so
//! no statement about the router's health is made. The `Display` strings are
//! what ends up after `UNKNOWN: ` on stdout, so they are written for a human
//! reading a monitoring alert.

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of a probe run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// SNMP transport or agent failure (timeout, refused, bad community).
    #[error("SNMP Error: {0}")]
    Snmp(String),

    /// The `-H` argument could not be resolved to a target address.
    #[error("invalid target '{host}': {reason}")]
    Target { host: String, reason: String },

    /// A peer argument that is not a valid IP address.
    #[error("invalid peer address '{0}'")]
    PeerAddress(String),

    /// The requested peer/interface/AS was absent from the walk results.
    #[error("{0} not found in SNMP walk results")]
    NotFound(String),

    /// A table row was missing a column the probe needs.
    #[error("walk result is missing column {0}")]
    MissingColumn(&'static str),

    /// A value string that could not be parsed into the expected type.
    #[error("malformed {column} value '{value}'")]
    Malformed { column: &'static str, value: String },

    /// An OID table index that does not follow the expected encoding.
    #[error("unparseable OID index '{0}'")]
    Index(String),
}

impl Error {
    /// Malformed-value constructor, shorthand for the common parse-failure path.
    pub fn malformed(column: &'static str, value: impl Into<String>) -> Self {
        Error::Malformed {
            column,
            value: value.into(),
        }
    }
}
