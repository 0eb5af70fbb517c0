use failure::Fail;
use std::result;

/// Error type for chainkv
#[derive(Fail, Debug)]
pub enum TableError {
    /// A table was requested with zero buckets
    #[fail(display = "capacity must be positive")]
    ZeroCapacity,
    /// A `KEY=VALUE` argument had no `=` in it
    #[fail(display = "malformed pair `{}`, expected KEY=VALUE", _0)]
    InvalidPair(String),
    /// Serialization error
    #[fail(display = "{}", _0)]
    Serde(#[cause] serde_json::Error),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> TableError {
        TableError::Serde(err)
    }
}

/// Result type for chainkv
pub type Result<T> = result::Result<T, TableError>;
