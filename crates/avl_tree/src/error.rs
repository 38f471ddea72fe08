use thiserror::Error;

/// Returned by accessors that require the key to be present.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyError;
