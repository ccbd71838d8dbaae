use thiserror::Error;

/// An error produced by the pin backend.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{msg}")]
pub struct PinError {
    msg: String,
}

impl PinError {
    /// Creates a new [`PinError`] with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
