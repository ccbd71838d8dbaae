use ook433_core::{gpio::PinError, protocol::ProtocolError};
use thiserror::Error;

/// An interface for error handling in ook433.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OokError {
    /// The command code does not fit in the configured bit width.
    #[error("Code ({code}) does not fit in {width} bits")]
    CodeTooWide {
        /// The offending command code.
        code: u64,
        /// The configured bit width.
        width: usize,
    },

    /// The code width is outside `1..=64`.
    #[error("Code width ({0}) must be between 1 and 64")]
    InvalidCodeWidth(usize),

    /// The session has no valid protocol selected.
    #[error("No valid TX protocol is selected")]
    ProtocolUnselected,

    /// Transmission was attempted while the pin is not armed.
    #[error("TX is not enabled, not sending data")]
    TransmitterDisabled,

    /// Error in the protocol table.
    #[error("{0}")]
    Protocol(#[from] ProtocolError),

    /// Error from the pin backend.
    #[error("{0}")]
    Pin(#[from] PinError),
}
