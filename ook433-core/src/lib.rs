#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for ook433.

/// An interface to the transmitter pin.
pub mod gpio;
/// RF line-coding protocol definitions.
pub mod protocol;
/// Sleep operations for pulse timing.
pub mod sleep;
