//! Driving a 433 MHz OOK transmitter from a GPIO pin to control
//! motorized window shutters.
//!
//! A numeric command code is encoded into a fixed-width bit sequence,
//! turned into a timed pulse train by [`waveform::Waveform`] according
//! to one of the [`protocol`] table entries, and played out on a
//! [`Pin`] by a [`Transmitter`] session with microsecond-grade sleeps.
//!
//! [`protocol`]: ook433_core::protocol
//! [`Pin`]: ook433_core::gpio::Pin

pub mod codes;
pub mod encode;
pub mod error;
pub mod pin;
pub mod prelude;
pub mod transmitter;
pub mod waveform;

pub use ook433_core::{gpio, protocol, sleep};

pub use transmitter::Transmitter;
