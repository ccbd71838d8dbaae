#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! Raspberry Pi GPIO pin backend for ook433, built on [`rppal`].

use ook433_core::gpio::{Level, Pin, PinError};
use rppal::gpio::{Gpio, IoPin, Mode};

/// A [`Pin`] driving a BCM-numbered GPIO through the Raspberry Pi's
/// memory-mapped GPIO interface.
///
/// The pin is claimed as an input and only switched to output while
/// armed; rppal additionally restores the previous mode when the pin
/// is dropped.
#[derive(Debug)]
pub struct RppalPin {
    pin: IoPin,
    is_open: bool,
}

impl RppalPin {
    /// Claims the GPIO with the given BCM number.
    pub fn new(bcm: u8) -> Result<Self, PinError> {
        let pin = Gpio::new()
            .map_err(|e| PinError::new(e.to_string()))?
            .get(bcm)
            .map_err(|e| PinError::new(e.to_string()))?
            .into_io(Mode::Input);
        tracing::debug!("Using GPIO {}", bcm);
        Ok(Self {
            pin,
            is_open: false,
        })
    }
}

impl Pin for RppalPin {
    fn open(&mut self) -> Result<(), PinError> {
        self.pin.set_mode(Mode::Output);
        self.pin.set_low();
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), PinError> {
        self.pin.set_low();
        self.pin.set_mode(Mode::Input);
        self.is_open = false;
        Ok(())
    }

    fn set(&mut self, level: Level) -> Result<(), PinError> {
        if !self.is_open {
            return Err(PinError::new("pin is not configured for output"));
        }
        match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
