use super::error::PinError;

/// Logic level of the transmitter pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Carrier off.
    Low,
    /// Carrier on.
    High,
}

/// A trait that provides the interface with the transmitter pin.
///
/// This is the only seam through which the rest of the crate touches
/// hardware. A pin is *open* while it is configured as an output;
/// closing it reverts it to an input so the transmitter cannot be left
/// keyed by a floating output.
pub trait Pin: Send {
    /// Configures the pin as an output, ready to drive.
    fn open(&mut self) -> Result<(), PinError>;

    /// Reverts the pin to an input.
    fn close(&mut self) -> Result<(), PinError>;

    /// Drives the output to `level`.
    fn set(&mut self, level: Level) -> Result<(), PinError>;

    /// Checks if the pin is configured as an output.
    #[must_use]
    fn is_open(&self) -> bool;
}

impl Pin for Box<dyn Pin> {
    fn open(&mut self) -> Result<(), PinError> {
        self.as_mut().open()
    }

    fn close(&mut self) -> Result<(), PinError> {
        self.as_mut().close()
    }

    fn set(&mut self, level: Level) -> Result<(), PinError> {
        self.as_mut().set(level)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
