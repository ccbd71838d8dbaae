use ook433_core::gpio::{Level, Pin, PinError};

/// A [`Pin`] that records every transition instead of driving
/// hardware.
///
/// Used to verify what a transmission would put on the wire, and to
/// inject pin failures with [`Audit::break_down`].
#[derive(Debug, Default)]
pub struct Audit {
    is_open: bool,
    broken: bool,
    opens: usize,
    writes: Vec<Level>,
}

impl Audit {
    /// Creates a new [`Audit`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            broken: false,
            opens: 0,
            writes: Vec::new(),
        }
    }

    /// Makes every subsequent pin operation fail.
    pub fn break_down(&mut self) {
        self.broken = true;
    }

    /// Undoes [`Audit::break_down`].
    pub fn repair(&mut self) {
        self.broken = false;
    }

    /// Every level written while the pin was open.
    #[must_use]
    pub fn writes(&self) -> &[Level] {
        &self.writes
    }

    /// How many times the pin was configured as an output.
    #[must_use]
    pub const fn opens(&self) -> usize {
        self.opens
    }
}

impl Pin for Audit {
    fn open(&mut self) -> Result<(), PinError> {
        if self.broken {
            return Err(PinError::new("broken"));
        }
        self.is_open = true;
        self.opens += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), PinError> {
        if self.broken {
            return Err(PinError::new("broken"));
        }
        self.is_open = false;
        Ok(())
    }

    fn set(&mut self, level: Level) -> Result<(), PinError> {
        if self.broken {
            return Err(PinError::new("broken"));
        }
        if !self.is_open {
            return Err(PinError::new("pin is not configured for output"));
        }
        self.writes.push(level);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
