use std::time::Duration;

use super::pin::Level;

/// One pulse instruction: hold `level` for `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pulse {
    /// Level to drive.
    pub level: Level,
    /// How long to hold it.
    pub duration: Duration,
}

impl Pulse {
    /// Creates a new [`Pulse`].
    #[must_use]
    pub const fn new(level: Level, duration: Duration) -> Self {
        Self { level, duration }
    }

    /// HIGH for `us` microseconds.
    #[must_use]
    pub const fn high_us(us: u32) -> Self {
        Self::new(Level::High, Duration::from_micros(us as u64))
    }

    /// LOW for `us` microseconds.
    #[must_use]
    pub const fn low_us(us: u32) -> Self {
        Self::new(Level::Low, Duration::from_micros(us as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_us_constructors() {
        assert_eq!(
            Pulse::new(Level::High, Duration::from_micros(4750)),
            Pulse::high_us(4750)
        );
        assert_eq!(
            Pulse::new(Level::Low, Duration::from_micros(9600)),
            Pulse::low_us(9600)
        );
    }
}
