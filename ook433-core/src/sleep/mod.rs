use std::time::Duration;

pub use spin_sleep::{SpinSleeper, SpinStrategy};

/// A trait for sleep operations.
///
/// The shortest pulse of the shipped protocols is well under a
/// millisecond, so the sleeper used for transmission must bound the
/// overshoot introduced by scheduler granularity. [`SpinSleeper`]
/// does: it sleeps inside its accuracy budget and spins the tail.
pub trait Sleep: std::fmt::Debug {
    /// Sleeps for the specified duration.
    fn sleep(&self, duration: Duration);
}

impl Sleep for Box<dyn Sleep> {
    fn sleep(&self, duration: Duration) {
        self.as_ref().sleep(duration);
    }
}

/// A sleeper that uses [`std::thread::sleep`].
///
/// Too coarse for pulse timing on a non-realtime kernel; kept for
/// callers that only drive long waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StdSleeper;

impl Sleep for StdSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl Sleep for SpinSleeper {
    fn sleep(&self, duration: Duration) {
        SpinSleeper::sleep(*self, duration);
    }
}

/// A sleeper that spins until the deadline is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpinWaitSleeper;

impl Sleep for SpinWaitSleeper {
    fn sleep(&self, duration: Duration) {
        use std::time::Instant;

        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            std::hint::spin_loop();
        }
    }
}

/// A sleeper that returns immediately.
///
/// Useful with an emulated pin, where real pulse timing is
/// irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoopSleeper;

impl Sleep for NoopSleeper {
    fn sleep(&self, _: Duration) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn spin_wait_sleeper_reaches_deadline() {
        let start = Instant::now();
        SpinWaitSleeper.sleep(Duration::from_micros(200));
        assert!(start.elapsed() >= Duration::from_micros(200));
    }

    #[test]
    fn spin_sleeper_reaches_deadline() {
        let start = Instant::now();
        SpinSleeper::default().sleep(Duration::from_micros(200));
        assert!(start.elapsed() >= Duration::from_micros(200));
    }

    #[test]
    fn noop_sleeper_returns_immediately() {
        let start = Instant::now();
        NoopSleeper.sleep(Duration::from_secs(3600));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
