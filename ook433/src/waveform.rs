use bit_vec::BitVec;
use itertools::Itertools;
use ook433_core::{gpio::Pulse, protocol::Protocol};

/// Pulse-train generator for one encoded code.
///
/// Pure: it produces the ordered, finite pulse list without touching
/// the pin or the clock, so the exact waveform is verifiable in tests
/// and the hardware-facing side stays trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform<'a> {
    protocol: &'a Protocol,
    pulse_length: u32,
    repeat: usize,
}

impl<'a> Waveform<'a> {
    /// Creates a new [`Waveform`].
    ///
    /// `pulse_length` is the base unit for the data pulses \[µs\];
    /// `repeat` is how many times the identical repetition block is
    /// re-transmitted for reception reliability.
    #[must_use]
    pub const fn new(protocol: &'a Protocol, pulse_length: u32, repeat: usize) -> Self {
        Self {
            protocol,
            pulse_length,
            repeat,
        }
    }

    /// The full pulse train for `bits`: `repeat` sequential
    /// repetitions of the sync pattern, the data bits and the repeat
    /// delay.
    #[must_use]
    pub fn pulses(&self, bits: &BitVec) -> Vec<Pulse> {
        itertools::repeat_n(self.repetition(bits), self.repeat)
            .flatten()
            .collect()
    }

    /// One repetition block.
    ///
    /// Sync pulses are absolute microseconds; data pulses are scaled
    /// by the pulse length; the block ends with one LOW repeat-delay
    /// pause.
    fn repetition(&self, bits: &BitVec) -> Vec<Pulse> {
        let p = self.protocol;
        let sync = itertools::repeat_n(
            [Pulse::high_us(p.sync_high), Pulse::low_us(p.sync_low)],
            p.sync_count as usize,
        )
        .flatten();
        let sync_delay = (p.sync_delay > 0)
            .then(|| Pulse::low_us(p.sync_delay))
            .into_iter();
        let data = bits.iter().flat_map(|bit| {
            let (high, low) = if bit {
                (p.one_high, p.one_low)
            } else {
                (p.zero_high, p.zero_low)
            };
            [
                Pulse::high_us(high * self.pulse_length),
                Pulse::low_us(low * self.pulse_length),
            ]
        });

        sync.chain(sync_delay)
            .chain(data)
            .chain([Pulse::low_us(p.repeat_delay)])
            .collect_vec()
    }
}
