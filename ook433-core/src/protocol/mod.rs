use thiserror::Error;

/// Timing constants of one OOK line-coding protocol.
///
/// Sync pulse widths are absolute microseconds ("irregular"
/// waveforms), while data pulse widths are small multiples of
/// [`pulse_length`]. Receivers rely on that distinction: the long
/// protocol-identifying sync gap is not derived from the data bit
/// timing.
///
/// [`pulse_length`]: Protocol::pulse_length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protocol {
    /// Base unit for regular data pulses \[µs\].
    pub pulse_length: u32,
    /// Gap after each full transmission of a code \[µs\].
    pub repeat_delay: u32,
    /// Number of sync pulses before the data bits.
    pub sync_count: u32,
    /// Extra pause after the sync pulses, 0 for none \[µs\].
    pub sync_delay: u32,
    /// HIGH width of a sync pulse \[µs\].
    pub sync_high: u32,
    /// LOW width of a sync pulse \[µs\].
    pub sync_low: u32,
    /// HIGH width of a `0` bit, in pulse-length units.
    pub zero_high: u32,
    /// LOW width of a `0` bit, in pulse-length units.
    pub zero_low: u32,
    /// HIGH width of a `1` bit, in pulse-length units.
    pub one_high: u32,
    /// LOW width of a `1` bit, in pulse-length units.
    pub one_low: u32,
}

/// Generic motorized-shutter protocol ("home smart" remotes).
pub const SHUTTER: Protocol = Protocol {
    pulse_length: 40,
    repeat_delay: 9600,
    sync_count: 1,
    sync_delay: 0,
    sync_high: 4750,
    sync_low: 1550,
    zero_high: 8,
    zero_low: 19,
    one_high: 17,
    one_low: 10,
};

/// Garage-door protocol.
///
/// Retained for reference only: the receiver uses rolling codes, so
/// replaying a static code has no effect.
pub const GARAGE_DOOR: Protocol = Protocol {
    pulse_length: 40,
    repeat_delay: 15200,
    sync_count: 12,
    sync_delay: 3500,
    sync_high: 360,
    sync_low: 400,
    zero_high: 9,
    zero_low: 20,
    one_high: 18,
    one_low: 10,
};

/// Index of the default ([`SHUTTER`]) protocol.
pub const DEFAULT_PROTOCOL: usize = 1;

// Index 0 is reserved so a protocol number on the wire is never 0.
const PROTOCOLS: &[Option<Protocol>] = &[None, Some(SHUTTER), Some(GARAGE_DOOR)];

/// An error produced by the protocol table.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The protocol index is reserved or out of the table bounds.
    #[error("Protocol index ({0}) is reserved or out of range")]
    UnknownProtocol(usize),
}

impl Protocol {
    /// Looks up a protocol by its table index.
    ///
    /// The table is fixed; index 0 is reserved and always fails with
    /// [`ProtocolError::UnknownProtocol`].
    pub fn get(index: usize) -> Result<&'static Protocol, ProtocolError> {
        PROTOCOLS
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ProtocolError::UnknownProtocol(index))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Ok(&SHUTTER), 1)]
    #[case(Ok(&GARAGE_DOOR), 2)]
    #[case(Err(ProtocolError::UnknownProtocol(0)), 0)]
    #[case(Err(ProtocolError::UnknownProtocol(3)), 3)]
    #[case(Err(ProtocolError::UnknownProtocol(usize::MAX)), usize::MAX)]
    fn get(
        #[case] expect: Result<&'static Protocol, ProtocolError>,
        #[case] index: usize,
    ) {
        assert_eq!(expect, Protocol::get(index));
    }

    #[test]
    fn default_is_shutter() {
        assert_eq!(Ok(&SHUTTER), Protocol::get(DEFAULT_PROTOCOL));
    }

    #[test]
    fn pulse_length_is_positive() {
        PROTOCOLS.iter().flatten().for_each(|p| {
            assert!(p.pulse_length > 0);
        });
    }
}
