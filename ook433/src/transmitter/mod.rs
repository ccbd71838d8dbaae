use getset::{CopyGetters, Getters, MutGetters, Setters};
use ook433_core::{
    gpio::{Pin, Pulse},
    protocol::{Protocol, DEFAULT_PROTOCOL},
    sleep::{Sleep, SpinSleeper},
};

use crate::{
    codes::{DeviceCodeTable, ShutterCommand},
    encode::encode,
    error::OokError,
    waveform::Waveform,
};

/// Default number of repetitions per code.
pub const DEFAULT_REPEAT: usize = 8;
/// Default encoded width of a code in bits.
pub const DEFAULT_CODE_LENGTH: usize = 40;

/// Per-call transmission parameters.
///
/// A set field overrides (and overwrites) the session default; the
/// pulse length falls back to the protocol's own base unit when
/// neither the call nor the session configures one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOption {
    /// Protocol table index to transmit with.
    pub protocol: Option<usize>,
    /// Base pulse length override \[µs\].
    pub pulse_length: Option<u32>,
    /// Encoded width of each code in bits.
    pub code_length: usize,
}

impl Default for SendOption {
    fn default() -> Self {
        Self {
            protocol: None,
            pulse_length: None,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

/// A transmitter session owning one GPIO pin.
///
/// The session is the sole owner of its pin; there is no process-wide
/// transmitter state, so several sessions on distinct pins are safe
/// while one pin must never be shared between sessions. The pin is
/// *armed* (configured as an output) only while the session is
/// enabled, and dropping the session disarms it — a crashed or
/// careless caller never leaves the transmitter keyed.
///
/// Transmission is synchronous and blocking: once [`Transmitter::send`]
/// starts, the calling thread is committed until the last pulse or the
/// first failure.
#[derive(Debug, Getters, MutGetters, CopyGetters, Setters)]
pub struct Transmitter<P: Pin, S: Sleep = SpinSleeper> {
    /// The owned pin backend.
    #[getset(get = "pub", get_mut = "pub")]
    pin: P,
    sleeper: S,
    /// Session default protocol table index.
    #[getset(get_copy = "pub", set = "pub")]
    protocol: usize,
    /// Session default pulse length \[µs\], if configured.
    #[getset(get_copy = "pub", set = "pub")]
    pulse_length: Option<u32>,
    /// How many times each code is re-transmitted.
    #[getset(get_copy = "pub", set = "pub")]
    repeat: usize,
    /// Session default encoded code width in bits.
    #[getset(get_copy = "pub", set = "pub")]
    code_length: usize,
}

impl<P: Pin> Transmitter<P> {
    /// Creates a session with a [`SpinSleeper`] and the default
    /// configuration: shutter protocol, 8 repetitions, 40 bit codes,
    /// pulse length derived from the protocol.
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self::with_sleeper(pin, SpinSleeper::default())
    }
}

impl<P: Pin, S: Sleep> Transmitter<P, S> {
    /// Creates a session driving pulses with `sleeper`.
    #[must_use]
    pub fn with_sleeper(pin: P, sleeper: S) -> Self {
        Self {
            pin,
            sleeper,
            protocol: DEFAULT_PROTOCOL,
            pulse_length: None,
            repeat: DEFAULT_REPEAT,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Whether the pin is currently armed for output.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pin.is_open()
    }

    /// Arms the pin for output. No-op when already armed.
    pub fn enable(&mut self) -> Result<(), OokError> {
        if !self.pin.is_open() {
            self.pin.open()?;
            tracing::debug!("TX enabled");
        }
        Ok(())
    }

    /// Reverts the pin to an input. No-op when already idle.
    ///
    /// Input is the safety default: an output left high would key the
    /// transmitter until something else touches the pin.
    pub fn disable(&mut self) -> Result<(), OokError> {
        if self.pin.is_open() {
            self.pin.close()?;
            tracing::debug!("TX disabled");
        }
        Ok(())
    }

    /// Transmits every code in `codes`, [`repeat`] times each, back
    /// to back.
    ///
    /// Fails with [`OokError::TransmitterDisabled`] unless the session
    /// is enabled. All codes are encoded before the first pulse, so a
    /// code that does not fit the configured width aborts without
    /// touching the pin; a pulse-level failure aborts the remaining
    /// codes and repetitions immediately.
    ///
    /// [`repeat`]: Transmitter::repeat
    #[tracing::instrument(skip(self))]
    pub fn send(&mut self, codes: &[u64], option: SendOption) -> Result<(), OokError> {
        if !self.pin.is_open() {
            return Err(OokError::TransmitterDisabled);
        }

        let protocol = self.select_protocol(option.protocol)?;
        if let Some(pulse_length) = option.pulse_length {
            self.pulse_length = Some(pulse_length);
        }
        self.code_length = option.code_length;
        let pulse_length = self.pulse_length.unwrap_or(protocol.pulse_length);

        let rawcodes = codes
            .iter()
            .map(|&code| encode(code, self.code_length))
            .collect::<Result<Vec<_>, _>>()?;

        let waveform = Waveform::new(protocol, pulse_length, self.repeat);
        rawcodes.iter().try_for_each(|bits| {
            tracing::trace!("TX bits: {:?}", bits);
            waveform
                .pulses(bits)
                .into_iter()
                .try_for_each(|pulse| self.drive(pulse))
        })
    }

    /// Resolves the device token against `table` and transmits every
    /// matched code in one armed bracket.
    ///
    /// Zero matches means nothing to do: the call succeeds without
    /// touching the pin. Otherwise the session enables the pin, sends
    /// all matched codes with the session defaults, and disables the
    /// pin again — also on failure, before the error propagates.
    #[tracing::instrument(skip(self, table))]
    pub fn send_shutter_command(
        &mut self,
        table: &DeviceCodeTable,
        device: &str,
        command: ShutterCommand,
    ) -> Result<(), OokError> {
        let codes = table.matching_codes(device, command);
        if codes.is_empty() {
            tracing::debug!("No device matches {:?}, nothing to send", device);
            return Ok(());
        }

        self.enable()?;
        let sent = self.send(&codes, SendOption::default());
        let disabled = self.disable();
        sent.and(disabled)
    }

    /// The explicit override goes through the table so a bad index is
    /// reported as such; an invalid session selection means no valid
    /// protocol is selected at all.
    fn select_protocol(&mut self, index: Option<usize>) -> Result<&'static Protocol, OokError> {
        match index {
            Some(index) => {
                let protocol = Protocol::get(index)?;
                self.protocol = index;
                Ok(protocol)
            }
            None => Protocol::get(self.protocol).map_err(|_| OokError::ProtocolUnselected),
        }
    }

    fn drive(&mut self, pulse: Pulse) -> Result<(), OokError> {
        self.pin.set(pulse.level)?;
        self.sleeper.sleep(pulse.duration);
        Ok(())
    }
}

impl<P: Pin, S: Sleep> Drop for Transmitter<P, S> {
    fn drop(&mut self) {
        if self.pin.is_open() {
            let _ = self.pin.close();
        }
    }
}
