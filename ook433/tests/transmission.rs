use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ook433::prelude::*;

// One shutter-protocol repetition: 1 sync pair, 40 data pairs, the
// repeat delay.
const PULSES_PER_REPETITION: usize = 2 + 80 + 1;

fn transmitter() -> Transmitter<Audit, NoopSleeper> {
    Transmitter::with_sleeper(Audit::new(), NoopSleeper)
}

#[test]
fn kitchen_stop_is_one_bracketed_transmission() -> anyhow::Result<()> {
    let table = DeviceCodeTable::sample();
    let mut tx = transmitter();

    tx.send_shutter_command(&table, "kitchen", ShutterCommand::Stop)?;

    assert!(!tx.is_enabled());
    assert_eq!(1, tx.pin().opens());
    assert_eq!(8 * PULSES_PER_REPETITION, tx.pin().writes().len());
    assert_eq!(Level::High, tx.pin().writes()[0]);
    assert_eq!(Level::Low, *tx.pin().writes().last().unwrap());
    Ok(())
}

#[test]
fn lroom_token_sends_three_codes_in_one_bracket() -> anyhow::Result<()> {
    let table = DeviceCodeTable::sample();
    let mut tx = transmitter();

    tx.send_shutter_command(&table, "lroom", ShutterCommand::Up)?;

    // Three device groups, one enable/disable cycle.
    assert_eq!(1, tx.pin().opens());
    assert_eq!(3 * 8 * PULSES_PER_REPETITION, tx.pin().writes().len());
    assert!(!tx.is_enabled());
    Ok(())
}

#[test]
fn unmatched_token_is_a_no_op() -> anyhow::Result<()> {
    let table = DeviceCodeTable::sample();
    let mut tx = transmitter();

    tx.send_shutter_command(&table, "nonexistent", ShutterCommand::Up)?;

    assert_eq!(0, tx.pin().opens());
    assert!(tx.pin().writes().is_empty());
    assert!(!tx.is_enabled());
    Ok(())
}

#[test]
fn send_while_idle_fails_without_pin_writes() {
    let mut tx = transmitter();
    assert_eq!(
        Err(OokError::TransmitterDisabled),
        tx.send(&[95357333845], SendOption::default())
    );
    assert!(tx.pin().writes().is_empty());
}

#[test]
fn disable_twice_matches_disable_once() -> anyhow::Result<()> {
    let mut tx = transmitter();
    tx.enable()?;

    tx.disable()?;
    let once = tx.is_enabled();
    tx.disable()?;
    assert_eq!(once, tx.is_enabled());
    assert!(!tx.is_enabled());
    Ok(())
}

#[test]
fn failed_transmission_still_disarms_the_pin() -> anyhow::Result<()> {
    // Fails every pin write after the first `limit` but keeps
    // open/close working, so the disable half of the bracket can be
    // observed.
    #[derive(Debug)]
    struct FlakyPin {
        is_open: bool,
        limit: usize,
        writes: Arc<AtomicUsize>,
    }

    impl Pin for FlakyPin {
        fn open(&mut self) -> Result<(), PinError> {
            self.is_open = true;
            Ok(())
        }
        fn close(&mut self) -> Result<(), PinError> {
            self.is_open = false;
            Ok(())
        }
        fn set(&mut self, _: Level) -> Result<(), PinError> {
            if self.writes.fetch_add(1, Ordering::SeqCst) >= self.limit {
                return Err(PinError::new("wedged"));
            }
            Ok(())
        }
        fn is_open(&self) -> bool {
            self.is_open
        }
    }

    let writes = Arc::new(AtomicUsize::new(0));
    let mut tx = Transmitter::with_sleeper(
        FlakyPin {
            is_open: false,
            limit: 10,
            writes: writes.clone(),
        },
        NoopSleeper,
    );

    let table = DeviceCodeTable::sample();
    let result = tx.send_shutter_command(&table, "kitchen", ShutterCommand::Stop);

    assert_eq!(Err(OokError::Pin(PinError::new("wedged"))), result);
    assert!(!tx.is_enabled());
    // Aborted on the failing pulse, well short of a full repetition.
    assert_eq!(11, writes.load(Ordering::SeqCst));
    Ok(())
}

#[test]
fn data_pulse_count_matches_code_width() -> anyhow::Result<()> {
    let bits = encode(95357333845, 40)?;
    let pulses = Waveform::new(&SHUTTER, SHUTTER.pulse_length, 1).pulses(&bits);

    // Exactly 40 (HIGH, LOW) data pairs between the sync pair and the
    // repeat delay, each HIGH matching the corresponding bit.
    let data = &pulses[2..pulses.len() - 1];
    assert_eq!(80, data.len());
    bits.iter().enumerate().for_each(|(i, bit)| {
        let expect = if bit {
            Pulse::high_us(SHUTTER.one_high * SHUTTER.pulse_length)
        } else {
            Pulse::high_us(SHUTTER.zero_high * SHUTTER.pulse_length)
        };
        assert_eq!(expect, data[2 * i]);
        assert_eq!(Level::Low, data[2 * i + 1].level);
    });
    Ok(())
}
