//! A prelude module for ook433.

pub use crate::{
    codes::{DeviceCodeTable, ShutterCommand},
    encode::encode,
    error::OokError,
    pin::Audit,
    transmitter::{SendOption, Transmitter, DEFAULT_CODE_LENGTH, DEFAULT_REPEAT},
    waveform::Waveform,
};

pub use ook433_core::{
    gpio::{Level, Pin, PinError, Pulse},
    protocol::{Protocol, ProtocolError, DEFAULT_PROTOCOL, GARAGE_DOOR, SHUTTER},
    sleep::{NoopSleeper, Sleep, SpinSleeper, SpinWaitSleeper, StdSleeper},
};
