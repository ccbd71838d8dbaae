use std::{collections::HashMap, str::FromStr};

use derive_more::Display;
use itertools::Itertools;
use thiserror::Error;

/// One button on a shutter remote.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutterCommand {
    /// Open the shutter.
    #[display("up")]
    Up,
    /// Close the shutter.
    #[display("down")]
    Down,
    /// Stop the shutter where it is.
    #[display("stop")]
    Stop,
}

/// An error produced when parsing a [`ShutterCommand`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Unknown shutter command ({0})")]
pub struct ParseCommandError(String);

impl FromStr for ShutterCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "stop" => Ok(Self::Stop),
            _ => Err(ParseCommandError(s.to_owned())),
        }
    }
}

/// Lookup table from device-group key to per-command codes.
///
/// The table is an external collaborator of the transmitter: callers
/// build it from whatever source they like (a config file, a
/// database, a constant). [`DeviceCodeTable::sample`] ships the table
/// of the reference installation for tests and demos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceCodeTable {
    groups: HashMap<String, HashMap<ShutterCommand, u64>>,
}

impl DeviceCodeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `code` for `command` of the device group `key`.
    pub fn insert(&mut self, key: impl Into<String>, command: ShutterCommand, code: u64) {
        self.groups
            .entry(key.into())
            .or_default()
            .insert(command, code);
    }

    /// Collects the code of `command` for every group whose key
    /// contains `token`, in sorted key order.
    ///
    /// Substring matching lets one token address a set of related
    /// receivers: "lroom" hits `lroom_l`, `lroom_m` and `lroom_r`.
    /// Groups that have no code for `command` are skipped.
    #[must_use]
    pub fn matching_codes(&self, token: &str, command: ShutterCommand) -> Vec<u64> {
        self.groups
            .iter()
            .filter(|(key, _)| key.contains(token))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .filter_map(|(_, cmds)| cmds.get(&command).copied())
            .collect()
    }

    /// The device table of the reference installation.
    #[must_use]
    pub fn sample() -> Self {
        use ShutterCommand::{Down, Stop, Up};

        let mut table = Self::new();
        [
            ("kitchen", [(Up, 95357333777), (Down, 95357333811), (Stop, 95357333845)]),
            ("lroom_l", [(Up, 653685920017), (Down, 653685920051), (Stop, 653685920085)]),
            ("lroom_m", [(Up, 181260607761), (Down, 181260607795), (Stop, 181260607829)]),
            ("lroom_r", [(Up, 99640512785), (Down, 99640512819), (Stop, 99640512853)]),
            // Dedicated group code that addresses every shutter at
            // once.
            ("house", [(Up, 86755979281), (Down, 86755979315), (Stop, 86755979349)]),
        ]
        .into_iter()
        .for_each(|(key, cmds)| {
            cmds.into_iter()
                .for_each(|(command, code)| table.insert(key, command, code));
        });
        table
    }
}
