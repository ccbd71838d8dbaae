mod error;
mod pin;
mod pulse;

pub use error::PinError;
pub use pin::{Level, Pin};
pub use pulse::Pulse;
