//! Pump drive port - abstraction for the pump's output line
//!
//! A single line drives the pump: digital low/high for off/full speed, or a
//! PWM duty value for proportional speed. Writes are synchronous pin
//! operations; only the controller's timed dose involves waiting.

use thiserror::Error;

/// Error type for pump actuation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuationError {
    /// The output line could not be driven
    #[error("pump output line could not be driven")]
    OutputFault,
}

/// Port for driving the pump output line
///
/// Implementations own the pin exclusively; nothing else in the system may
/// write it. The controller guarantees that after any failed write it
/// attempts to drive the line low, so implementations should keep `set_low`
/// as their most robust operation.
pub trait PumpDrivePort {
    /// Drive the line low (pump off)
    fn set_low(&mut self) -> Result<(), ActuationError>;

    /// Drive the line high (pump at full speed)
    fn set_high(&mut self) -> Result<(), ActuationError>;

    /// Drive the line with a PWM duty value in the hardware's native range
    fn set_duty(&mut self, duty: u16) -> Result<(), ActuationError>;
}
