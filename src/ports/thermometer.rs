//! Thermometer port - abstraction for a raw degrees-Celsius probe
//!
//! Covers digital thermometers that deliver a finished Celsius value per
//! transaction, such as a one-wire soil probe.

use crate::ports::SensorError;
use core::future::Future;

/// Port for reading a bare temperature probe
pub trait ThermometerPort {
    /// Trigger a conversion and read the result in degrees Celsius
    fn read_celsius(&mut self) -> impl Future<Output = Result<f32, SensorError>>;
}
