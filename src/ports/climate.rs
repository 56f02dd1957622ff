//! Climate port - abstraction for a combined temperature/humidity sensor
//!
//! DHT-class sensors deliver temperature and relative humidity together in
//! one bus transaction. The port preserves that pairing: one `sample()` call
//! is one hardware transaction yielding both values.

use crate::ports::SensorError;
use core::future::Future;

/// One paired temperature + humidity measurement
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateSample {
    /// Air temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub relative_humidity: f32,
}

/// Port for reading a combined temperature/humidity sensor
pub trait ClimatePort {
    /// Perform one sensor transaction, returning both measured values
    fn sample(&mut self) -> impl Future<Output = Result<ClimateSample, SensorError>>;
}
