//! Climate monitor - environmental temperature, humidity, and heat index
//!
//! Wraps a combined temperature/humidity sensor. One hardware transaction
//! yields both values, so the cached [`ClimateSample`] is always a matched
//! pair from the same physical measurement.

use crate::domain::heat_index::heat_index_fahrenheit;
use crate::domain::units::{
    celsius_in, celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit,
};
use crate::ports::{ClimatePort, ClimateSample, SensorError};

/// Environmental reading/caching service
///
/// The read-policy asymmetry of the underlying combo sensor is preserved:
/// temperature is normally read fresh ([`read_temperature`]) while humidity
/// is normally taken from the cache ([`relative_humidity`]), because both
/// values arrive in the same transaction and sampling them independently
/// would double-trigger the sensor.
///
/// [`read_temperature`]: ClimateMonitor::read_temperature
/// [`relative_humidity`]: ClimateMonitor::relative_humidity
pub struct ClimateMonitor<C: ClimatePort> {
    sensor: C,
    last: ClimateSample,
}

impl<C: ClimatePort> ClimateMonitor<C> {
    /// Create a climate monitor over the given sensor
    pub fn new(sensor: C) -> Self {
        Self {
            sensor,
            last: ClimateSample::default(),
        }
    }

    /// Read a fresh air temperature in the requested unit
    ///
    /// Performs one sensor transaction and caches both the temperature and
    /// the humidity it carried.
    pub async fn read_temperature(&mut self, unit: TemperatureUnit) -> Result<f32, SensorError> {
        self.last = self.sensor.sample().await?;
        Ok(self.temperature(unit))
    }

    /// Last cached air temperature, converted to the requested unit
    pub fn temperature(&self, unit: TemperatureUnit) -> f32 {
        celsius_in(self.last.temperature_c, unit)
    }

    /// Last cached relative humidity in percent
    ///
    /// This is the default way to get humidity: the value was refreshed by
    /// the most recent temperature read of the same transaction.
    pub fn relative_humidity(&self) -> f32 {
        self.last.relative_humidity
    }

    /// Read a fresh relative humidity in percent
    ///
    /// Explicit forcing variant; also refreshes the cached temperature.
    pub async fn read_relative_humidity(&mut self) -> Result<f32, SensorError> {
        self.last = self.sensor.sample().await?;
        Ok(self.last.relative_humidity)
    }

    /// Heat index derived from the two most recently cached values
    ///
    /// Never triggers a hardware read. Inputs are normalized to Fahrenheit
    /// and percent relative humidity for the regression, and the result is
    /// converted back to the requested unit.
    pub fn heat_index(&self, unit: TemperatureUnit) -> f32 {
        let temperature_f = celsius_to_fahrenheit(self.last.temperature_c);
        let hi = heat_index_fahrenheit(temperature_f, self.last.relative_humidity);

        match unit {
            TemperatureUnit::Fahrenheit => hi,
            TemperatureUnit::Celsius => fahrenheit_to_celsius(hi),
        }
    }
}
