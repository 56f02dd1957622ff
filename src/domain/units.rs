//! Temperature unit conversion domain service
//!
//! Every temperature-producing path in the crate routes through these two
//! functions so that all sensors agree numerically on the same conversion.

use serde::{Deserialize, Serialize};

/// Temperature unit requested by a caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius (hardware-native unit)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Convert degrees Celsius to degrees Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Express a Celsius value in the requested unit
#[inline]
pub fn celsius_in(celsius: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}
