//! Shared protocol for the plant monitor telemetry feeds
//!
//! This module defines the channel names and value shapes exchanged with the
//! remote telemetry service, plus the inbound pump command payload. It
//! compiles on both the device and std-side consumers.

// Prelude types needed for no_std compatibility
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use core::option::Option::{self, None, Some};

use serde::{Deserialize, Serialize};

use crate::domain::SoilQuality;

#[cfg(feature = "std")]
use std::string::String;

// ============================================================================
// Channel Names
// ============================================================================

/// Environmental (air) temperature channel
pub const CHANNEL_ENVIRONMENTAL_TEMPERATURE: &str = "environmental-temperature";
/// Environmental relative humidity channel
pub const CHANNEL_ENVIRONMENTAL_RELATIVE_HUMIDITY: &str = "environmental-relative-humidity";
/// Calibrated soil moisture level channel (0-100 %)
pub const CHANNEL_SOIL_MOISTURE_LEVEL: &str = "soil-moisture-level";
/// Soil moisture quality category channel
pub const CHANNEL_SOIL_MOISTURE_QUALITY: &str = "soil-moisture-quality";
/// Soil temperature channel
pub const CHANNEL_SOIL_TEMPERATURE: &str = "soil-temperature";
/// Derived illuminance channel
pub const CHANNEL_SPECTRUM_LUX: &str = "spectrum-lux";
/// Infrared channel counts
pub const CHANNEL_SPECTRUM_IR: &str = "spectrum-ir";
/// Full-spectrum channel counts
pub const CHANNEL_SPECTRUM_FULL: &str = "spectrum-full";
/// Visible-light channel counts
pub const CHANNEL_SPECTRUM_VISIBLE: &str = "spectrum-visible";
/// Water pump speed channel (outbound echo and inbound commands)
pub const CHANNEL_WATER_PUMP: &str = "water-pump";

// ============================================================================
// Channel Values
// ============================================================================

/// Maximum length of a text channel value on no_std builds
#[cfg(not(feature = "std"))]
pub const MAX_TEXT_VALUE_LEN: usize = 16;

/// Type-safe channel values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChannelValue {
    /// 32-bit float (temperatures, humidity, moisture level, lux)
    Float(f32),
    /// 16-bit unsigned integer (spectral channel counts, pump speed)
    Unsigned(u16),
    /// Short text value (quality category)
    #[cfg(not(feature = "std"))]
    Text(heapless::String<MAX_TEXT_VALUE_LEN>),
    #[cfg(feature = "std")]
    Text(String),
}

impl ChannelValue {
    /// Create a Float channel value
    pub fn float(v: f32) -> Self {
        ChannelValue::Float(v)
    }

    /// Create an Unsigned channel value
    pub fn unsigned(v: u16) -> Self {
        ChannelValue::Unsigned(v)
    }

    /// Create a Text channel value
    #[cfg(not(feature = "std"))]
    pub fn text(s: &str) -> Option<Self> {
        heapless::String::try_from(s).ok().map(ChannelValue::Text)
    }

    /// Create a Text channel value (std version)
    #[cfg(feature = "std")]
    pub fn text(s: &str) -> Option<Self> {
        Some(ChannelValue::Text(s.to_string()))
    }
}

// ============================================================================
// Inbound Commands
// ============================================================================

/// Inbound pump speed command from the telemetry service
///
/// The payload is a bare speed in the 0-255 range; 0 means off and 255 full
/// speed. The aggregator routes it to the pump controller uninterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpCommand {
    /// Requested pump speed (0 = off, 255 = full)
    pub speed: u8,
}

impl PumpCommand {
    /// Create a new pump command
    pub const fn new(speed: u8) -> Self {
        Self { speed }
    }
}

// ============================================================================
// Telemetry Snapshot
// ============================================================================

/// One complete set of cached sensor values bound for the telemetry service
///
/// Built fresh on each telemetry cycle by copying every monitor's cached
/// reading; it has no lifecycle beyond that one send. Temperatures are in
/// degrees Celsius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySnapshot {
    /// Air temperature in degrees Celsius
    pub environmental_temperature: f32,
    /// Relative humidity in percent
    pub environmental_relative_humidity: f32,
    /// Calibrated soil moisture level (0-100 %)
    pub soil_moisture_level: f32,
    /// Soil moisture quality category
    pub soil_moisture_quality: SoilQuality,
    /// Soil temperature in degrees Celsius
    pub soil_temperature: f32,
    /// Derived illuminance in lux
    pub spectrum_lux: f32,
    /// Infrared channel counts
    pub spectrum_ir: u16,
    /// Full-spectrum channel counts
    pub spectrum_full: u16,
    /// Visible-light channel counts
    pub spectrum_visible: u16,
}
