//! Soil moisture quality classifier
//!
//! The probe's digital comparator output is wired to an analog channel, so
//! quality is decided here with a fixed voltage threshold instead.

use serde::{Deserialize, Serialize};

/// Probe voltage at and above which the soil is classified as dry
pub const DRY_THRESHOLD_VOLTS: f32 = 2.4;

/// Discrete soil moisture quality category
///
/// A two-class step function with no hysteresis: readings hovering around
/// [`DRY_THRESHOLD_VOLTS`] will oscillate between the two categories, which
/// is expected behavior rather than a defect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoilQuality {
    /// Soil is too dry
    Dry,
    /// Soil moisture is acceptable
    #[default]
    Good,
}

impl SoilQuality {
    /// Classify a probe voltage
    #[inline]
    pub fn from_volts(volts: f32) -> Self {
        if volts >= DRY_THRESHOLD_VOLTS {
            SoilQuality::Dry
        } else {
            SoilQuality::Good
        }
    }

    /// Get the string representation of this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            SoilQuality::Dry => "Dry",
            SoilQuality::Good => "Good",
        }
    }
}
