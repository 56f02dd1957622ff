//! Soil moisture calibration domain service
//!
//! This module provides the conversion from raw ADC counts to a calibrated
//! soil moisture level between 0 and 100 percent.

use thiserror::Error;

/// Error raised when a calibration profile cannot be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Dry and wet reference voltages are equal, the linear map degenerates
    #[error("dry and wet reference voltages must differ")]
    InvalidCalibration,
}

/// ADC count-to-voltage scale
///
/// Converts a raw ADC count to a voltage using a linear formula:
/// `volts = counts / full_scale_counts * reference_volts`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcScale {
    /// Full-scale count of the converter
    pub full_scale_counts: u16,
    /// Reference voltage applied to the converter
    pub reference_volts: f32,
}

impl AdcScale {
    /// MCP3008 on a 3.3 V reference (10-bit converter)
    pub const MCP3008_3V3: Self = Self {
        full_scale_counts: 1024,
        reference_volts: 3.3,
    };

    /// Create a scale with custom parameters
    pub const fn new(full_scale_counts: u16, reference_volts: f32) -> Self {
        Self {
            full_scale_counts,
            reference_volts,
        }
    }

    /// Convert a raw ADC count to a voltage
    #[inline]
    pub fn volts(&self, counts: u16) -> f32 {
        counts as f32 / self.full_scale_counts as f32 * self.reference_volts
    }
}

impl Default for AdcScale {
    fn default() -> Self {
        Self::MCP3008_3V3
    }
}

/// Two-point linear calibration for a resistive soil moisture probe
///
/// The dry and wet readings are the probe voltages observed with the probe
/// completely dry and completely wet. The mapping is linear between them and
/// clamps outside the calibrated span; either ordering of the two endpoints
/// is valid. The fields are private so a profile with `dry == wet` can never
/// be constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoistureCalibration {
    /// Voltage reading when the probe is completely dry
    dry_volts: f32,
    /// Voltage reading when the probe is completely wet
    wet_volts: f32,
}

impl MoistureCalibration {
    /// Factory calibration of the shipped probe (dry 3.3 V, wet 0.0 V)
    pub const SOIL_DEFAULT: Self = Self {
        dry_volts: 3.3,
        wet_volts: 0.0,
    };

    /// Create a calibration from measured dry/wet voltages
    ///
    /// Fails with [`CalibrationError::InvalidCalibration`] when the two
    /// voltages are equal, since the linear map would divide by zero.
    pub fn new(dry_volts: f32, wet_volts: f32) -> Result<Self, CalibrationError> {
        if dry_volts == wet_volts {
            return Err(CalibrationError::InvalidCalibration);
        }

        Ok(Self {
            dry_volts,
            wet_volts,
        })
    }

    /// Voltage of the dry endpoint
    pub const fn dry_volts(&self) -> f32 {
        self.dry_volts
    }

    /// Voltage of the wet endpoint
    pub const fn wet_volts(&self) -> f32 {
        self.wet_volts
    }

    /// Map a probe voltage onto the 0-100 % moisture range
    ///
    /// Linear interpolation between the dry (0 %) and wet (100 %) endpoint
    /// voltages, clamped to [0, 100] for voltages outside the calibrated
    /// span.
    #[inline]
    pub fn level_percent(&self, volts: f32) -> f32 {
        let span = self.wet_volts - self.dry_volts;
        ((volts - self.dry_volts) * 100.0 / span).clamp(0.0, 100.0)
    }
}

impl Default for MoistureCalibration {
    fn default() -> Self {
        Self::SOIL_DEFAULT
    }
}
