//! Soil monitor - moisture level, moisture quality, and soil temperature
//!
//! Wraps the soil probe's two analog channels and the buried one-wire
//! thermometer. The moisture level uses the two-point linear calibration,
//! the quality output a fixed decision threshold.

use crate::domain::calibration::{AdcScale, CalibrationError, MoistureCalibration};
use crate::domain::quality::SoilQuality;
use crate::domain::units::{celsius_in, TemperatureUnit};
use crate::ports::{AnalogChannelPort, SensorError, ThermometerPort};

/// Soil reading/caching service
///
/// Owns one analog channel for the moisture level output, one for the
/// quality comparator output, and the soil thermometer. Each measured value
/// has its own cached slot, overwritten only by this monitor's own `read_*`
/// operations.
pub struct SoilMonitor<L, Q, T>
where
    L: AnalogChannelPort,
    Q: AnalogChannelPort,
    T: ThermometerPort,
{
    level_channel: L,
    quality_channel: Q,
    thermometer: T,
    scale: AdcScale,
    calibration: MoistureCalibration,
    last_level: f32,
    last_quality: SoilQuality,
    last_temperature_c: f32,
}

impl<L, Q, T> SoilMonitor<L, Q, T>
where
    L: AnalogChannelPort,
    Q: AnalogChannelPort,
    T: ThermometerPort,
{
    /// Create a soil monitor with the factory probe calibration
    pub fn new(level_channel: L, quality_channel: Q, thermometer: T) -> Self {
        Self::with_calibration(
            level_channel,
            quality_channel,
            thermometer,
            MoistureCalibration::SOIL_DEFAULT,
        )
    }

    /// Create a soil monitor with a custom calibration profile
    pub fn with_calibration(
        level_channel: L,
        quality_channel: Q,
        thermometer: T,
        calibration: MoistureCalibration,
    ) -> Self {
        Self {
            level_channel,
            quality_channel,
            thermometer,
            scale: AdcScale::MCP3008_3V3,
            calibration,
            last_level: 0.0,
            last_quality: SoilQuality::default(),
            last_temperature_c: 0.0,
        }
    }

    /// Replace the calibration profile with a pre-validated one
    pub fn set_calibration(&mut self, calibration: MoistureCalibration) {
        self.calibration = calibration;
    }

    /// Replace the calibration profile from measured dry/wet voltages
    ///
    /// Valid before or after the first read. Fails with
    /// [`CalibrationError::InvalidCalibration`] when the voltages are equal;
    /// the current profile is kept in that case.
    pub fn recalibrate(&mut self, dry_volts: f32, wet_volts: f32) -> Result<(), CalibrationError> {
        self.calibration = MoistureCalibration::new(dry_volts, wet_volts)?;
        Ok(())
    }

    /// Current calibration profile
    pub fn calibration(&self) -> MoistureCalibration {
        self.calibration
    }

    /// Read a fresh moisture level in percent (0-100)
    pub async fn read_moisture_level(&mut self) -> Result<f32, SensorError> {
        let counts = self.level_channel.read_counts().await?;
        let volts = self.scale.volts(counts);
        self.last_level = self.calibration.level_percent(volts);
        Ok(self.last_level)
    }

    /// Last cached moisture level
    pub fn moisture_level(&self) -> f32 {
        self.last_level
    }

    /// Read a fresh moisture quality category
    pub async fn read_quality(&mut self) -> Result<SoilQuality, SensorError> {
        let counts = self.quality_channel.read_counts().await?;
        let volts = self.scale.volts(counts);
        self.last_quality = SoilQuality::from_volts(volts);
        Ok(self.last_quality)
    }

    /// Last cached moisture quality
    pub fn quality(&self) -> SoilQuality {
        self.last_quality
    }

    /// Read a fresh soil temperature in the requested unit
    pub async fn read_temperature(&mut self, unit: TemperatureUnit) -> Result<f32, SensorError> {
        self.last_temperature_c = self.thermometer.read_celsius().await?;
        Ok(celsius_in(self.last_temperature_c, unit))
    }

    /// Last cached soil temperature, converted to the requested unit
    pub fn temperature(&self, unit: TemperatureUnit) -> f32 {
        celsius_in(self.last_temperature_c, unit)
    }
}
