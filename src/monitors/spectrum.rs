//! Spectrum monitor - packed luminosity and its derived channels
//!
//! Caches the last packed two-channel reading and derives infrared, full,
//! visible, and lux values from it. Only `read_*` operations touch the
//! sensor; everything else decomposes the cached word.

use crate::domain::luminosity::PackedLuminosity;
use crate::ports::{LightPort, SensorError};

/// Spectral reading/caching service
pub struct SpectrumMonitor<L: LightPort> {
    light: L,
    last: PackedLuminosity,
}

impl<L: LightPort> SpectrumMonitor<L> {
    /// Create a spectrum monitor over the given light sensor
    pub fn new(light: L) -> Self {
        Self {
            light,
            last: PackedLuminosity::default(),
        }
    }

    /// Perform one sensor transaction and cache the packed reading
    pub async fn read_luminosity(&mut self) -> Result<PackedLuminosity, SensorError> {
        self.last = self.light.read_packed_luminosity().await?;

        if self.last.ir() > self.last.full() {
            log::warn!(
                "luminosity reading has ir ({}) above full ({}); visible will wrap",
                self.last.ir(),
                self.last.full()
            );
        }

        Ok(self.last)
    }

    /// Last cached packed reading
    pub fn luminosity(&self) -> PackedLuminosity {
        self.last
    }

    /// Infrared counts from the cached reading
    pub fn ir(&self) -> u16 {
        self.last.ir()
    }

    /// Full-spectrum counts from the cached reading
    pub fn full(&self) -> u16 {
        self.last.full()
    }

    /// Visible-light counts from the cached reading
    pub fn visible(&self) -> u16 {
        self.last.visible()
    }

    /// Illuminance in lux derived from the cached reading
    ///
    /// Uses the driver-supplied conversion with the cached channel counts;
    /// by default this reflects the last captured luminosity snapshot, not a
    /// new one. Force a refresh at the luminosity level first when a current
    /// value is needed.
    pub fn lux(&self) -> f32 {
        self.light.lux(self.last.full(), self.last.ir())
    }

    /// Refresh the packed reading, then return the infrared counts
    pub async fn read_ir(&mut self) -> Result<u16, SensorError> {
        Ok(self.read_luminosity().await?.ir())
    }

    /// Refresh the packed reading, then return the full-spectrum counts
    pub async fn read_full(&mut self) -> Result<u16, SensorError> {
        Ok(self.read_luminosity().await?.full())
    }

    /// Refresh the packed reading, then return the visible-light counts
    pub async fn read_visible(&mut self) -> Result<u16, SensorError> {
        Ok(self.read_luminosity().await?.visible())
    }

    /// Refresh the packed reading, then return the derived illuminance
    pub async fn read_lux(&mut self) -> Result<f32, SensorError> {
        self.read_luminosity().await?;
        Ok(self.lux())
    }
}
