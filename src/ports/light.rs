//! Light port - abstraction for a packed-luminosity spectral sensor
//!
//! The sensor family behind this port reports one 32-bit packed value per
//! transaction (infrared and full-spectrum channels); see
//! [`PackedLuminosity`] for the layout.

use crate::domain::PackedLuminosity;
use crate::ports::SensorError;
use core::future::Future;

/// Port for reading a packed-luminosity light sensor
pub trait LightPort {
    /// Perform one transaction and return the packed two-channel reading
    fn read_packed_luminosity(&mut self) -> impl Future<Output = Result<PackedLuminosity, SensorError>>;

    /// Convert a pair of channel counts to lux
    ///
    /// The conversion is a device-specific nonlinear formula that depends on
    /// gain and integration-time settings only the driver knows. It is
    /// supplied by the adapter and invoked here, never reimplemented.
    fn lux(&self, full: u16, ir: u16) -> f32;
}
