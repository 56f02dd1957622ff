//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the monitors and the pump controller
//! interact with external systems. They allow the core to remain independent
//! of specific implementations.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon where
//! adapters plug in:
//!
//! - **AnalogChannelPort**: one raw ADC channel (moisture probe outputs)
//! - **ThermometerPort**: a raw degrees-Celsius probe (one-wire thermometer)
//! - **ClimatePort**: a combined temperature + humidity sensor
//! - **LightPort**: a packed-luminosity light sensor
//! - **PumpDrivePort**: the pump's digital/PWM output line
//! - **TelemetrySink**: the remote telemetry service

pub mod analog;
pub mod climate;
pub mod light;
pub mod pump;
pub mod telemetry;
pub mod thermometer;

pub use analog::AnalogChannelPort;
pub use climate::{ClimatePort, ClimateSample};
pub use light::LightPort;
pub use pump::{ActuationError, PumpDrivePort};
pub use telemetry::{TelemetryError, TelemetrySink};
pub use thermometer::ThermometerPort;

use thiserror::Error;

/// Error type for raw sensor reads
///
/// A failed read means "no fresh value available"; callers fall back to the
/// owning monitor's cached accessor rather than treating this as fatal. No
/// retries happen at this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Failed to read from sensor
    #[error("sensor read failed")]
    ReadFailed,
    /// Sensor not initialized
    #[error("sensor not initialized")]
    NotInitialized,
    /// Sensor returned invalid data
    #[error("sensor returned invalid data")]
    InvalidData,
    /// Hardware error
    #[error("sensor hardware error")]
    HardwareError,
    /// Timeout waiting for sensor
    #[error("timed out waiting for sensor")]
    Timeout,
}
