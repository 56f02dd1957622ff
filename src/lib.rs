//! Plant Monitor and Watering Controller Core
//!
//! This library provides a hexagonal architecture for an embedded plant-care
//! controller: calibrated soil readings, environmental climate readings with
//! a derived heat index, spectral light readings, and a variable-speed water
//! pump with a timed-dose operation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - Temperature unit conversion                                   │
//! │  - MoistureCalibration / AdcScale services                       │
//! │  - SoilQuality classifier, heat index, PackedLuminosity          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AnalogChannelPort / ThermometerPort / ClimatePort / LightPort │
//! │  - PumpDrivePort: digital + PWM output line                      │
//! │  - TelemetrySink: per-channel publish, inbound pump commands     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Services & Adapters                          │
//! │  - SoilMonitor / ClimateMonitor / SpectrumMonitor (caching)      │
//! │  - PumpController (off / on / proportional / timed dose)         │
//! │  - TelemetryAggregator (snapshot build + publish + routing)      │
//! │  - Simulated adapters for host testing                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Benefits
//!
//! - **Testable** - Ports allow simulating sensors, the pump line, and the
//!   telemetry sink on the host
//! - **Extensible** - Easy to add I2C/SPI sensors by implementing a port
//! - **Safe actuation** - A timed dose always returns the pump to OFF, even
//!   if the dose future is cancelled mid-wait

#![cfg_attr(not(feature = "std"), no_std)]

// ============================================================================
// Feed protocol (shared between device and telemetry consumers)
// ============================================================================

pub mod feed_protocol;

pub use feed_protocol::{ChannelValue, PumpCommand, TelemetrySnapshot};

// ============================================================================
// Hexagonal Architecture
// ============================================================================

/// Domain layer - pure business logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Monitors - sensor reading/caching services
pub mod monitors;

/// Pump actuation control
pub mod control;

/// Telemetry snapshot assembly and command routing
pub mod aggregator;

/// Adapters - simulated implementations for host builds
#[cfg(feature = "std")]
pub mod adapters;

// Re-export key domain types
pub use domain::{
    AdcScale, CalibrationError, MoistureCalibration, PackedLuminosity, SoilQuality,
    TemperatureUnit,
};

// Re-export key port traits
pub use ports::{
    ActuationError, AnalogChannelPort, ClimatePort, ClimateSample, LightPort, PumpDrivePort,
    SensorError, TelemetryError, TelemetrySink, ThermometerPort,
};

// Re-export services
pub use aggregator::TelemetryAggregator;
pub use control::{PumpConfig, PumpController, PumpState};
pub use monitors::{ClimateMonitor, SoilMonitor, SpectrumMonitor};
