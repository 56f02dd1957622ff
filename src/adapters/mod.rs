//! Adapters - concrete port implementations
//!
//! Hardware adapters live with their board support crates; what ships here
//! is the simulated set used by the integration tests and the host binary.

pub mod sim;

pub use sim::{
    PinOp, SimAnalogChannel, SimClimateSensor, SimLightSensor, SimPumpDrive, SimTelemetrySink,
    SimThermometer,
};
