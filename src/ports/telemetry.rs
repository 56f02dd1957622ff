//! Telemetry sink port - abstraction for the remote telemetry service
//!
//! This trait allows the aggregator to upload readings and receive pump
//! commands without knowing the transport (MQTT broker, cloud feed service,
//! serial link, mock, etc.)

use crate::feed_protocol::{ChannelValue, PumpCommand};
use core::future::Future;
use thiserror::Error;

/// Error type for telemetry operations
///
/// Delivery semantics are owned by the sink; the core neither retries nor
/// treats a failure as fatal for the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryError {
    /// Not connected to the service
    #[error("telemetry sink not connected")]
    NotConnected,
    /// Connection lost
    #[error("telemetry connection lost")]
    Disconnected,
    /// Failed to publish a value
    #[error("failed to publish value")]
    PublishFailed,
    /// Failed to receive an inbound command
    #[error("failed to receive command")]
    ReceiveFailed,
    /// Malformed inbound payload
    #[error("invalid message format")]
    InvalidFormat,
}

/// Port for the outbound telemetry feed and inbound pump commands
pub trait TelemetrySink {
    /// Publish one value to the named channel
    fn publish(
        &mut self,
        channel: &'static str,
        value: ChannelValue,
    ) -> impl Future<Output = Result<(), TelemetryError>>;

    /// Take the next pending inbound pump command, if any
    ///
    /// Returns `Ok(None)` when no command is waiting. The aggregator polls
    /// this between telemetry cycles and routes commands to the pump
    /// controller without interpreting them.
    fn next_pump_command(&mut self) -> impl Future<Output = Result<Option<PumpCommand>, TelemetryError>>;
}
