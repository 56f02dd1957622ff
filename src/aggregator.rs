//! Telemetry aggregation and inbound command routing
//!
//! The aggregator assembles every monitor's cached value into one
//! [`TelemetrySnapshot`], pushes it to the telemetry sink one channel at a
//! time, and routes inbound pump-speed commands to the pump controller.
//! Freshness is the scheduler's responsibility; nothing here forces a
//! hardware read.

use thiserror::Error;

use crate::control::PumpController;
use crate::domain::units::TemperatureUnit;
use crate::feed_protocol::{
    ChannelValue, PumpCommand, TelemetrySnapshot, CHANNEL_ENVIRONMENTAL_RELATIVE_HUMIDITY,
    CHANNEL_ENVIRONMENTAL_TEMPERATURE, CHANNEL_SOIL_MOISTURE_LEVEL, CHANNEL_SOIL_MOISTURE_QUALITY,
    CHANNEL_SOIL_TEMPERATURE, CHANNEL_SPECTRUM_FULL, CHANNEL_SPECTRUM_IR, CHANNEL_SPECTRUM_LUX,
    CHANNEL_SPECTRUM_VISIBLE, CHANNEL_WATER_PUMP,
};
use crate::monitors::{ClimateMonitor, SoilMonitor, SpectrumMonitor};
use crate::ports::{
    ActuationError, AnalogChannelPort, ClimatePort, LightPort, PumpDrivePort, TelemetryError,
    TelemetrySink, ThermometerPort,
};

/// Error from routing an inbound pump command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The sink failed while receiving the command
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    /// The pump rejected the commanded speed
    #[error("actuation error: {0}")]
    Actuation(#[from] ActuationError),
}

/// Telemetry snapshot assembly and publish service
///
/// Owns the sink; delivery success or failure stays the sink's concern and
/// is never retried here.
pub struct TelemetryAggregator<S: TelemetrySink> {
    sink: S,
}

impl<S: TelemetrySink> TelemetryAggregator<S> {
    /// Create an aggregator over the given sink
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Get the underlying sink (for diagnostics)
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Assemble a snapshot from the monitors' currently cached values
    ///
    /// Copies caches only; no hardware is touched. Temperatures are
    /// reported in degrees Celsius.
    pub fn build_snapshot<L, Q, T, C, P>(
        &self,
        soil: &SoilMonitor<L, Q, T>,
        climate: &ClimateMonitor<C>,
        spectrum: &SpectrumMonitor<P>,
    ) -> TelemetrySnapshot
    where
        L: AnalogChannelPort,
        Q: AnalogChannelPort,
        T: ThermometerPort,
        C: ClimatePort,
        P: LightPort,
    {
        TelemetrySnapshot {
            environmental_temperature: climate.temperature(TemperatureUnit::Celsius),
            environmental_relative_humidity: climate.relative_humidity(),
            soil_moisture_level: soil.moisture_level(),
            soil_moisture_quality: soil.quality(),
            soil_temperature: soil.temperature(TemperatureUnit::Celsius),
            spectrum_lux: spectrum.lux(),
            spectrum_ir: spectrum.ir(),
            spectrum_full: spectrum.full(),
            spectrum_visible: spectrum.visible(),
        }
    }

    /// Publish a snapshot, one value per named channel
    ///
    /// Every channel is attempted even when some fail; failures are logged
    /// and the first one is returned after the sweep so the scheduler can
    /// count bad cycles. No retries.
    pub async fn publish(&mut self, snapshot: &TelemetrySnapshot) -> Result<(), TelemetryError> {
        let mut first_error = None;

        self.send(
            CHANNEL_ENVIRONMENTAL_TEMPERATURE,
            ChannelValue::float(snapshot.environmental_temperature),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_ENVIRONMENTAL_RELATIVE_HUMIDITY,
            ChannelValue::float(snapshot.environmental_relative_humidity),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_SOIL_MOISTURE_LEVEL,
            ChannelValue::float(snapshot.soil_moisture_level),
            &mut first_error,
        )
        .await;

        if let Some(quality) = ChannelValue::text(snapshot.soil_moisture_quality.as_str()) {
            self.send(CHANNEL_SOIL_MOISTURE_QUALITY, quality, &mut first_error)
                .await;
        }

        self.send(
            CHANNEL_SOIL_TEMPERATURE,
            ChannelValue::float(snapshot.soil_temperature),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_SPECTRUM_LUX,
            ChannelValue::float(snapshot.spectrum_lux),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_SPECTRUM_IR,
            ChannelValue::unsigned(snapshot.spectrum_ir),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_SPECTRUM_FULL,
            ChannelValue::unsigned(snapshot.spectrum_full),
            &mut first_error,
        )
        .await;
        self.send(
            CHANNEL_SPECTRUM_VISIBLE,
            ChannelValue::unsigned(snapshot.spectrum_visible),
            &mut first_error,
        )
        .await;

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Echo an applied pump speed to the water pump channel
    pub async fn publish_pump_speed(&mut self, speed: u8) -> Result<(), TelemetryError> {
        self.sink
            .publish(CHANNEL_WATER_PUMP, ChannelValue::unsigned(speed as u16))
            .await
    }

    /// Route one pending inbound pump command to the controller
    ///
    /// Polls the sink and applies the command's speed verbatim through
    /// [`PumpController::set_speed`]; the payload is never interpreted here.
    /// Returns the routed command, or `None` when nothing was pending.
    pub async fn service_pump_command<P: PumpDrivePort>(
        &mut self,
        pump: &mut PumpController<P>,
    ) -> Result<Option<PumpCommand>, CommandError> {
        match self.sink.next_pump_command().await? {
            Some(command) => {
                pump.set_speed(command.speed)?;
                Ok(Some(command))
            }
            None => Ok(None),
        }
    }

    async fn send(
        &mut self,
        channel: &'static str,
        value: ChannelValue,
        first_error: &mut Option<TelemetryError>,
    ) {
        if let Err(error) = self.sink.publish(channel, value).await {
            log::warn!("publish to {channel} failed: {error}");
            first_error.get_or_insert(error);
        }
    }
}
