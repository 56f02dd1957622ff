//! Simulated hardware adapters
//!
//! Script-driven implementations of every consumed port, plus a recording
//! pump drive and telemetry sink. Each sensor adapter serves readings from a
//! queue and keeps repeating the final reading once the queue drains, so a
//! short script can stand in for a steady sensor. A failing variant stands
//! in for unreachable hardware.

use std::collections::VecDeque;

use crate::domain::PackedLuminosity;
use crate::feed_protocol::{ChannelValue, PumpCommand};
use crate::ports::{
    ActuationError, AnalogChannelPort, ClimatePort, ClimateSample, LightPort, PumpDrivePort,
    SensorError, TelemetryError, TelemetrySink, ThermometerPort,
};

// ============================================================================
// Sensor Adapters
// ============================================================================

/// Scripted analog channel
pub struct SimAnalogChannel {
    script: VecDeque<u16>,
    last: Option<u16>,
    fail: bool,
    reads: usize,
}

impl SimAnalogChannel {
    /// Create a channel that serves the given counts in order
    pub fn new(counts: impl IntoIterator<Item = u16>) -> Self {
        Self {
            script: counts.into_iter().collect(),
            last: None,
            fail: false,
            reads: 0,
        }
    }

    /// Create a channel whose every read fails
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            fail: true,
            reads: 0,
        }
    }

    /// Number of reads performed so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogChannelPort for SimAnalogChannel {
    async fn read_counts(&mut self) -> Result<u16, SensorError> {
        self.reads += 1;

        if self.fail {
            return Err(SensorError::ReadFailed);
        }

        if let Some(counts) = self.script.pop_front() {
            self.last = Some(counts);
        }

        self.last.ok_or(SensorError::NotInitialized)
    }
}

/// Scripted one-wire thermometer
pub struct SimThermometer {
    script: VecDeque<f32>,
    last: Option<f32>,
    fail: bool,
    reads: usize,
}

impl SimThermometer {
    /// Create a thermometer that serves the given Celsius values in order
    pub fn new(celsius: impl IntoIterator<Item = f32>) -> Self {
        Self {
            script: celsius.into_iter().collect(),
            last: None,
            fail: false,
            reads: 0,
        }
    }

    /// Create a thermometer whose every read fails
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            fail: true,
            reads: 0,
        }
    }

    /// Number of reads performed so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ThermometerPort for SimThermometer {
    async fn read_celsius(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;

        if self.fail {
            return Err(SensorError::ReadFailed);
        }

        if let Some(celsius) = self.script.pop_front() {
            self.last = Some(celsius);
        }

        self.last.ok_or(SensorError::NotInitialized)
    }
}

/// Scripted combined temperature/humidity sensor
///
/// Counts transactions so tests can assert that paired reads do not
/// double-sample the hardware.
pub struct SimClimateSensor {
    script: VecDeque<ClimateSample>,
    last: Option<ClimateSample>,
    fail: bool,
    transactions: usize,
}

impl SimClimateSensor {
    /// Create a sensor that serves the given samples in order
    pub fn new(samples: impl IntoIterator<Item = ClimateSample>) -> Self {
        Self {
            script: samples.into_iter().collect(),
            last: None,
            fail: false,
            transactions: 0,
        }
    }

    /// Create a sensor whose every transaction fails
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            fail: true,
            transactions: 0,
        }
    }

    /// Number of transactions performed so far
    pub fn transactions(&self) -> usize {
        self.transactions
    }
}

impl ClimatePort for SimClimateSensor {
    async fn sample(&mut self) -> Result<ClimateSample, SensorError> {
        self.transactions += 1;

        if self.fail {
            return Err(SensorError::ReadFailed);
        }

        if let Some(sample) = self.script.pop_front() {
            self.last = Some(sample);
        }

        self.last.ok_or(SensorError::NotInitialized)
    }
}

/// Scripted packed-luminosity light sensor
///
/// Carries the driver's lux conversion for a medium-gain, 200 ms
/// integration configuration so derived lux values are concrete.
pub struct SimLightSensor {
    script: VecDeque<u32>,
    last: Option<u32>,
    fail: bool,
    transactions: usize,
}

impl SimLightSensor {
    /// Counts-per-lux for 25x gain and 200 ms integration time
    const COUNTS_PER_LUX: f32 = (200.0 * 25.0) / 408.0;

    /// Create a sensor that serves the given packed words in order
    pub fn new(packed: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: packed.into_iter().collect(),
            last: None,
            fail: false,
            transactions: 0,
        }
    }

    /// Create a sensor whose every transaction fails
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            fail: true,
            transactions: 0,
        }
    }

    /// Number of transactions performed so far
    pub fn transactions(&self) -> usize {
        self.transactions
    }
}

impl LightPort for SimLightSensor {
    async fn read_packed_luminosity(&mut self) -> Result<PackedLuminosity, SensorError> {
        self.transactions += 1;

        if self.fail {
            return Err(SensorError::ReadFailed);
        }

        if let Some(packed) = self.script.pop_front() {
            self.last = Some(packed);
        }

        self.last
            .map(PackedLuminosity::new)
            .ok_or(SensorError::NotInitialized)
    }

    fn lux(&self, full: u16, ir: u16) -> f32 {
        if full == 0 {
            return 0.0;
        }

        let full = full as f32;
        let ir = ir as f32;
        (full - ir) * (1.0 - ir / full) / Self::COUNTS_PER_LUX
    }
}

// ============================================================================
// Pump Drive Adapter
// ============================================================================

/// One recorded write to the pump line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinOp {
    /// Line driven low
    Low,
    /// Line driven high
    High,
    /// Line driven with a PWM duty
    Duty(u16),
}

/// Recording pump drive
pub struct SimPumpDrive {
    ops: Vec<PinOp>,
    fail: bool,
}

impl SimPumpDrive {
    /// Create a drive that records every write
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail: false,
        }
    }

    /// Create a drive whose every write fails except `set_low`
    ///
    /// `set_low` stays functional so the controller's fail-safe path can be
    /// observed.
    pub fn failing() -> Self {
        Self {
            ops: Vec::new(),
            fail: true,
        }
    }

    /// All writes recorded so far, in order
    pub fn ops(&self) -> &[PinOp] {
        &self.ops
    }

    /// The most recent write, if any
    pub fn last_op(&self) -> Option<PinOp> {
        self.ops.last().copied()
    }
}

impl Default for SimPumpDrive {
    fn default() -> Self {
        Self::new()
    }
}

impl PumpDrivePort for SimPumpDrive {
    fn set_low(&mut self) -> Result<(), ActuationError> {
        self.ops.push(PinOp::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), ActuationError> {
        if self.fail {
            return Err(ActuationError::OutputFault);
        }
        self.ops.push(PinOp::High);
        Ok(())
    }

    fn set_duty(&mut self, duty: u16) -> Result<(), ActuationError> {
        if self.fail {
            return Err(ActuationError::OutputFault);
        }
        self.ops.push(PinOp::Duty(duty));
        Ok(())
    }
}

// ============================================================================
// Telemetry Sink Adapter
// ============================================================================

/// Recording telemetry sink with a scriptable inbound command queue
pub struct SimTelemetrySink {
    published: Vec<(&'static str, ChannelValue)>,
    commands: VecDeque<PumpCommand>,
    fail_all: bool,
    fail_channels: Vec<&'static str>,
}

impl SimTelemetrySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self {
            published: Vec::new(),
            commands: VecDeque::new(),
            fail_all: false,
            fail_channels: Vec::new(),
        }
    }

    /// Create a sink whose every publish fails
    pub fn failing() -> Self {
        Self {
            published: Vec::new(),
            commands: VecDeque::new(),
            fail_all: true,
            fail_channels: Vec::new(),
        }
    }

    /// Make publishes to one named channel fail while the rest succeed
    pub fn fail_channel(&mut self, channel: &'static str) {
        self.fail_channels.push(channel);
    }

    /// Queue an inbound pump command for the next poll
    pub fn queue_command(&mut self, command: PumpCommand) {
        self.commands.push_back(command);
    }

    /// All published values so far, in order
    pub fn published(&self) -> &[(&'static str, ChannelValue)] {
        &self.published
    }
}

impl Default for SimTelemetrySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySink for SimTelemetrySink {
    async fn publish(
        &mut self,
        channel: &'static str,
        value: ChannelValue,
    ) -> Result<(), TelemetryError> {
        if self.fail_all || self.fail_channels.contains(&channel) {
            return Err(TelemetryError::PublishFailed);
        }

        self.published.push((channel, value));
        Ok(())
    }

    async fn next_pump_command(&mut self) -> Result<Option<PumpCommand>, TelemetryError> {
        Ok(self.commands.pop_front())
    }
}
