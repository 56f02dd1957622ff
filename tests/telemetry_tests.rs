//! Integration tests for snapshot assembly, publishing, and command routing

use futures::executor::block_on;

use plantmon::adapters::{
    PinOp, SimAnalogChannel, SimClimateSensor, SimLightSensor, SimPumpDrive, SimTelemetrySink,
    SimThermometer,
};
use plantmon::feed_protocol::{
    PumpCommand, CHANNEL_ENVIRONMENTAL_RELATIVE_HUMIDITY, CHANNEL_ENVIRONMENTAL_TEMPERATURE,
    CHANNEL_SOIL_MOISTURE_LEVEL, CHANNEL_SOIL_MOISTURE_QUALITY, CHANNEL_SOIL_TEMPERATURE,
    CHANNEL_SPECTRUM_FULL, CHANNEL_SPECTRUM_IR, CHANNEL_SPECTRUM_LUX, CHANNEL_SPECTRUM_VISIBLE,
    CHANNEL_WATER_PUMP,
};
use plantmon::monitors::{ClimateMonitor, SoilMonitor, SpectrumMonitor};
use plantmon::ports::ClimateSample;
use plantmon::{
    ChannelValue, PumpConfig, PumpController, SoilQuality, TelemetryAggregator, TemperatureUnit,
};

type SimSoil = SoilMonitor<SimAnalogChannel, SimAnalogChannel, SimThermometer>;

async fn populated_monitors() -> (
    SimSoil,
    ClimateMonitor<SimClimateSensor>,
    SpectrumMonitor<SimLightSensor>,
) {
    let mut soil = SoilMonitor::new(
        SimAnalogChannel::new(vec![512]),
        SimAnalogChannel::new(vec![800]),
        SimThermometer::new(vec![18.25]),
    );
    soil.read_moisture_level().await.unwrap();
    soil.read_quality().await.unwrap();
    soil.read_temperature(TemperatureUnit::Celsius).await.unwrap();

    let mut climate = ClimateMonitor::new(SimClimateSensor::new(vec![ClimateSample {
        temperature_c: 24.5,
        relative_humidity: 58.0,
    }]));
    climate
        .read_temperature(TemperatureUnit::Celsius)
        .await
        .unwrap();

    let mut spectrum = SpectrumMonitor::new(SimLightSensor::new(vec![0x00DC_32C8]));
    spectrum.read_luminosity().await.unwrap();

    (soil, climate, spectrum)
}

#[test]
fn test_snapshot_copies_cached_values() {
    block_on(async {
        let (soil, climate, spectrum) = populated_monitors().await;
        let aggregator = TelemetryAggregator::new(SimTelemetrySink::new());

        let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);

        assert_eq!(snapshot.environmental_temperature, 24.5);
        assert_eq!(snapshot.environmental_relative_humidity, 58.0);
        assert!((snapshot.soil_moisture_level - 50.0).abs() < 0.1);
        assert_eq!(snapshot.soil_moisture_quality, SoilQuality::Dry);
        assert_eq!(snapshot.soil_temperature, 18.25);
        assert_eq!(snapshot.spectrum_ir, 0x00DC);
        assert_eq!(snapshot.spectrum_full, 0x32C8);
        assert_eq!(snapshot.spectrum_visible, 0x32C8 - 0x00DC);
        assert!(snapshot.spectrum_lux > 0.0);
    });
}

#[test]
fn test_snapshot_before_any_read_is_zeroed() {
    let soil: SimSoil = SoilMonitor::new(
        SimAnalogChannel::new(vec![]),
        SimAnalogChannel::new(vec![]),
        SimThermometer::new(vec![]),
    );
    let climate = ClimateMonitor::new(SimClimateSensor::new(vec![]));
    let spectrum = SpectrumMonitor::new(SimLightSensor::new(vec![]));
    let aggregator = TelemetryAggregator::new(SimTelemetrySink::new());

    let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);

    assert_eq!(snapshot.environmental_temperature, 0.0);
    assert_eq!(snapshot.soil_moisture_level, 0.0);
    assert_eq!(snapshot.soil_moisture_quality, SoilQuality::Good);
    assert_eq!(snapshot.spectrum_full, 0);
}

#[test]
fn test_publish_sends_every_channel_by_name() {
    block_on(async {
        let (soil, climate, spectrum) = populated_monitors().await;
        let mut aggregator = TelemetryAggregator::new(SimTelemetrySink::new());

        let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);
        aggregator.publish(&snapshot).await.unwrap();

        let channels: Vec<&str> = aggregator
            .sink()
            .published()
            .iter()
            .map(|(channel, _)| *channel)
            .collect();

        assert_eq!(
            channels,
            vec![
                CHANNEL_ENVIRONMENTAL_TEMPERATURE,
                CHANNEL_ENVIRONMENTAL_RELATIVE_HUMIDITY,
                CHANNEL_SOIL_MOISTURE_LEVEL,
                CHANNEL_SOIL_MOISTURE_QUALITY,
                CHANNEL_SOIL_TEMPERATURE,
                CHANNEL_SPECTRUM_LUX,
                CHANNEL_SPECTRUM_IR,
                CHANNEL_SPECTRUM_FULL,
                CHANNEL_SPECTRUM_VISIBLE,
            ]
        );
    });
}

#[test]
fn test_quality_publishes_as_text() {
    block_on(async {
        let (soil, climate, spectrum) = populated_monitors().await;
        let mut aggregator = TelemetryAggregator::new(SimTelemetrySink::new());

        let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);
        aggregator.publish(&snapshot).await.unwrap();

        let quality = aggregator
            .sink()
            .published()
            .iter()
            .find(|(channel, _)| *channel == CHANNEL_SOIL_MOISTURE_QUALITY)
            .map(|(_, value)| value.clone())
            .unwrap();

        assert_eq!(quality, ChannelValue::text("Dry").unwrap());
    });
}

#[test]
fn test_publish_continues_past_a_failing_channel() {
    block_on(async {
        let (soil, climate, spectrum) = populated_monitors().await;
        let mut sink = SimTelemetrySink::new();
        sink.fail_channel(CHANNEL_SOIL_MOISTURE_LEVEL);
        let mut aggregator = TelemetryAggregator::new(sink);

        let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);
        let result = aggregator.publish(&snapshot).await;

        // The failure is reported after the sweep, not instead of it
        assert!(result.is_err());
        assert_eq!(aggregator.sink().published().len(), 8);
    });
}

#[test]
fn test_pump_command_routed_to_controller() {
    block_on(async {
        let mut sink = SimTelemetrySink::new();
        sink.queue_command(PumpCommand::new(128));
        let mut aggregator = TelemetryAggregator::new(sink);
        let mut pump = PumpController::new(SimPumpDrive::new());

        let routed = aggregator.service_pump_command(&mut pump).await.unwrap();

        assert_eq!(routed, Some(PumpCommand::new(128)));
        assert!(pump.is_on());
        let config = PumpConfig::ESP8266_DEFAULT;
        let duty = pump.state().duty;
        assert!(duty > config.minimum_duty && duty < config.max_duty);
    });
}

#[test]
fn test_zero_speed_command_stops_pump() {
    block_on(async {
        let mut sink = SimTelemetrySink::new();
        sink.queue_command(PumpCommand::new(0));
        let mut aggregator = TelemetryAggregator::new(sink);
        let mut pump = PumpController::new(SimPumpDrive::new());
        pump.turn_on().unwrap();

        aggregator.service_pump_command(&mut pump).await.unwrap();

        assert!(!pump.is_on());
        assert_eq!(pump.drive().last_op(), Some(PinOp::Low));
    });
}

#[test]
fn test_no_pending_command_is_a_no_op() {
    block_on(async {
        let mut aggregator = TelemetryAggregator::new(SimTelemetrySink::new());
        let mut pump = PumpController::new(SimPumpDrive::new());

        let routed = aggregator.service_pump_command(&mut pump).await.unwrap();

        assert_eq!(routed, None);
        assert!(pump.drive().ops().is_empty());
    });
}

#[test]
fn test_pump_speed_echo() {
    block_on(async {
        let mut aggregator = TelemetryAggregator::new(SimTelemetrySink::new());

        aggregator.publish_pump_speed(128).await.unwrap();

        assert_eq!(
            aggregator.sink().published(),
            &[(CHANNEL_WATER_PUMP, ChannelValue::unsigned(128))]
        );
    });
}
