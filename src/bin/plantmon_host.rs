//! Plant Monitor Host Simulation
//!
//! This binary runs the full control loop on your PC against simulated
//! hardware: it takes forced sensor readings, assembles and "publishes"
//! telemetry snapshots to stdout, services a queued pump command, and runs
//! a short timed dose.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin plantmon_host
//!
//! # More telemetry cycles
//! cargo run --bin plantmon_host -- --cycles 5
//! ```

use plantmon::adapters::{
    SimAnalogChannel, SimClimateSensor, SimLightSensor, SimPumpDrive, SimTelemetrySink,
    SimThermometer,
};
use plantmon::feed_protocol::PumpCommand;
use plantmon::ports::ClimateSample;
use plantmon::{
    ChannelValue, PumpController, SoilMonitor, SpectrumMonitor, TelemetryAggregator,
    TemperatureUnit,
};

use embassy_time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let cycles = if let Some(idx) = args.iter().position(|a| a == "--cycles") {
        args.get(idx + 1).and_then(|v| v.parse().ok()).unwrap_or(3)
    } else {
        3
    };

    futures::executor::block_on(run(cycles))
}

async fn run(cycles: usize) -> Result<(), Box<dyn std::error::Error>> {
    // ========================================================================
    // Simulated Hardware
    // ========================================================================

    // Soil probe: drying out over the run (counts on a 10-bit, 3.3 V scale)
    let level_channel = SimAnalogChannel::new([256, 384, 512, 640, 768]);
    let quality_channel = SimAnalogChannel::new([512, 640, 768, 800, 820]);
    let soil_thermometer = SimThermometer::new([18.5, 18.6, 18.8]);

    // Warm afternoon air
    let climate_sensor = SimClimateSensor::new([
        ClimateSample {
            temperature_c: 31.0,
            relative_humidity: 42.0,
        },
        ClimateSample {
            temperature_c: 31.4,
            relative_humidity: 40.5,
        },
        ClimateSample {
            temperature_c: 31.9,
            relative_humidity: 39.0,
        },
    ]);

    // Bright light: ir 220, full 13000
    let light_sensor = SimLightSensor::new([0x00DC_32C8]);

    let mut soil = SoilMonitor::new(level_channel, quality_channel, soil_thermometer);
    let mut climate = plantmon::ClimateMonitor::new(climate_sensor);
    let mut spectrum = SpectrumMonitor::new(light_sensor);

    let mut pump = PumpController::new(SimPumpDrive::new());
    pump.init()?;

    let mut sink = SimTelemetrySink::new();
    sink.queue_command(PumpCommand::new(128));
    let mut aggregator = TelemetryAggregator::new(sink);

    // ========================================================================
    // Telemetry Cycles
    // ========================================================================

    for cycle in 1..=cycles {
        println!("--- cycle {cycle} ---");

        soil.read_moisture_level().await?;
        soil.read_quality().await?;
        soil.read_temperature(TemperatureUnit::Celsius).await?;
        climate.read_temperature(TemperatureUnit::Celsius).await?;
        spectrum.read_luminosity().await?;

        println!(
            "heat index: {:.1} F",
            climate.heat_index(TemperatureUnit::Fahrenheit)
        );

        let snapshot = aggregator.build_snapshot(&soil, &climate, &spectrum);
        aggregator.publish(&snapshot).await?;

        // Service one inbound pump command per cycle, as the scheduler would
        if let Some(command) = aggregator.service_pump_command(&mut pump).await? {
            println!(
                "pump command: speed {} -> duty {}",
                command.speed,
                pump.state().duty
            );
            aggregator.publish_pump_speed(command.speed).await?;
            pump.turn_off()?;
        }
    }

    for (channel, value) in aggregator.sink().published() {
        match value {
            ChannelValue::Float(v) => println!("{channel} = {v:.2}"),
            ChannelValue::Unsigned(v) => println!("{channel} = {v}"),
            ChannelValue::Text(s) => println!("{channel} = {s}"),
        }
    }

    // ========================================================================
    // Timed Dose
    // ========================================================================

    println!("dosing: speed 128 for 250 ms");
    pump.dose_for(128, Duration::from_millis(250)).await?;
    println!("dose finished, pump on: {}", pump.is_on());

    Ok(())
}
