//! Water pump actuation control
//!
//! The pump hangs off a single output line: low is off, high is full speed,
//! and a PWM duty in between runs it proportionally. Small DC pumps stall
//! below a hardware-dependent duty floor, so proportional speeds are
//! remapped onto the usable part of the PWM range instead of the full one.

use embassy_time::{Duration, Instant, Timer};

use crate::ports::{ActuationError, PumpDrivePort};

/// Longest single sleep inside a timed dose
///
/// The dose wait is sliced so the executor gets control at a steady rate and
/// other pending work is not starved while the pump runs.
const DOSE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// PWM range configuration for the pump line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpConfig {
    /// Duty floor below which the pump motor does not move
    pub minimum_duty: u16,
    /// Maximum duty of the PWM peripheral
    pub max_duty: u16,
}

impl PumpConfig {
    /// ESP8266 `analogWrite` range with the bench-measured stall floor
    pub const ESP8266_DEFAULT: Self = Self {
        minimum_duty: 400,
        max_duty: 1023,
    };

    /// Create a config with custom parameters
    ///
    /// `minimum_duty` must be below `max_duty`, and the span between them
    /// should be at least 255 so every distinct speed lands on a distinct
    /// duty.
    pub const fn new(minimum_duty: u16, max_duty: u16) -> Self {
        Self {
            minimum_duty,
            max_duty,
        }
    }
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self::ESP8266_DEFAULT
    }
}

/// Current pump actuation state
///
/// The single source of truth for the line; nothing else writes the pin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpState {
    /// Whether the pump is running (full or proportional)
    pub is_on: bool,
    /// Duty currently driven; 0 is the hardware off level
    pub duty: u16,
}

/// Variable-speed water pump controller
///
/// Owns the drive port and the pump state exclusively. All operations are
/// single-caller; a timed dose borrows the controller mutably for its whole
/// run, so reentrant actuation during a dose is rejected at compile time.
pub struct PumpController<P: PumpDrivePort> {
    drive: P,
    config: PumpConfig,
    state: PumpState,
}

impl<P: PumpDrivePort> PumpController<P> {
    /// Create a controller with the default PWM range
    pub fn new(drive: P) -> Self {
        Self::with_config(drive, PumpConfig::ESP8266_DEFAULT)
    }

    /// Create a controller with a custom PWM range
    pub fn with_config(drive: P, config: PumpConfig) -> Self {
        Self {
            drive,
            config,
            state: PumpState::default(),
        }
    }

    /// Drive the line to a known-safe off state
    ///
    /// Call once at startup before the first command; construction itself
    /// does not touch the hardware.
    pub fn init(&mut self) -> Result<(), ActuationError> {
        self.turn_off()
    }

    /// Whether the pump is currently running
    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Current actuation state
    pub fn state(&self) -> PumpState {
        self.state
    }

    /// PWM range configuration
    pub fn config(&self) -> PumpConfig {
        self.config
    }

    /// Get the underlying drive port (for diagnostics)
    pub fn drive(&self) -> &P {
        &self.drive
    }

    /// Stop the pump
    pub fn turn_off(&mut self) -> Result<(), ActuationError> {
        self.drive.set_low()?;
        self.state = PumpState {
            is_on: false,
            duty: 0,
        };
        Ok(())
    }

    /// Run the pump at full speed
    pub fn turn_on(&mut self) -> Result<(), ActuationError> {
        match self.drive.set_high() {
            Ok(()) => {
                self.state = PumpState {
                    is_on: true,
                    duty: self.config.max_duty,
                };
                Ok(())
            }
            Err(e) => self.fail_safe(e),
        }
    }

    /// Run the pump at a proportional speed
    ///
    /// Speed 0 stops the pump and 255 runs it at full speed; anything in
    /// between is remapped linearly from [0, 255] onto
    /// [`minimum_duty`, `max_duty`] and driven as PWM.
    ///
    /// [`minimum_duty`]: PumpConfig::minimum_duty
    /// [`max_duty`]: PumpConfig::max_duty
    pub fn set_speed(&mut self, speed: u8) -> Result<(), ActuationError> {
        match speed {
            0 => self.turn_off(),
            255 => self.turn_on(),
            _ => {
                let duty = self.duty_for_speed(speed);
                match self.drive.set_duty(duty) {
                    Ok(()) => {
                        self.state = PumpState { is_on: true, duty };
                        Ok(())
                    }
                    Err(e) => self.fail_safe(e),
                }
            }
        }
    }

    /// Run the pump at a proportional speed for a bounded duration, then stop
    ///
    /// Blocks the calling task until `duration` has elapsed, yielding to the
    /// executor in [`DOSE_POLL_INTERVAL`] slices so concurrent work keeps
    /// running. The pump is returned to OFF on every exit path: after the
    /// deadline, after an actuation fault, and - via a drop guard - when the
    /// returned future is cancelled mid-wait.
    pub async fn dose_for(&mut self, speed: u8, duration: Duration) -> Result<(), ActuationError> {
        let mut guard = OffGuard {
            pump: self,
            armed: true,
        };

        guard.pump.set_speed(speed)?;

        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            Timer::after((deadline - now).min(DOSE_POLL_INTERVAL)).await;
        }

        guard.armed = false;
        guard.pump.turn_off()
    }

    /// Remap a 1..=254 speed onto the usable duty range
    fn duty_for_speed(&self, speed: u8) -> u16 {
        let span = (self.config.max_duty - self.config.minimum_duty) as u32;
        self.config.minimum_duty + (speed as u32 * span / 255) as u16
    }

    /// Try to leave the line low after a failed write, then propagate
    fn fail_safe(&mut self, error: ActuationError) -> Result<(), ActuationError> {
        log::warn!("pump drive fault, forcing line low: {error}");

        if self.drive.set_low().is_ok() {
            self.state = PumpState {
                is_on: false,
                duty: 0,
            };
        }

        Err(error)
    }
}

/// Returns the pump to OFF if a dose future is dropped mid-wait
struct OffGuard<'a, P: PumpDrivePort> {
    pump: &'a mut PumpController<P>,
    armed: bool,
}

impl<P: PumpDrivePort> Drop for OffGuard<'_, P> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.pump.turn_off();
        }
    }
}
