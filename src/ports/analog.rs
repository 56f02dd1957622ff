//! Analog channel port - abstraction for one raw ADC channel
//!
//! This trait allows a monitor to read raw conversion counts without knowing
//! which converter or bus produces them (SPI ADC, on-chip ADC, mock, etc.)

use crate::ports::SensorError;
use core::future::Future;

/// Port for reading one analog channel
///
/// An implementation is bound to a single channel of a single converter;
/// monitors that sample several channels own one port instance per channel.
/// Counts are hardware-native and unscaled; [`AdcScale`] converts them to a
/// voltage on the domain side.
///
/// [`AdcScale`]: crate::domain::AdcScale
///
/// # Example Implementation
///
/// ```ignore
/// struct Mcp3008Channel<'a> {
///     adc: &'a mut Mcp3008<Spi>,
///     channel: u8,
/// }
///
/// impl AnalogChannelPort for Mcp3008Channel<'_> {
///     async fn read_counts(&mut self) -> Result<u16, SensorError> {
///         self.adc.read(self.channel).await.map_err(|_| SensorError::ReadFailed)
///     }
/// }
/// ```
pub trait AnalogChannelPort {
    /// Read the current raw conversion count
    fn read_counts(&mut self) -> impl Future<Output = Result<u16, SensorError>>;
}
