//! Heat index regression model
//!
//! Combines measured temperature and relative humidity into a "feels like"
//! temperature using Steadman's simple estimate and the Rothfusz regression,
//! as published by the NWS:
//! <http://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml>

use libm::{fabsf, sqrtf};

/// Compute the heat index in degrees Fahrenheit
///
/// `temperature_f` is the dry-bulb temperature in Fahrenheit and
/// `relative_humidity` the relative humidity in percent. The simple Steadman
/// estimate is used as-is when it stays at or below 79 °F; above that the
/// full Rothfusz regression replaces it, with two boundary adjustments for
/// very dry and very humid air near the regression's edge of validity. The
/// two adjustment conditions are disjoint in (T, RH) but are each evaluated
/// on every regression pass.
pub fn heat_index_fahrenheit(temperature_f: f32, relative_humidity: f32) -> f32 {
    let t = temperature_f;
    let rh = relative_humidity;

    let mut hi = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);

    if hi > 79.0 {
        hi = -42.379
            + 2.04901523 * t
            + 10.14333127 * rh
            - 0.22475541 * t * rh
            - 0.00683783 * t * t
            - 0.05481717 * rh * rh
            + 0.00122874 * t * t * rh
            + 0.00085282 * t * rh * rh
            - 0.00000199 * t * t * rh * rh;

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= ((13.0 - rh) * 0.25) * sqrtf((17.0 - fabsf(t - 95.0)) * 0.05882);
        }

        if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
        }
    }

    hi
}
