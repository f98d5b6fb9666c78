//! Decibel / linear conversions for power and amplitude
//! 
//! Non-positive inputs to the log forms are not clamped: log10(0) gives -inf
//! and log10 of a negative value gives NaN, exactly as the float library does.

/// Convert dB to linear power: 10^(dB/10)
#[inline]
pub fn db_to_linear_power(db: f64) -> f64 {
    10.0f64.powf(db / 10.0)
}

/// Convert linear power to dB: 10·log10(linear)
#[inline]
pub fn linear_power_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

/// Convert dB to linear amplitude: 10^(dB/20)
#[inline]
pub fn db_to_linear_amplitude(db: f64) -> f64 {
    10.0f64.powf(db / 20.0)
}

/// Convert linear amplitude to dB: 20·log10(linear)
#[inline]
pub fn linear_amplitude_to_db(linear: f64) -> f64 {
    20.0 * linear.log10()
}
