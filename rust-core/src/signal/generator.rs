//! Cosine tone generator
//! 
//! Produces x[i] = A·cos(2π·f·i/fs + φ) with A given in dB (amplitude domain).
//! Parameters are not validated; a negative duration or sample rate is the
//! caller's problem.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::{Complex, db_to_linear_amplitude};

/// Parameters of a cosine tone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosineTone {
    /// Amplitude in dB (0 dB = 1.0 linear)
    pub amplitude_db: f64,
    
    /// Frequency in Hz
    pub frequency_hz: f64,
    
    /// Phase offset in radians
    pub phase_rad: f64,
    
    /// Sample rate in Hz
    pub sample_rate_hz: f64,
    
    /// Duration in seconds
    pub duration_sec: f64,
}

impl Default for CosineTone {
    fn default() -> Self {
        Self {
            amplitude_db: 0.0,
            frequency_hz: 1000.0,
            phase_rad: 0.0,
            sample_rate_hz: 48000.0,
            duration_sec: 1.0,
        }
    }
}

impl CosineTone {
    /// Number of samples the tone spans: round(duration·fs)
    pub fn num_samples(&self) -> usize {
        (self.duration_sec * self.sample_rate_hz).round() as usize
    }
    
    /// Render the tone
    pub fn generate(&self) -> Vec<Complex> {
        generate_cosine(
            self.amplitude_db,
            self.frequency_hz,
            self.phase_rad,
            self.sample_rate_hz,
            self.duration_sec,
        )
    }
}

/// Generate a cosine tone as a complex sequence with zero imaginary parts
/// 
/// # Arguments
/// * `amplitude_db` - Amplitude in dB, converted with 10^(dB/20)
/// * `frequency_hz` - Tone frequency in Hz
/// * `phase_rad` - Phase offset in radians
/// * `sample_rate_hz` - Sample rate in Hz
/// * `duration_sec` - Duration in seconds
/// 
/// # Returns
/// round(duration·fs) samples, possibly empty
pub fn generate_cosine(
    amplitude_db: f64,
    frequency_hz: f64,
    phase_rad: f64,
    sample_rate_hz: f64,
    duration_sec: f64,
) -> Vec<Complex> {
    let num_samples = (duration_sec * sample_rate_hz).round() as usize;
    let amplitude = db_to_linear_amplitude(amplitude_db);
    
    (0..num_samples)
        .map(|i| {
            let angle = 2.0 * PI * frequency_hz * i as f64 / sample_rate_hz + phase_rad;
            Complex::new(amplitude * angle.cos(), 0.0)
        })
        .collect()
}
