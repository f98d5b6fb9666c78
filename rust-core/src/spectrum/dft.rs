//! Direct O(N²) Fourier transform pair
//! 
//! Reference path used to check the fast transform. Works for any length,
//! including zero.

use std::f64::consts::PI;

use crate::math::{Complex, unit_phasor};

/// Forward DFT: X[k] = Σ x[i]·exp(-2πi·k·i/N)
pub fn dft(x: &[Complex]) -> Vec<Complex> {
    let n = x.len();
    
    (0..n)
        .map(|k| {
            x.iter().enumerate().fold(Complex::new(0.0, 0.0), |acc, (i, &xi)| {
                acc + xi * unit_phasor(-2.0 * PI * k as f64 * (i as f64 / n as f64))
            })
        })
        .collect()
}

/// Inverse DFT: x[k] = (1/N)·Σ X[i]·exp(+2πi·k·i/N)
pub fn idft(spectrum: &[Complex]) -> Vec<Complex> {
    let n = spectrum.len();
    let norm = 1.0 / n as f64;
    
    (0..n)
        .map(|k| {
            spectrum.iter().enumerate().fold(Complex::new(0.0, 0.0), |acc, (i, &xi)| {
                acc + xi * norm * unit_phasor(2.0 * PI * k as f64 * (i as f64 / n as f64))
            })
        })
        .collect()
}
