//! Recursive radix-2 Cooley-Tukey FFT for a single frame
//! 
//! The frame length must be a power of two. The framing layer guarantees this;
//! calling [`fft_frame`] directly with any other length panics. Use
//! [`try_fft_frame`] when the length is not known to be valid.

use std::f64::consts::PI;

use crate::error::{Result, SpectralError};
use crate::math::{Complex, conjugate_all, scale_all, unit_phasor};

/// Forward FFT of one power-of-two frame
/// 
/// # Arguments
/// * `frame` - Time-domain samples, length N = 2^k with N ≥ 1
/// 
/// # Returns
/// Spectrum X[k] = Σ x[i]·exp(-2πi·k·i/N), unnormalized
/// 
/// # Panics
/// If the frame length is not a power of two
pub fn fft_frame(frame: &[Complex]) -> Vec<Complex> {
    let n = frame.len();
    assert!(n.is_power_of_two(), "fft_frame: length {} is not a power of two", n);
    
    radix2(frame)
}

/// Inverse FFT of one power-of-two frame
/// 
/// Computed as conj(FFT(conj(X))) / N, which equals the direct inverse
/// transform with a positive twiddle angle.
/// 
/// # Panics
/// If the frame length is not a power of two
pub fn ifft_frame(spectrum: &[Complex]) -> Vec<Complex> {
    let n = spectrum.len();
    assert!(n.is_power_of_two(), "ifft_frame: length {} is not a power of two", n);
    
    let transformed = radix2(&conjugate_all(spectrum));
    scale_all(&conjugate_all(&transformed), 1.0 / n as f64)
}

/// Checked variant of [`fft_frame`]
pub fn try_fft_frame(frame: &[Complex]) -> Result<Vec<Complex>> {
    if !frame.len().is_power_of_two() {
        return Err(SpectralError::NotPowerOfTwo(frame.len()));
    }
    Ok(radix2(frame))
}

/// Checked variant of [`ifft_frame`]
pub fn try_ifft_frame(spectrum: &[Complex]) -> Result<Vec<Complex>> {
    if !spectrum.len().is_power_of_two() {
        return Err(SpectralError::NotPowerOfTwo(spectrum.len()));
    }
    Ok(ifft_frame(spectrum))
}

// Depth is log2(N), at most 11 for the default ladder.
fn radix2(x: &[Complex]) -> Vec<Complex> {
    let n = x.len();
    if n == 1 {
        return vec![x[0]];
    }
    
    let half = n / 2;
    let even: Vec<Complex> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = x.iter().skip(1).step_by(2).copied().collect();
    
    let even = radix2(&even);
    let odd = radix2(&odd);
    
    let mut out = vec![Complex::new(0.0, 0.0); n];
    for k in 0..half {
        let t = unit_phasor(-2.0 * PI * k as f64 / n as f64) * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    
    out
}
