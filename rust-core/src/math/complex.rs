//! Complex sample type and sequence helpers
//! 
//! Arithmetic (add, sub, mul, scale, conj, polar form, norm, arg) comes from
//! `num_complex`; nothing here guards against NaN or infinities.

pub use num_complex::Complex64 as Complex;

/// Unit phasor exp(i·angle)
#[inline]
pub fn unit_phasor(angle: f64) -> Complex {
    Complex::from_polar(1.0, angle)
}

/// Conjugate every sample of a sequence
pub fn conjugate_all(samples: &[Complex]) -> Vec<Complex> {
    samples.iter().map(|s| s.conj()).collect()
}

/// Multiply every sample of a sequence by a real factor
pub fn scale_all(samples: &[Complex], factor: f64) -> Vec<Complex> {
    samples.iter().map(|&s| s * factor).collect()
}

/// Lift a real-valued signal into complex samples with zero imaginary parts
/// 
/// # Arguments
/// * `signal` - Real time-domain samples
/// 
/// # Returns
/// Complex sequence of the same length
pub fn real_sequence(signal: &[f64]) -> Vec<Complex> {
    signal.iter().map(|&s| Complex::new(s, 0.0)).collect()
}
