//! Error types for the spectral pipeline
//! 
//! Only the checked entry points and the configuration layer return errors.
//! Numeric degeneracy (NaN, infinities) is never reported here.

use thiserror::Error;

/// Result alias carrying [`SpectralError`]
pub type Result<T> = std::result::Result<T, SpectralError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("Frame length {0} is not a power of two")]
    NotPowerOfTwo(usize),
    
    #[error("Bin record holds no bins")]
    EmptyBinRecord,
    
    #[error("Invalid frame ladder: {0}")]
    InvalidLadder(String),
    
    #[error("Sample rate must be positive and finite (found: {0} Hz)")]
    InvalidSampleRate(f64),
}
