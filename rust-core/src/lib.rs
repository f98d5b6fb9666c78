//! Spectral Pipeline - Block-based spectral analysis/synthesis core
//! 
//! Converts time-domain sample sequences into framed spectra, compact
//! frequency-bin records, and back. Pure synchronous functions over owned
//! buffers; safe to call from any number of threads at once.

pub mod error;
pub mod math;
pub mod signal;
pub mod spectrum;

pub use error::{Result, SpectralError};
pub use math::Complex;
pub use signal::{CosineTone, generate_cosine};
pub use spectrum::{
    BinRecord, Frame, FrameLadder, FrequencyBin, PipelineConfig, SpectralPipeline,
};
