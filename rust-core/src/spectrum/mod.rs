//! Spectral analysis and synthesis
//! 
//! Reference DFT, framed radix-2 FFT, the frequency-bin codec and
//! resynthesis from bins.

pub mod dft;
pub mod fft;
pub mod framing;
pub mod bins;
pub mod synthesis;
pub mod pipeline;

pub use dft::{dft, idft};
pub use fft::{fft_frame, ifft_frame, try_fft_frame, try_ifft_frame};
pub use framing::{
    DEFAULT_LADDER, Frame, FrameLadder, inverse_transform_sequence, transform_sequence,
};
pub use bins::{
    BinRecord, FrequencyBin, bins_to_frames, frames_to_bins, from_bins, to_bins, try_from_bins,
};
pub use synthesis::{synthesize, synthesize_frame};
pub use pipeline::{PipelineConfig, SpectralPipeline};
