//! Framing layer around the per-frame FFT
//! 
//! Splits an arbitrary-length signal into power-of-two frames drawn from a
//! fixed ladder of sizes, zero-padding on the right, and concatenates frames
//! back on the inverse path. The inverse does not restore the original length.

use crate::error::{Result, SpectralError};
use crate::math::Complex;

use super::fft::{fft_frame, ifft_frame};

/// One power-of-two frame of samples or spectral coefficients
pub type Frame = Vec<Complex>;

/// Supported frame sizes, ascending
pub const DEFAULT_LADDER: [usize; 11] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048];

/// Ascending list of permitted frame sizes
/// 
/// Every entry is a power of two ≥ 2 and the list is strictly increasing.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLadder {
    sizes: Vec<usize>,
}

impl Default for FrameLadder {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_LADDER.to_vec(),
        }
    }
}

impl FrameLadder {
    /// Build a ladder from explicit sizes
    /// 
    /// # Errors
    /// `InvalidLadder` if the list is empty, holds a size that is not a power
    /// of two ≥ 2, or is not strictly ascending
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(SpectralError::InvalidLadder("no frame sizes".into()));
        }
        
        if let Some(&bad) = sizes.iter().find(|&&s| s < 2 || !s.is_power_of_two()) {
            return Err(SpectralError::InvalidLadder(format!(
                "size {} is not a power of two >= 2",
                bad
            )));
        }
        
        if sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpectralError::InvalidLadder(
                "sizes must be strictly ascending".into(),
            ));
        }
        
        Ok(Self { sizes })
    }
    
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
    
    pub fn smallest(&self) -> usize {
        self.sizes[0]
    }
    
    pub fn largest(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }
    
    /// Smallest ladder entry S with `len <= S`, if any
    pub fn smallest_fitting(&self, len: usize) -> Option<usize> {
        self.sizes.iter().copied().find(|&s| len <= s)
    }
    
    /// Frame size used for a signal of `len` samples
    pub fn frame_size_for(&self, len: usize) -> usize {
        self.smallest_fitting(len).unwrap_or_else(|| self.largest())
    }
    
    /// Number of frames emitted for a signal of `len` samples
    pub fn frame_count_for(&self, len: usize) -> usize {
        match self.smallest_fitting(len) {
            Some(_) => 1,
            None => len.div_ceil(self.largest()),
        }
    }
    
    /// Split, zero-pad and transform a signal into frames
    /// 
    /// # Arguments
    /// * `signal` - Time-domain samples of any length (including zero)
    /// 
    /// # Returns
    /// One frame of the smallest fitting size when the signal fits the ladder,
    /// otherwise ceil(N/C) frames of the largest size C in time order, the last
    /// one zero-padded
    pub fn transform(&self, signal: &[Complex]) -> Vec<Frame> {
        let len = signal.len();
        let chunk_size = self.frame_size_for(len);
        log::debug!(
            "framing {} samples into {} frame(s) of {}",
            len,
            self.frame_count_for(len),
            chunk_size
        );
        
        if len <= chunk_size {
            return vec![fft_frame(&zero_padded(signal, chunk_size))];
        }
        
        let chunks = signal.chunks_exact(chunk_size);
        let tail = chunks.remainder();
        
        let mut frames: Vec<Frame> = chunks.map(fft_frame).collect();
        if !tail.is_empty() {
            log::trace!("padding last frame with {} zeros", chunk_size - tail.len());
            frames.push(fft_frame(&zero_padded(tail, chunk_size)));
        }
        
        frames
    }
}

/// Transform a signal using the default ladder
pub fn transform_sequence(signal: &[Complex]) -> Vec<Frame> {
    FrameLadder::default().transform(signal)
}

/// Inverse-transform every frame and concatenate the results in order
/// 
/// The output length is the sum of the frame lengths; padding added by the
/// forward path is kept.
pub fn inverse_transform_sequence(frames: &[Frame]) -> Vec<Complex> {
    let mut signal = Vec::with_capacity(frames.iter().map(Vec::len).sum());
    
    for frame in frames {
        signal.extend(ifft_frame(frame));
    }
    
    signal
}

fn zero_padded(samples: &[Complex], size: usize) -> Frame {
    let mut frame = Vec::with_capacity(size);
    frame.extend_from_slice(samples);
    frame.resize(size, Complex::new(0.0, 0.0));
    frame
}
