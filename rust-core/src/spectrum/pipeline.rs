//! Analysis/resynthesis pipeline
//! 
//! Binds a sample rate and a frame ladder to the framing, bin codec and
//! synthesis stages so a caller can go from samples to bin records and back.

use crate::error::{Result, SpectralError};
use crate::math::Complex;

use super::bins::{BinRecord, frames_to_bins};
use super::framing::{Frame, FrameLadder, inverse_transform_sequence};
use super::synthesis::synthesize;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sample rate in Hz, used to label bin frequencies
    pub sample_rate: f64,
    
    /// Permitted frame sizes
    pub ladder: FrameLadder,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            ladder: FrameLadder::default(),
        }
    }
}

impl PipelineConfig {
    /// Check the sample rate is positive and finite
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(SpectralError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}

/// Spectral analysis/resynthesis pipeline
pub struct SpectralPipeline {
    config: PipelineConfig,
}

impl SpectralPipeline {
    /// Create a pipeline from a validated configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "spectral pipeline at {} Hz, frame sizes {:?}",
            config.sample_rate,
            config.ladder.sizes()
        );
        Ok(Self { config })
    }
    
    /// Frame and transform a signal
    pub fn transform(&self, signal: &[Complex]) -> Vec<Frame> {
        self.config.ladder.transform(signal)
    }
    
    /// Inverse-transform frames and concatenate them
    pub fn inverse_transform(&self, frames: &[Frame]) -> Vec<Complex> {
        inverse_transform_sequence(frames)
    }
    
    /// Frame, transform and encode a signal into bin records
    /// 
    /// # Arguments
    /// * `signal` - Time-domain samples (imaginary parts normally zero)
    /// 
    /// # Returns
    /// One record per frame, in time order
    pub fn analyze(&self, signal: &[Complex]) -> Vec<BinRecord> {
        let records = frames_to_bins(&self.transform(signal), self.config.sample_rate);
        log::debug!("analyzed {} samples into {} bin records", signal.len(), records.len());
        records
    }
    
    /// Synthesize bin records back into a flat time-domain signal
    /// 
    /// The result includes the zero padding of the last frame.
    pub fn resynthesize(&self, records: &[BinRecord]) -> Vec<Complex> {
        synthesize(records)
    }
    
    /// Analyze then resynthesize, truncated to the input length
    pub fn round_trip(&self, signal: &[Complex]) -> Vec<Complex> {
        let mut output = self.resynthesize(&self.analyze(signal));
        output.truncate(signal.len());
        output
    }
    
    /// Frame size and frame count used for a signal of `len` samples
    pub fn frame_layout(&self, len: usize) -> (usize, usize) {
        let ladder = &self.config.ladder;
        (ladder.frame_size_for(len), ladder.frame_count_for(len))
    }
    
    /// Frequency in Hz of bin `index` within a frame of `frame_len` samples
    pub fn bin_frequency(&self, index: usize, frame_len: usize) -> f64 {
        self.config.sample_rate * index as f64 / frame_len as f64
    }
    
    /// Update configuration
    pub fn update_config(&mut self, config: PipelineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
    
    /// Get current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
    
    pub fn sample_rate(&self) -> f64 {
        self.config.sample_rate
    }
}
