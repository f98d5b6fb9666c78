//! Resynthesis of time-domain frames straight from bin records

use crate::math::Complex;

use super::bins::{BinRecord, from_bins};
use super::fft::ifft_frame;
use super::framing::Frame;

/// Decode a record and inverse-transform it into one time-domain frame
/// 
/// # Panics
/// If the record holds no bins
pub fn synthesize_frame(record: &BinRecord) -> Frame {
    ifft_frame(&from_bins(record))
}

/// Synthesize every record in order and concatenate the frames
pub fn synthesize(records: &[BinRecord]) -> Vec<Complex> {
    let mut signal = Vec::with_capacity(records.iter().map(BinRecord::frame_len).sum());
    
    for record in records {
        signal.extend(synthesize_frame(record));
    }
    
    signal
}
