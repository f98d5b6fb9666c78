//! Compact frequency-bin records
//! 
//! A record keeps the DC coefficient and the non-redundant half of a frame's
//! spectrum (indices 1..=N/2) tagged with their frequencies. Decoding rebuilds
//! the upper half by copying the lower half in mirror order. The copied values
//! are NOT conjugated, so a spectrum with non-zero imaginary parts does not
//! come back Hermitian.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectralError};
use crate::math::{Complex, linear_amplitude_to_db};

use super::framing::Frame;

/// One spectral coefficient and its frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBin {
    /// sample_rate·i/N for bin index i
    pub frequency_hz: f64,
    
    /// X[i], unscaled
    pub amplitude: Complex,
}

impl FrequencyBin {
    pub fn new(frequency_hz: f64, amplitude: Complex) -> Self {
        Self {
            frequency_hz,
            amplitude,
        }
    }
    
    /// |X[i]|
    pub fn magnitude(&self) -> f64 {
        self.amplitude.norm()
    }
    
    /// arg(X[i]) in radians
    pub fn phase(&self) -> f64 {
        self.amplitude.arg()
    }
    
    /// 20·log10(|X[i]|); a zero bin gives -inf
    pub fn magnitude_db(&self) -> f64 {
        linear_amplitude_to_db(self.magnitude())
    }
}

/// DC term plus bins 1..=N/2 of one transformed frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinRecord {
    /// X[0]
    pub dc: Complex,
    
    /// Bins in strictly increasing index order
    pub bins: Vec<FrequencyBin>,
}

impl BinRecord {
    /// Length of the frame this record decodes to
    pub fn frame_len(&self) -> usize {
        self.bins.len() * 2
    }
    
    /// Bin with the largest magnitude, with its bin index (1-based, DC excluded)
    pub fn peak(&self) -> Option<(usize, &FrequencyBin)> {
        self.bins
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.magnitude().total_cmp(&b.magnitude()))
            .map(|(i, bin)| (i + 1, bin))
    }
}

/// Encode a frequency-domain frame as a bin record
/// 
/// # Arguments
/// * `frame` - Spectrum of length N (N ≥ 1)
/// * `sample_rate` - Sample rate in Hz, used for the bin frequencies
/// 
/// # Returns
/// Record with DC = X[0] and N/2 bins for indices 1..=N/2
/// 
/// # Panics
/// If the frame is empty
pub fn to_bins(frame: &[Complex], sample_rate: f64) -> BinRecord {
    let n = frame.len();
    let num_bins = n / 2;
    
    let bins = (1..=num_bins)
        .map(|i| FrequencyBin::new(sample_rate * i as f64 / n as f64, frame[i]))
        .collect();
    
    BinRecord {
        dc: frame[0],
        bins,
    }
}

/// Decode a bin record back into a full frame of length 2M
/// 
/// frame[0] = DC, frame[1..=M] = bins, frame[M + j] = frame[M - j] for
/// j in 1..M (copied verbatim).
/// 
/// # Panics
/// If the record holds no bins
pub fn from_bins(record: &BinRecord) -> Frame {
    let m = record.bins.len();
    assert!(m > 0, "from_bins: record holds no bins");
    
    let mut frame = Vec::with_capacity(2 * m);
    frame.push(record.dc);
    frame.extend(record.bins.iter().map(|bin| bin.amplitude));
    
    for j in 1..m {
        let mirrored = frame[m - j];
        frame.push(mirrored);
    }
    
    frame
}

/// Checked variant of [`from_bins`]
pub fn try_from_bins(record: &BinRecord) -> Result<Frame> {
    if record.bins.is_empty() {
        return Err(SpectralError::EmptyBinRecord);
    }
    Ok(from_bins(record))
}

/// Encode every frame of a collection, preserving order
pub fn frames_to_bins(frames: &[Frame], sample_rate: f64) -> Vec<BinRecord> {
    frames.iter().map(|frame| to_bins(frame, sample_rate)).collect()
}

/// Decode every record of a collection, preserving order
pub fn bins_to_frames(records: &[BinRecord]) -> Vec<Frame> {
    records.iter().map(from_bins).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }
    
    fn sample_frame() -> Frame {
        vec![
            c(10.0, 0.0),
            c(1.0, 2.0),
            c(3.0, -4.0),
            c(5.0, 0.5),
            c(-6.0, 0.0),
            c(5.0, -0.5),
            c(3.0, 4.0),
            c(1.0, -2.0),
        ]
    }
    
    #[test]
    fn test_to_bins_layout() {
        let record = to_bins(&sample_frame(), 8000.0);
        
        assert_eq!(record.dc, c(10.0, 0.0));
        assert_eq!(record.bins.len(), 4);
        assert_eq!(record.frame_len(), 8);
        
        let freqs: Vec<f64> = record.bins.iter().map(|b| b.frequency_hz).collect();
        assert_eq!(freqs, vec![1000.0, 2000.0, 3000.0, 4000.0]);
        
        // Amplitudes copied verbatim, including the Nyquist bin
        assert_eq!(record.bins[1].amplitude, c(3.0, -4.0));
        assert_eq!(record.bins[3].amplitude, c(-6.0, 0.0));
    }
    
    #[test]
    fn test_from_bins_mirrors_without_conjugation() {
        let frame = sample_frame();
        let decoded = from_bins(&to_bins(&frame, 8000.0));
        
        assert_eq!(decoded.len(), 8);
        assert_eq!(&decoded[..5], &frame[..5]);
        
        // Upper half is the lower half reversed, imaginary signs unchanged
        assert_eq!(decoded[5], c(5.0, 0.5));
        assert_eq!(decoded[6], c(3.0, -4.0));
        assert_eq!(decoded[7], c(1.0, 2.0));
        assert_ne!(decoded[7], frame[7]);
    }
    
    #[test]
    fn test_single_bin_record() {
        let record = BinRecord {
            dc: c(1.0, 0.0),
            bins: vec![FrequencyBin::new(24000.0, c(2.0, 0.0))],
        };
        assert_eq!(from_bins(&record), vec![c(1.0, 0.0), c(2.0, 0.0)]);
    }
    
    #[test]
    fn test_empty_record() {
        let record = BinRecord::default();
        
        assert_eq!(try_from_bins(&record), Err(SpectralError::EmptyBinRecord));
        assert!(record.peak().is_none());
    }
    
    #[test]
    #[should_panic(expected = "no bins")]
    fn test_from_bins_panics_on_empty() {
        from_bins(&BinRecord::default());
    }
    
    #[test]
    fn test_bin_inspection() {
        let record = to_bins(&sample_frame(), 8000.0);
        
        let (index, bin) = record.peak().unwrap();
        assert_eq!(index, 4);
        assert_eq!(bin.frequency_hz, 4000.0);
        
        let bin = FrequencyBin::new(100.0, c(0.0, 10.0));
        assert!((bin.magnitude() - 10.0).abs() < 1e-12);
        assert!((bin.phase() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((bin.magnitude_db() - 20.0).abs() < 1e-12);
        
        let silent = FrequencyBin::new(100.0, c(0.0, 0.0));
        assert_eq!(silent.magnitude_db(), f64::NEG_INFINITY);
    }
    
    #[test]
    fn test_record_json_reload_is_bit_exact() {
        // Values that need all 17 significant digits to survive a reload
        let frame: Frame = (0..64)
            .map(|i| {
                let t = i as f64 + 0.1;
                c((1.7 * t).sin() * 3.3 / t, -(0.9 * t).cos() / 7.0)
            })
            .collect();
        let record = to_bins(&frame, 44100.0);
        
        let json = serde_json::to_string(&record).unwrap();
        let restored: BinRecord = serde_json::from_str(&json).unwrap();
        
        assert_eq!(restored.dc.re.to_bits(), record.dc.re.to_bits());
        assert_eq!(restored.dc.im.to_bits(), record.dc.im.to_bits());
        for (a, b) in restored.bins.iter().zip(record.bins.iter()) {
            assert_eq!(a.frequency_hz.to_bits(), b.frequency_hz.to_bits());
            assert_eq!(a.amplitude.re.to_bits(), b.amplitude.re.to_bits());
            assert_eq!(a.amplitude.im.to_bits(), b.amplitude.im.to_bits());
        }
        assert_eq!(restored, record);
    }
    
    #[test]
    fn test_collection_codec_preserves_order() {
        let frames = vec![sample_frame(), vec![c(1.0, 0.0), c(-1.0, 0.0)]];
        let records = frames_to_bins(&frames, 48000.0);
        
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].bins.len(), 1);
        assert_eq!(records[1].bins[0].frequency_hz, 24000.0);
        
        let decoded = bins_to_frames(&records);
        assert_eq!(decoded[1], frames[1]);
        assert_eq!(decoded[0].len(), 8);
    }
}
