//! RMS level meter for captured frames.
//!
//! Accumulates sum-of-squares over one or more frames, then computes
//! `sqrt(mean_square) / 32767` on `read()`. Useful for microphone gain
//! checks and capture health monitoring alongside detection.

/// RMS level meter.
///
/// # Example
/// ```ignore
/// let mut rms = FrameRms::new();
/// rms.feed(&frame);
/// if rms.available() {
///     let level = rms.read(); // 0.0–1.0
/// }
/// ```
pub struct FrameRms {
    /// Running sum of squared samples.
    accum: u64,
    /// Number of samples accumulated.
    count: u32,
    /// Whether new data is available since last read.
    new_output: bool,
}

impl FrameRms {
    /// Create a new RMS meter.
    pub const fn new() -> Self {
        FrameRms {
            accum: 0,
            count: 0,
            new_output: false,
        }
    }

    /// Accumulate one frame of samples.
    pub fn feed(&mut self, frame: &[i16]) {
        let mut sum = self.accum;
        for &s in frame {
            let s = s as i64;
            sum += (s * s) as u64;
        }
        self.accum = sum;
        self.count += frame.len() as u32;
        self.new_output = true;
    }

    /// Returns `true` if new data has been accumulated since the last `read()`.
    pub fn available(&self) -> bool {
        self.new_output
    }

    /// Read the RMS level (0.0–1.0) and reset the accumulator.
    ///
    /// If no samples have been accumulated, returns 0.0.
    pub fn read(&mut self) -> f32 {
        let sum = self.accum;
        let num = self.count;
        self.accum = 0;
        self.count = 0;
        self.new_output = false;

        if num == 0 {
            return 0.0;
        }

        let mean_sq = sum as f64 / num as f64;
        let rms = libm::sqrt(mean_sq);
        (rms / 32767.0) as f32
    }
}

impl Default for FrameRms {
    fn default() -> Self {
        Self::new()
    }
}
