//! Multichannel audio sample buffers.

/// An immutable multichannel audio buffer.
///
/// Samples are stored planar (one `Vec<f32>` per channel, all of equal
/// length) together with the sample rate they were recorded at. The
/// transform never mutates its input; it returns a new buffer of identical
/// shape and rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Creates a buffer from planar channel data.
    ///
    /// All channels must have the same length. Malformed (ragged) input is
    /// the caller's responsibility; lengths are checked in debug builds
    /// only.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        debug_assert!(
            channels.windows(2).all(|w| w[0].len() == w[1].len()),
            "all channels must have the same length"
        );
        Self {
            channels,
            sample_rate,
        }
    }

    /// Creates a single-channel buffer.
    pub fn from_mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![samples], sample_rate)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }

    /// All channels as planar slices.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// A single channel's samples.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Consumes the buffer and returns the planar channel data.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }
}
