//! WAV reading and writing helpers.
//!
//! The core library deliberately knows nothing about files; everything
//! hound-related lives here. Integer samples are normalized to [-1, 1] on
//! read and written back at 16 bits; float files stay float.

use anyhow::{bail, Context, Result};
use std::path::Path;

use chromanoise::AudioBuffer;

/// The on-disk sample format of a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Integer PCM (written back as 16-bit).
    Int,
    /// 32-bit IEEE float.
    Float,
}

/// Reads a WAV file into a planar buffer.
///
/// # Returns
/// The buffer plus the source sample format, so callers can write the
/// result back in kind.
pub fn read_wav(path: &Path) -> Result<(AudioBuffer, WavFormat)> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();

    if spec.channels == 0 {
        bail!("{} declares zero channels", path.display());
    }

    let (interleaved, format): (Vec<f32>, WavFormat) = match spec.sample_format {
        hound::SampleFormat::Float => {
            let samples: Result<Vec<f32>, _> = reader.samples::<f32>().collect();
            (samples.context("failed to decode float samples")?, WavFormat::Float)
        }
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            let samples: Result<Vec<i32>, _> = reader.samples::<i32>().collect();
            (
                samples
                    .context("failed to decode integer samples")?
                    .into_iter()
                    .map(|s| s as f32 * scale)
                    .collect(),
                WavFormat::Int,
            )
        }
    };

    let num_channels = spec.channels as usize;
    let num_samples = interleaved.len() / num_channels;
    let mut channels: Vec<Vec<f32>> = (0..num_channels)
        .map(|_| Vec::with_capacity(num_samples))
        .collect();
    for frame in interleaved.chunks_exact(num_channels) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok((AudioBuffer::new(channels, spec.sample_rate), format))
}

/// Writes a planar buffer to a WAV file.
///
/// Integer output is clamped to [-1, 1] before quantization; float output
/// is written verbatim.
pub fn write_wav(path: &Path, buffer: &AudioBuffer, format: WavFormat) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.num_channels() as u16,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: match format {
            WavFormat::Int => 16,
            WavFormat::Float => 32,
        },
        sample_format: match format {
            WavFormat::Int => hound::SampleFormat::Int,
            WavFormat::Float => hound::SampleFormat::Float,
        },
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for i in 0..buffer.num_samples() {
        for channel in buffer.channels() {
            match format {
                WavFormat::Int => {
                    // Inverse of the read scaling, so untouched samples
                    // survive a round trip bit for bit
                    let scaled = (channel[i].clamp(-1.0, 1.0) * 32768.0)
                        .round()
                        .clamp(i16::MIN as f32, i16::MAX as f32);
                    writer.write_sample(scaled as i16)?;
                }
                WavFormat::Float => writer.write_sample(channel[i])?,
            }
        }
    }

    writer.finalize().context("failed to finalize WAV")?;
    Ok(())
}
