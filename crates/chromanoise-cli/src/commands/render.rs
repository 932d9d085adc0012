//! Render command implementation.
//!
//! Synthesizes standalone colored noise and writes it to a WAV file, which
//! makes it easy to audition a spectral shape before wiring it into an
//! augmentation run.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use chromanoise::spectrum::build_spectral_shape;
use chromanoise::synth::synthesize_noise;
use chromanoise::{create_rng, AudioBuffer};

use crate::wav::{write_wav, WavFormat};

/// Inputs for the render command.
#[derive(Debug)]
pub struct RenderArgs {
    /// Output WAV file.
    pub output: PathBuf,
    /// Seed for the noise stream.
    pub seed: u32,
    /// Spectral decay in dB/octave.
    pub f_decay: f64,
    /// Shape the spectrum with the A-weighting curve.
    pub a_weighting: bool,
    /// Duration in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: usize,
    /// Spectral curve resolution.
    pub n_fft: usize,
    /// Peak amplitude after normalization.
    pub peak: f64,
}

/// Runs the render command.
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    if args.duration <= 0.0 || !args.duration.is_finite() {
        bail!("duration must be positive, got {}", args.duration);
    }
    if args.sample_rate == 0 || args.channels == 0 || args.n_fft == 0 {
        bail!("sample rate, channels, and n_fft must be positive");
    }

    let num_samples = (args.duration * args.sample_rate as f64).round() as usize;
    println!(
        "{} {:.2} dB/octave, a-weighting {}, {} samples at {} Hz",
        "Rendering:".cyan().bold(),
        args.f_decay,
        if args.a_weighting { "on" } else { "off" },
        num_samples,
        args.sample_rate
    );

    let shape = build_spectral_shape(
        args.f_decay,
        args.a_weighting,
        args.n_fft,
        args.sample_rate,
    );
    let mut rng = create_rng(args.seed);
    let mut channels = synthesize_noise(&shape, num_samples, args.channels, &mut rng);

    normalize_peak(&mut channels, args.peak as f32);

    let buffer = AudioBuffer::new(channels, args.sample_rate);
    write_wav(&args.output, &buffer, WavFormat::Int)?;

    println!("{} {}", "Wrote:".green().bold(), args.output.display());
    Ok(ExitCode::SUCCESS)
}

/// Scales all channels jointly so the loudest sample sits at `peak`.
fn normalize_peak(channels: &mut [Vec<f32>], peak: f32) {
    let max = channels
        .iter()
        .flat_map(|ch| ch.iter())
        .map(|s| s.abs())
        .fold(0.0_f32, f32::max);

    if max > 0.0 {
        let scale = peak / max;
        for channel in channels.iter_mut() {
            for sample in channel.iter_mut() {
                *sample *= scale;
            }
        }
    }
}
