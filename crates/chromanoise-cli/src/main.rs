//! Chromanoise CLI - colored-noise augmentation for WAV files
//!
//! This binary provides commands for applying the colored-noise transform
//! to audio files, rendering standalone colored noise for auditioning, and
//! inspecting the parameters a seed would draw.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod wav;

use chromanoise::NoiseColor;
use commands::ConfigArgs;

/// Chromanoise - deterministic colored-noise audio augmentation
#[derive(Parser)]
#[command(name = "chromanoise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the colored-noise transform to a WAV file
    Apply {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Base seed; the noise stream is derived from it and the input
        /// file name, so batch runs give every file independent noise
        #[arg(long, default_value_t = 0)]
        seed: u32,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Render standalone colored noise to a WAV file
    Render {
        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for the noise stream
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Noise color preset
        #[arg(long, default_value = "pink")]
        color: NoiseColor,

        /// Raw spectral decay in dB/octave (overrides --color)
        #[arg(long)]
        f_decay: Option<f64>,

        /// Shape the spectrum with the A-weighting curve
        #[arg(long)]
        a_weighting: bool,

        /// Duration in seconds
        #[arg(long, default_value_t = 2.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Number of channels
        #[arg(long, default_value_t = 1)]
        channels: usize,

        /// Spectral curve resolution
        #[arg(long, default_value_t = 1024)]
        n_fft: usize,

        /// Peak amplitude after normalization
        #[arg(long, default_value_t = 0.8)]
        peak: f64,
    },

    /// Sample and print invocation parameters without processing audio
    Params {
        /// Seed to sample with
        #[arg(long, default_value_t = 0)]
        seed: u32,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            input,
            output,
            seed,
            config,
        } => commands::apply::run(&input, &output, seed, &config),
        Commands::Render {
            output,
            seed,
            color,
            f_decay,
            a_weighting,
            duration,
            sample_rate,
            channels,
            n_fft,
            peak,
        } => commands::render::run(&commands::render::RenderArgs {
            output,
            seed,
            f_decay: f_decay.unwrap_or_else(|| color.decay_db_per_octave()),
            a_weighting,
            duration,
            sample_rate,
            channels,
            n_fft,
            peak,
        }),
        Commands::Params { seed, config } => commands::params::run(seed, &config),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}
