//! Chromanoise - colored-noise audio augmentation.
//!
//! This crate implements a single augmentation operator for audio/ML
//! training pipelines: it injects synthetic colored noise (white, pink,
//! brown, blue, violet, or any decay in between) into a signal at a
//! randomly sampled signal-to-noise ratio, optionally shaped by the
//! perceptual A-weighting curve, behind a probability gate.
//!
//! # Overview
//!
//! One invocation runs a fixed pipeline:
//!
//! 1. Sample the invocation parameters (SNR, spectral decay, gates) from
//!    the configured ranges.
//! 2. Build the target spectral envelope from the decay law, optionally
//!    multiplied by the A-weighting gain.
//! 3. Synthesize Gaussian noise per channel and impose the envelope in the
//!    frequency domain.
//! 4. Scale the noise so the mix hits the sampled SNR and sum.
//!
//! When the probability gate fails, the input is returned unchanged.
//!
//! # Determinism
//!
//! All randomness flows through an explicitly injected PCG32 generator.
//! Given the same configuration, input, and generator state, the output is
//! bit-identical across runs. Use [`create_rng`] to build a generator from
//! a seed and [`derive_stream_seed`] to give independent consumers of one
//! base seed unrelated streams.
//!
//! # Example
//!
//! ```
//! use chromanoise::{AddColoredNoise, AudioBuffer, ColoredNoiseConfig, create_rng};
//!
//! let config = ColoredNoiseConfig::default().with_snr_db(20.0).with_p(1.0);
//! let transform = AddColoredNoise::new(config).unwrap();
//!
//! let signal = AudioBuffer::from_mono(vec![0.1; 1024], 44100);
//! let mut rng = create_rng(42);
//!
//! let noisy = transform.apply(&signal, &mut rng);
//! assert_eq!(noisy.num_samples(), 1024);
//! ```
//!
//! # Crate Structure
//!
//! - [`transform`] - The [`AddColoredNoise`] operator
//! - [`config`] - Sampling ranges and probability gates
//! - [`params`] - Per-invocation sampled parameters
//! - [`spectrum`] - Power-law envelope and A-weighting curve
//! - [`synth`] - Frequency-domain noise synthesis
//! - [`mixer`] - SNR-exact mixing
//! - [`buffer`] - Multichannel sample buffers
//! - [`rng`] - Deterministic generator construction
//! - [`color`] - Conventional noise color presets

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod mixer;
pub mod params;
pub mod rng;
pub mod spectrum;
pub mod synth;
pub mod transform;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use color::NoiseColor;
pub use config::ColoredNoiseConfig;
pub use error::{ConfigError, ConfigResult};
pub use params::InvocationParams;
pub use rng::{create_rng, derive_stream_seed};
pub use transform::AddColoredNoise;
