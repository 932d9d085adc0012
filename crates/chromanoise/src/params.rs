//! Per-invocation parameter sampling.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::ColoredNoiseConfig;

/// The randomized parameters of a single transform invocation.
///
/// Produced fresh for every call and never persisted. All four draws are
/// independent; when `should_apply` is false the remaining fields are still
/// sampled so that the generator advances by the same amount regardless of
/// the gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvocationParams {
    /// Target signal-to-noise ratio in dB.
    pub snr_db: f64,
    /// Spectral decay of the noise in dB/octave.
    pub f_decay: f64,
    /// Whether the A-weighting curve shapes the noise spectrum.
    pub apply_a_weighting: bool,
    /// Whether the transform runs at all for this invocation.
    pub should_apply: bool,
}

impl InvocationParams {
    /// Samples one set of invocation parameters from the configured ranges.
    ///
    /// Uniform draws use inclusive ranges, so degenerate `min == max`
    /// configurations are valid and always yield that value. The config is
    /// assumed validated.
    pub fn sample(config: &ColoredNoiseConfig, rng: &mut Pcg32) -> Self {
        let should_apply = rng.gen_bool(config.p);
        let snr_db = rng.gen_range(config.min_snr_db..=config.max_snr_db);
        let f_decay = rng.gen_range(config.min_f_decay..=config.max_f_decay);
        let apply_a_weighting = rng.gen_bool(config.p_apply_a_weighting);

        Self {
            snr_db,
            f_decay,
            apply_a_weighting,
            should_apply,
        }
    }
}
