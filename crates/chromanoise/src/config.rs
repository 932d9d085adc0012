//! Transform configuration.
//!
//! [`ColoredNoiseConfig`] holds the sampling ranges and probabilities for one
//! transform instance. It is created once, validated at transform
//! construction, and never mutated afterwards. Configs round-trip through
//! JSON; missing fields take the documented defaults and unknown fields are
//! rejected.

use serde::{Deserialize, Serialize};

use crate::error::{validate_finite, validate_unit_interval, ConfigError, ConfigResult};

/// Configuration for the colored-noise transform.
///
/// All per-invocation randomness is drawn from the ranges configured here:
/// the target SNR in decibels, the spectral decay in dB/octave, and the two
/// probability gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColoredNoiseConfig {
    /// Lower bound of the sampled signal-to-noise ratio in dB.
    #[serde(default = "default_min_snr_db")]
    pub min_snr_db: f64,
    /// Upper bound of the sampled signal-to-noise ratio in dB.
    #[serde(default = "default_max_snr_db")]
    pub max_snr_db: f64,
    /// Lower bound of the sampled spectral decay in dB/octave.
    ///
    /// Negative values tilt the noise toward low frequencies (pink, brown),
    /// positive values toward high frequencies (blue, violet).
    #[serde(default = "default_min_f_decay")]
    pub min_f_decay: f64,
    /// Upper bound of the sampled spectral decay in dB/octave.
    #[serde(default = "default_max_f_decay")]
    pub max_f_decay: f64,
    /// Probability of applying the transform at all.
    #[serde(default = "default_p")]
    pub p: f64,
    /// Probability of additionally shaping the noise with the A-weighting
    /// curve.
    #[serde(default = "default_p_apply_a_weighting")]
    pub p_apply_a_weighting: f64,
    /// Resolution of the target spectral curve (number of points is
    /// `n_fft / 2 + 1`).
    #[serde(default = "default_n_fft")]
    pub n_fft: usize,
}

fn default_min_snr_db() -> f64 {
    5.0
}

fn default_max_snr_db() -> f64 {
    40.0
}

fn default_min_f_decay() -> f64 {
    -6.0
}

fn default_max_f_decay() -> f64 {
    6.0
}

fn default_p() -> f64 {
    0.5
}

fn default_p_apply_a_weighting() -> f64 {
    0.0
}

fn default_n_fft() -> usize {
    128
}

impl Default for ColoredNoiseConfig {
    fn default() -> Self {
        Self {
            min_snr_db: default_min_snr_db(),
            max_snr_db: default_max_snr_db(),
            min_f_decay: default_min_f_decay(),
            max_f_decay: default_max_f_decay(),
            p: default_p(),
            p_apply_a_weighting: default_p_apply_a_weighting(),
            n_fft: default_n_fft(),
        }
    }
}

impl ColoredNoiseConfig {
    /// Validates all bounds and probabilities.
    ///
    /// # Returns
    /// `Ok(())` if the configuration is usable, or the first violated
    /// constraint otherwise.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_finite("min_snr_db", self.min_snr_db)?;
        validate_finite("max_snr_db", self.max_snr_db)?;
        validate_finite("min_f_decay", self.min_f_decay)?;
        validate_finite("max_f_decay", self.max_f_decay)?;

        if self.min_snr_db > self.max_snr_db {
            return Err(ConfigError::inverted_range(
                "snr_db",
                self.min_snr_db,
                self.max_snr_db,
            ));
        }
        if self.min_f_decay > self.max_f_decay {
            return Err(ConfigError::inverted_range(
                "f_decay",
                self.min_f_decay,
                self.max_f_decay,
            ));
        }

        validate_unit_interval("p", self.p)?;
        validate_unit_interval("p_apply_a_weighting", self.p_apply_a_weighting)?;

        if self.n_fft == 0 {
            return Err(ConfigError::ZeroFftSize);
        }

        Ok(())
    }

    /// Fixes both SNR bounds to a single value.
    pub fn with_snr_db(mut self, snr_db: f64) -> Self {
        self.min_snr_db = snr_db;
        self.max_snr_db = snr_db;
        self
    }

    /// Fixes both decay bounds to a single value.
    pub fn with_f_decay(mut self, f_decay: f64) -> Self {
        self.min_f_decay = f_decay;
        self.max_f_decay = f_decay;
        self
    }

    /// Sets the apply probability.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Sets the A-weighting probability.
    pub fn with_p_apply_a_weighting(mut self, p: f64) -> Self {
        self.p_apply_a_weighting = p;
        self
    }
}
