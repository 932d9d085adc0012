//! The colored-noise transform.

use rand_pcg::Pcg32;

use crate::buffer::AudioBuffer;
use crate::config::ColoredNoiseConfig;
use crate::error::ConfigResult;
use crate::mixer::mix_at_snr;
use crate::params::InvocationParams;
use crate::spectrum::build_spectral_shape;
use crate::synth::synthesize_noise;

/// Injects colored noise into an audio signal at a randomly sampled SNR.
///
/// Each invocation draws fresh parameters from the configured ranges: the
/// target SNR, the spectral decay of the noise, whether to A-weight its
/// spectrum, and whether to apply the transform at all. When the
/// probability gate fails the input is returned unchanged.
///
/// The transform holds no mutable state; all randomness comes from the
/// generator passed into [`apply`](Self::apply), so a fixed generator state
/// reproduces the output bit for bit.
#[derive(Debug, Clone)]
pub struct AddColoredNoise {
    config: ColoredNoiseConfig,
}

impl AddColoredNoise {
    /// Creates a transform from a configuration.
    ///
    /// # Errors
    /// Returns a [`ConfigError`](crate::ConfigError) if any bound is
    /// inverted, a probability leaves [0, 1], or `n_fft` is zero. No
    /// partially constructed transform is produced.
    pub fn new(config: ColoredNoiseConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a transform with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ColoredNoiseConfig::default(),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &ColoredNoiseConfig {
        &self.config
    }

    /// Applies the transform to a signal.
    ///
    /// Samples one set of invocation parameters and runs the pipeline.
    /// Returns a new buffer of identical shape and sample rate; the input
    /// is never modified.
    pub fn apply(&self, signal: &AudioBuffer, rng: &mut Pcg32) -> AudioBuffer {
        let params = InvocationParams::sample(&self.config, rng);
        self.apply_with_params(signal, &params, rng)
    }

    /// Applies the transform with pre-sampled parameters.
    ///
    /// Useful when the caller wants to inspect or log the drawn parameters,
    /// or to replay a known set.
    pub fn apply_with_params(
        &self,
        signal: &AudioBuffer,
        params: &InvocationParams,
        rng: &mut Pcg32,
    ) -> AudioBuffer {
        if !params.should_apply {
            return signal.clone();
        }

        let shape = build_spectral_shape(
            params.f_decay,
            params.apply_a_weighting,
            self.config.n_fft,
            signal.sample_rate(),
        );
        let noise = synthesize_noise(
            &shape,
            signal.num_samples(),
            signal.num_channels(),
            rng,
        );

        mix_at_snr(signal, &noise, params.snr_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    fn test_signal() -> AudioBuffer {
        let samples: Vec<f32> = (0..2048)
            .map(|i| (i as f32 * 0.05).sin() * 0.5)
            .collect();
        AudioBuffer::from_mono(samples, 16000)
    }

    #[test]
    fn test_construction_validates_config() {
        let mut config = ColoredNoiseConfig::default();
        config.min_snr_db = 100.0;
        assert!(AddColoredNoise::new(config).is_err());

        assert!(AddColoredNoise::new(ColoredNoiseConfig::default()).is_ok());
    }

    #[test]
    fn test_gate_closed_returns_input_unchanged() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(0.0)).unwrap();
        let signal = test_signal();
        let mut rng = create_rng(42);

        let output = transform.apply(&signal, &mut rng);
        assert_eq!(output, signal);
    }

    #[test]
    fn test_gate_open_changes_signal() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(1.0)).unwrap();
        let signal = test_signal();
        let mut rng = create_rng(42);

        let output = transform.apply(&signal, &mut rng);
        assert_eq!(output.num_samples(), signal.num_samples());
        assert_ne!(output, signal);
    }

    #[test]
    fn test_output_matches_input_shape() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(1.0)).unwrap();
        let signal = AudioBuffer::new(vec![vec![0.25; 777], vec![-0.25; 777]], 44100);
        let mut rng = create_rng(3);

        let output = transform.apply(&signal, &mut rng);
        assert_eq!(output.num_channels(), 2);
        assert_eq!(output.num_samples(), 777);
        assert_eq!(output.sample_rate(), 44100);
    }

    #[test]
    fn test_silent_input_stays_silent() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(1.0)).unwrap();
        let signal = AudioBuffer::from_mono(vec![0.0; 512], 8000);
        let mut rng = create_rng(42);

        let output = transform.apply(&signal, &mut rng);
        assert_eq!(output, signal);
    }

    #[test]
    fn test_reproducible_across_invocations() {
        let transform = AddColoredNoise::with_defaults();
        let signal = test_signal();

        let output1 = transform.apply(&signal, &mut create_rng(1234));
        let output2 = transform.apply(&signal, &mut create_rng(1234));
        assert_eq!(output1, output2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(1.0)).unwrap();
        let signal = test_signal();

        let output1 = transform.apply(&signal, &mut create_rng(1));
        let output2 = transform.apply(&signal, &mut create_rng(2));
        assert_ne!(output1, output2);
    }

    #[test]
    fn test_apply_with_replayed_params() {
        let transform =
            AddColoredNoise::new(ColoredNoiseConfig::default().with_p(1.0)).unwrap();
        let signal = test_signal();

        let params = InvocationParams::sample(transform.config(), &mut create_rng(9));
        let output1 =
            transform.apply_with_params(&signal, &params, &mut create_rng(10));
        let output2 =
            transform.apply_with_params(&signal, &params, &mut create_rng(10));
        assert_eq!(output1, output2);
    }
}
