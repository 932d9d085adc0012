//! SNR-controlled mixing of signal and noise.

use crate::buffer::AudioBuffer;

/// Mean power of a set of planar channels, pooled over all samples.
pub fn mean_power(channels: &[Vec<f32>]) -> f64 {
    let total: usize = channels.iter().map(Vec::len).sum();
    if total == 0 {
        return 0.0;
    }

    let sum: f64 = channels
        .iter()
        .flat_map(|ch| ch.iter())
        .map(|&s| (s as f64) * (s as f64))
        .sum();

    sum / total as f64
}

/// The noise amplitude scale that realizes a target SNR.
///
/// Chosen so that `10 log10(signal_power / (a^2 * noise_power))` equals
/// `snr_db`. When either power is zero the ratio is undefined; the factor
/// falls back to 0 so degenerate inputs pass through without noise rather
/// than producing non-finite samples.
pub fn snr_scale_factor(signal_power: f64, noise_power: f64, snr_db: f64) -> f64 {
    if signal_power <= 0.0 || noise_power <= 0.0 {
        return 0.0;
    }

    (signal_power / (noise_power * 10f64.powf(snr_db / 10.0))).sqrt()
}

/// Mixes noise into a signal at the requested SNR.
///
/// Powers are pooled over all channels, so one scale factor applies to the
/// whole invocation and the realized global SNR matches the target exactly.
/// The sum is not clipped or renormalized.
///
/// # Arguments
/// * `signal` - The input buffer
/// * `noise` - Planar noise channels matching the signal's shape
/// * `snr_db` - Target signal-to-noise ratio in dB
///
/// # Returns
/// A new buffer of identical shape and sample rate.
pub fn mix_at_snr(signal: &AudioBuffer, noise: &[Vec<f32>], snr_db: f64) -> AudioBuffer {
    debug_assert_eq!(signal.num_channels(), noise.len());

    let scale = snr_scale_factor(mean_power(signal.channels()), mean_power(noise), snr_db);

    let mixed: Vec<Vec<f32>> = signal
        .channels()
        .iter()
        .zip(noise)
        .map(|(signal_ch, noise_ch)| {
            debug_assert_eq!(signal_ch.len(), noise_ch.len());
            signal_ch
                .iter()
                .zip(noise_ch)
                .map(|(&x, &n)| (x as f64 + scale * n as f64) as f32)
                .collect()
        })
        .collect();

    AudioBuffer::new(mixed, signal.sample_rate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mean_power() {
        assert_eq!(mean_power(&[vec![1.0, -1.0, 1.0, -1.0]]), 1.0);
        assert_eq!(mean_power(&[vec![0.5, 0.5], vec![0.5, 0.5]]), 0.25);
        assert_eq!(mean_power(&[vec![]]), 0.0);
        assert_eq!(mean_power(&[]), 0.0);
    }

    #[test]
    fn test_scale_factor_at_zero_db() {
        // Equal powers and 0 dB target leave the noise untouched
        assert!((snr_scale_factor(1.0, 1.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_factor_tracks_target() {
        // 20 dB target with equal powers attenuates amplitude by 10x
        let scale = snr_scale_factor(1.0, 1.0, 20.0);
        assert!((scale - 0.1).abs() < 1e-12);

        // Quieter noise gets boosted to reach the same ratio
        let scale = snr_scale_factor(1.0, 0.01, 20.0);
        assert!((scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_factor_degenerate_inputs() {
        assert_eq!(snr_scale_factor(0.0, 1.0, 10.0), 0.0);
        assert_eq!(snr_scale_factor(1.0, 0.0, 10.0), 0.0);
        assert_eq!(snr_scale_factor(0.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_mix_realizes_target_snr() {
        let signal = AudioBuffer::from_mono(vec![0.5; 1000], 16000);
        let noise = vec![vec![0.25; 1000]];

        let mixed = mix_at_snr(&signal, &noise, 6.0);

        let added: Vec<f32> = mixed
            .channel(0)
            .iter()
            .zip(signal.channel(0))
            .map(|(&m, &x)| m - x)
            .collect();
        let realized_db =
            10.0 * (mean_power(signal.channels()) / mean_power(&[added])).log10();

        assert!((realized_db - 6.0).abs() < 0.01, "realized {realized_db}");
    }

    #[test]
    fn test_mix_preserves_shape_and_rate() {
        let signal = AudioBuffer::new(vec![vec![0.1; 64], vec![0.2; 64]], 22050);
        let noise = vec![vec![0.01; 64], vec![0.02; 64]];

        let mixed = mix_at_snr(&signal, &noise, 30.0);
        assert_eq!(mixed.num_channels(), 2);
        assert_eq!(mixed.num_samples(), 64);
        assert_eq!(mixed.sample_rate(), 22050);
    }

    #[test]
    fn test_silent_signal_passes_through() {
        let signal = AudioBuffer::from_mono(vec![0.0; 100], 8000);
        let noise = vec![vec![1.0; 100]];

        let mixed = mix_at_snr(&signal, &noise, 10.0);
        assert_eq!(mixed.channel(0), signal.channel(0));
    }

    #[test]
    fn test_silent_noise_passes_through() {
        let signal = AudioBuffer::from_mono(vec![0.3; 100], 8000);
        let noise = vec![vec![0.0; 100]];

        let mixed = mix_at_snr(&signal, &noise, 10.0);
        assert_eq!(mixed.channel(0), signal.channel(0));
    }
}
