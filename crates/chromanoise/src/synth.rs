//! Time-domain noise synthesis from a target spectral envelope.
//!
//! Each channel starts from an independent Gaussian white-noise draw. The
//! draw is transformed to the frequency domain, every bin's magnitude is
//! multiplied by the target envelope (leaving phase untouched), and the
//! inverse transform yields the colored noise. Because the envelope gains
//! are real and applied symmetrically to conjugate bin pairs, the spectrum
//! stays Hermitian and the inverse transform is real up to rounding.

use rand::Rng;
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Synthesizes colored noise channels matching a signal's shape.
///
/// The envelope in `shape` spans 0 to Nyquist at its own resolution and is
/// linearly interpolated onto the signal-length transform's bin grid.
/// Channels are uncorrelated; each consumes its own samples from `rng` in
/// sequence, so the result is fully determined by the generator state.
///
/// # Arguments
/// * `shape` - Target amplitude envelope (`n_fft / 2 + 1` points)
/// * `num_samples` - Samples per channel to synthesize
/// * `num_channels` - Number of independent channels
/// * `rng` - Deterministic generator for the white-noise draws
///
/// # Returns
/// Planar noise channels, each of length `num_samples`.
pub fn synthesize_noise(
    shape: &[f64],
    num_samples: usize,
    num_channels: usize,
    rng: &mut Pcg32,
) -> Vec<Vec<f32>> {
    if num_samples == 0 {
        return vec![Vec::new(); num_channels];
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(num_samples);
    let ifft = planner.plan_fft_inverse(num_samples);

    (0..num_channels)
        .map(|_| {
            let mut spectrum: Vec<Complex<f64>> = (0..num_samples)
                .map(|_| Complex::new(rng.sample::<f64, _>(StandardNormal), 0.0))
                .collect();

            fft.process(&mut spectrum);

            // Mirror bins above Nyquist onto their conjugate partners so the
            // same real gain hits both halves of the spectrum.
            let scale_position = (shape.len().saturating_sub(1)) as f64 * 2.0;
            for (k, bin) in spectrum.iter_mut().enumerate() {
                let m = if k <= num_samples / 2 {
                    k
                } else {
                    num_samples - k
                };
                let position = scale_position * m as f64 / num_samples as f64;
                *bin *= sample_envelope(shape, position);
            }

            ifft.process(&mut spectrum);

            spectrum
                .iter()
                .map(|c| (c.re / num_samples as f64) as f32)
                .collect()
        })
        .collect()
}

/// Linearly interpolates the envelope at a fractional bin position.
fn sample_envelope(shape: &[f64], position: f64) -> f64 {
    if shape.len() == 1 {
        return shape[0];
    }

    let max_index = (shape.len() - 1) as f64;
    let clamped = position.clamp(0.0, max_index);
    let index = clamped.floor() as usize;

    if index >= shape.len() - 1 {
        return shape[shape.len() - 1];
    }

    let frac = clamped - index as f64;
    shape[index] + (shape[index + 1] - shape[index]) * frac
}
