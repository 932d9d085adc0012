//! Target spectral shape construction.
//!
//! The noise spectrum is described by a power-law decay in dB/octave,
//! optionally multiplied by the IEC 61672 A-weighting gain curve. The shape
//! produced here is a pure amplitude envelope; energy normalization happens
//! later, when the noise is scaled against the signal to hit the target SNR.

/// Decibels of power change per octave for a power spectral density of f^1.
///
/// A density `P(f) = f^beta` changes by `beta * 10 * log10(2)` dB per
/// octave, so `beta = decay / DB_PER_OCTAVE_PER_EXPONENT`.
const DB_PER_OCTAVE_PER_EXPONENT: f64 = 3.010_299_956_639_812;

/// Converts a decay in dB/octave to the power-law exponent `beta`.
pub fn decay_to_exponent(f_decay_db_per_octave: f64) -> f64 {
    f_decay_db_per_octave / DB_PER_OCTAVE_PER_EXPONENT
}

/// Builds the target amplitude envelope for the noise spectrum.
///
/// The envelope is evaluated at `n_fft / 2 + 1` linearly spaced frequencies
/// from 0 to Nyquist. For a decay `d` the amplitude response is
/// `H(f) = f^(beta / 2)` with `beta = d / (10 log10 2)`; the singular DC
/// point takes the value of the first nonzero bin so the envelope stays
/// finite for negative decays and nonzero for positive ones.
///
/// # Arguments
/// * `f_decay_db_per_octave` - Spectral decay of the noise power
/// * `apply_a_weighting` - Multiply the envelope by the A-weighting gain
/// * `n_fft` - Resolution of the curve (must be nonzero)
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// A vector of `n_fft / 2 + 1` non-negative finite magnitudes.
pub fn build_spectral_shape(
    f_decay_db_per_octave: f64,
    apply_a_weighting: bool,
    n_fft: usize,
    sample_rate: u32,
) -> Vec<f64> {
    let num_bins = n_fft / 2 + 1;
    let nyquist = sample_rate as f64 / 2.0;
    let half_exponent = decay_to_exponent(f_decay_db_per_octave) / 2.0;

    let bin_freq = |k: usize| -> f64 {
        if num_bins > 1 {
            nyquist * k as f64 / (num_bins - 1) as f64
        } else {
            0.0
        }
    };

    let mut shape: Vec<f64> = (0..num_bins)
        .map(|k| {
            if k == 0 {
                // Singular at DC. Reuse the first nonzero bin's value.
                bin_freq(1)
            } else {
                bin_freq(k)
            }
        })
        .map(|f| if f > 0.0 { f.powf(half_exponent) } else { 1.0 })
        .collect();

    if apply_a_weighting {
        for (k, value) in shape.iter_mut().enumerate() {
            *value *= a_weighting_gain(bin_freq(k));
        }
    }

    shape
}

/// The A-weighting amplitude gain at a frequency, normalized to 1 at 1 kHz.
///
/// Analytic form of the IEC 61672 weighting expressed as a linear gain.
/// The gain is 0 at DC and rolls off both the low end and the very high
/// end of the audible range.
pub fn a_weighting_gain(freq_hz: f64) -> f64 {
    raw_a_weighting(freq_hz) / raw_a_weighting(1000.0)
}

fn raw_a_weighting(f: f64) -> f64 {
    const C1: f64 = 20.6;
    const C2: f64 = 107.7;
    const C3: f64 = 737.9;
    const C4: f64 = 12194.0;

    let f2 = f * f;
    let numerator = C4 * C4 * f2 * f2;
    let denominator =
        (f2 + C1 * C1) * ((f2 + C2 * C2) * (f2 + C3 * C3)).sqrt() * (f2 + C4 * C4);

    numerator / denominator
}
