//! Shared transform-configuration flags.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use chromanoise::{ColoredNoiseConfig, NoiseColor};

/// Flags that assemble a [`ColoredNoiseConfig`].
///
/// A JSON config file provides the base (otherwise the documented
/// defaults); individual flags override single fields on top of it.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON transform configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower SNR bound in dB
    #[arg(long)]
    pub min_snr_db: Option<f64>,

    /// Upper SNR bound in dB
    #[arg(long)]
    pub max_snr_db: Option<f64>,

    /// Fix the SNR to a single value in dB
    #[arg(long, conflicts_with_all = ["min_snr_db", "max_snr_db"])]
    pub snr_db: Option<f64>,

    /// Lower spectral decay bound in dB/octave
    #[arg(long)]
    pub min_f_decay: Option<f64>,

    /// Upper spectral decay bound in dB/octave
    #[arg(long)]
    pub max_f_decay: Option<f64>,

    /// Fix the spectral decay in dB/octave
    #[arg(long, conflicts_with_all = ["min_f_decay", "max_f_decay"])]
    pub f_decay: Option<f64>,

    /// Fix the spectral decay to a named color preset
    #[arg(long, conflicts_with_all = ["min_f_decay", "max_f_decay", "f_decay"])]
    pub color: Option<NoiseColor>,

    /// Probability of applying the transform
    #[arg(long)]
    pub p: Option<f64>,

    /// Probability of A-weighting the noise spectrum
    #[arg(long)]
    pub p_apply_a_weighting: Option<f64>,

    /// Spectral curve resolution
    #[arg(long)]
    pub n_fft: Option<usize>,
}

impl ConfigArgs {
    /// Resolves the flags into a configuration (not yet validated).
    pub fn resolve(&self) -> Result<ColoredNoiseConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid config in {}", path.display()))?
            }
            None => ColoredNoiseConfig::default(),
        };

        if let Some(v) = self.min_snr_db {
            config.min_snr_db = v;
        }
        if let Some(v) = self.max_snr_db {
            config.max_snr_db = v;
        }
        if let Some(v) = self.snr_db {
            config = config.with_snr_db(v);
        }
        if let Some(v) = self.min_f_decay {
            config.min_f_decay = v;
        }
        if let Some(v) = self.max_f_decay {
            config.max_f_decay = v;
        }
        if let Some(v) = self.f_decay {
            config = config.with_f_decay(v);
        }
        if let Some(color) = self.color {
            config = config.with_f_decay(color.decay_db_per_octave());
        }
        if let Some(v) = self.p {
            config.p = v;
        }
        if let Some(v) = self.p_apply_a_weighting {
            config.p_apply_a_weighting = v;
        }
        if let Some(v) = self.n_fft {
            config.n_fft = v;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let args = ConfigArgs::default();
        assert_eq!(args.resolve().unwrap(), ColoredNoiseConfig::default());
    }

    #[test]
    fn test_flag_overrides() {
        let args = ConfigArgs {
            snr_db: Some(20.0),
            color: Some(NoiseColor::Brown),
            p: Some(1.0),
            ..Default::default()
        };

        let config = args.resolve().unwrap();
        assert_eq!(config.min_snr_db, 20.0);
        assert_eq!(config.max_snr_db, 20.0);
        assert_eq!(config.min_f_decay, -6.02);
        assert_eq!(config.max_f_decay, -6.02);
        assert_eq!(config.p, 1.0);
    }

    #[test]
    fn test_config_file_plus_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"min_snr_db": 0.0, "max_snr_db": 10.0, "p": 0.25}}"#).unwrap();

        let args = ConfigArgs {
            config: Some(path),
            p: Some(0.75),
            ..Default::default()
        };

        let config = args.resolve().unwrap();
        assert_eq!(config.min_snr_db, 0.0);
        assert_eq!(config.max_snr_db, 10.0);
        assert_eq!(config.p, 0.75);
    }

    #[test]
    fn test_bad_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"colour": "pink"}"#).unwrap();

        let args = ConfigArgs {
            config: Some(path),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}
