//! Params command implementation.
//!
//! Samples the invocation parameters a seed/config pair would draw and
//! prints them as JSON, without touching any audio. Useful for debugging
//! augmentation schedules.

use anyhow::{Context, Result};
use std::process::ExitCode;

use chromanoise::{create_rng, AddColoredNoise, InvocationParams};

use super::ConfigArgs;

/// Runs the params command.
pub fn run(seed: u32, config_args: &ConfigArgs) -> Result<ExitCode> {
    let config = config_args.resolve()?;
    let transform = AddColoredNoise::new(config).context("invalid configuration")?;

    let mut rng = create_rng(seed);
    let params = InvocationParams::sample(transform.config(), &mut rng);

    println!(
        "{}",
        serde_json::to_string_pretty(&params).context("failed to serialize parameters")?
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_runs_with_defaults() {
        let args = ConfigArgs::default();
        assert!(run(0, &args).is_ok());
    }

    #[test]
    fn test_params_rejects_invalid_config() {
        let args = ConfigArgs {
            n_fft: Some(0),
            ..Default::default()
        };
        assert!(run(0, &args).is_err());
    }
}
