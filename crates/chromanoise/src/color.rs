//! Conventional noise color presets.
//!
//! The transform is parameterized by a raw spectral decay in dB/octave, not
//! by color names. These constants document the conventional decay values,
//! and [`NoiseColor`] offers a name-to-decay mapping for front ends that
//! want to expose the familiar vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Flat spectrum.
pub const WHITE_DB_PER_OCTAVE: f64 = 0.0;
/// Pink noise, equal energy per octave.
pub const PINK_DB_PER_OCTAVE: f64 = -3.01;
/// Brown (Brownian, red) noise.
pub const BROWN_DB_PER_OCTAVE: f64 = -6.02;
/// Blue (azure) noise.
pub const BLUE_DB_PER_OCTAVE: f64 = 3.01;
/// Violet noise.
pub const VIOLET_DB_PER_OCTAVE: f64 = 6.02;

/// Named noise color presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseColor {
    /// Equal energy at all frequencies (0 dB/octave).
    White,
    /// 1/f power spectrum (-3.01 dB/octave).
    Pink,
    /// 1/f^2 power spectrum (-6.02 dB/octave).
    Brown,
    /// f power spectrum (+3.01 dB/octave).
    Blue,
    /// f^2 power spectrum (+6.02 dB/octave).
    Violet,
}

impl NoiseColor {
    /// The conventional spectral decay for this color in dB/octave.
    pub fn decay_db_per_octave(self) -> f64 {
        match self {
            NoiseColor::White => WHITE_DB_PER_OCTAVE,
            NoiseColor::Pink => PINK_DB_PER_OCTAVE,
            NoiseColor::Brown => BROWN_DB_PER_OCTAVE,
            NoiseColor::Blue => BLUE_DB_PER_OCTAVE,
            NoiseColor::Violet => VIOLET_DB_PER_OCTAVE,
        }
    }

    /// All recognized colors.
    pub fn all() -> [NoiseColor; 5] {
        [
            NoiseColor::White,
            NoiseColor::Pink,
            NoiseColor::Brown,
            NoiseColor::Blue,
            NoiseColor::Violet,
        ]
    }
}

impl fmt::Display for NoiseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoiseColor::White => "white",
            NoiseColor::Pink => "pink",
            NoiseColor::Brown => "brown",
            NoiseColor::Blue => "blue",
            NoiseColor::Violet => "violet",
        };
        f.write_str(name)
    }
}

impl FromStr for NoiseColor {
    type Err = String;

    /// Parses a color name, accepting the common aliases "red", "brownian"
    /// and "azure".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(NoiseColor::White),
            "pink" => Ok(NoiseColor::Pink),
            "brown" | "brownian" | "red" => Ok(NoiseColor::Brown),
            "blue" | "azure" => Ok(NoiseColor::Blue),
            "violet" => Ok(NoiseColor::Violet),
            other => Err(format!(
                "unknown noise color '{other}' (expected white, pink, brown, blue, or violet)"
            )),
        }
    }
}
