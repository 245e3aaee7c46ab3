//! The [`Color`] value object and its single construction pipeline.
//!
//! validate → normalize → decode RGB → derive HSL. Construction is
//! all-or-nothing; a failed step never yields a partial color.

pub mod hex;
pub mod hsl;

use std::fmt;

use serde::Serialize;

pub use hex::{is_valid_hex_code, normalize_hex_code, rgb_from_hex_code};
pub use hsl::hsl_from_rgb;


/// Error returned by [`Color::from_hex_code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex code with optional `#`.
    #[error("You must specify a valid hex color")]
    Validation,
    /// A two-digit channel group of the canonical code is not base-16.
    #[error("invalid hex channel `{group}`")]
    Decode { group: String },
}

/// An immutable color with its canonical hex code and derived channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    #[serde(rename = "hex")]
    hex_code: String,
    rgb: Rgb,
    hsl: Hsl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Color {
    /// Build a color from `#rgb`, `rgb`, `#rrggbb`, or `rrggbb` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] when the input does not match the
    /// hex pattern and [`ColorError::Decode`] if a channel fails to decode.
    pub fn from_hex_code(input: &str) -> Result<Self, ColorError> {
        if !is_valid_hex_code(input) {
            tracing::debug!(input, "rejected hex color");
            return Err(ColorError::Validation);
        }

        let hex_code = normalize_hex_code(input);
        let (red, green, blue) = rgb_from_hex_code(&hex_code)?;
        let (hue, saturation, lightness) = hsl_from_rgb(red, green, blue);
        tracing::debug!(
            input,
            %hex_code,
            red,
            green,
            blue,
            hue,
            saturation,
            lightness,
            "derived color"
        );

        Ok(Self {
            hex_code,
            rgb: Rgb { red, green, blue },
            hsl: Hsl { hue, saturation, lightness },
        })
    }

    /// Canonical lowercase `#rrggbb` code.
    #[must_use]
    pub fn hex_code(&self) -> &str {
        &self.hex_code
    }

    #[must_use]
    pub fn red(&self) -> u8 {
        self.rgb.red
    }

    #[must_use]
    pub fn green(&self) -> u8 {
        self.rgb.green
    }

    #[must_use]
    pub fn blue(&self) -> u8 {
        self.rgb.blue
    }

    /// Hue in degrees, `0..360`.
    #[must_use]
    pub fn hue(&self) -> u16 {
        self.hsl.hue
    }

    /// Saturation percentage, `0..=100`.
    #[must_use]
    pub fn saturation(&self) -> u8 {
        self.hsl.saturation
    }

    /// Lightness percentage, `0..=100`.
    #[must_use]
    pub fn lightness(&self) -> u8 {
        self.hsl.lightness
    }
}

/// Three-line report: `hex:`, `rgb:`, and `hsl:`, each newline-terminated.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { red, green, blue } = self.rgb;
        let Hsl { hue, saturation, lightness } = self.hsl;
        writeln!(f, "hex: {}", self.hex_code)?;
        writeln!(f, "rgb: {red}, {green}, {blue}")?;
        writeln!(f, "hsl: {hue}°, {saturation}%, {lightness}%")
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_code(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex_code(value)
    }
}
