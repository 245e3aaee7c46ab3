//! RGB to HSL derivation.
//!
//! Results are truncated to integers rather than rounded, and the
//! saturation branch looks at the truncated lightness. Both are kept so
//! published outputs stay bit-exact (`#abc123` is `68°, 69%, 44%`).

#[cfg(test)]
#[path = "hsl_test.rs"]
mod hsl_test;

/// Tolerance when deciding which channel holds the maximum.
const MAX_CHANNEL_EPSILON: f64 = 1e-10;

/// Derive `(hue, saturation, lightness)` from 8-bit channels.
///
/// Hue is in degrees, `0..360`. Saturation and lightness are percentages,
/// `0..=100`. Achromatic inputs (all channels equal) yield zero hue and
/// saturation.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_from_rgb(red: u8, green: u8, blue: u8) -> (u16, u8, u8) {
    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;

    let min_c = r.min(g).min(b);
    let max_c = r.max(g).max(b);
    let span = max_c - min_c;

    let lightness = ((max_c + min_c) / 0.02) as i32;
    let mut hue = 0_i32;
    let mut saturation = 0_i32;

    if span > 0.0 {
        saturation = if lightness < 50 {
            (100.0 * span / (max_c + min_c)) as i32
        } else {
            (100.0 * (2.0 - max_c - min_c)) as i32
        };

        hue = if (r - max_c).abs() < MAX_CHANNEL_EPSILON {
            (60.0 * (((g - b) / span) % 6.0)) as i32
        } else if (g - max_c).abs() < MAX_CHANNEL_EPSILON {
            (60.0 * (((b - r) / span) + 2.0)) as i32
        } else {
            (60.0 * (((r - g) / span) + 4.0)) as i32
        };
    }
    if hue < 0 {
        hue += 360;
    }

    (
        hue.clamp(0, 359) as u16,
        saturation.clamp(0, 100) as u8,
        lightness.clamp(0, 100) as u8,
    )
}
