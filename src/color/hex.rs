//! Hex code validation, canonicalization, and channel decoding.

use std::sync::LazyLock;

use regex::Regex;

use super::ColorError;

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

static HEX_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{3}([0-9a-fA-F]{3})?$").expect("valid regex"));

/// Check `#rgb`, `rgb`, `#rrggbb`, or `rrggbb` (any case) with nothing else around it.
#[must_use]
pub fn is_valid_hex_code(input: &str) -> bool {
    HEX_CODE_RE.is_match(input)
}

/// Normalize an already-validated code to canonical lowercase `#rrggbb`.
///
/// Shorthand digits are doubled, so `a1f` becomes `#aa11ff`. The input is
/// assumed to have passed [`is_valid_hex_code`].
#[must_use]
pub fn normalize_hex_code(input: &str) -> String {
    let digits = input.strip_prefix('#').unwrap_or(input).to_ascii_lowercase();

    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.len() == 3 {
        for ch in digits.chars() {
            out.push(ch);
            out.push(ch);
        }
    } else {
        out.push_str(&digits);
    }
    out
}

/// Decode a canonical `#rrggbb` code into its red, green, and blue channels.
///
/// # Errors
///
/// Returns [`ColorError::Decode`] when a two-digit group is missing or is
/// not base-16.
pub fn rgb_from_hex_code(canonical: &str) -> Result<(u8, u8, u8), ColorError> {
    let red = decode_group(canonical, 1..3)?;
    let green = decode_group(canonical, 3..5)?;
    let blue = decode_group(canonical, 5..7)?;
    Ok((red, green, blue))
}

fn decode_group(canonical: &str, range: std::ops::Range<usize>) -> Result<u8, ColorError> {
    let group = canonical.get(range).unwrap_or_default();
    let decode_error = || ColorError::Decode { group: group.to_owned() };

    // from_str_radix tolerates a leading `+`; a group is exactly two digits.
    if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(decode_error());
    }
    u8::from_str_radix(group, 16).map_err(|_| decode_error())
}
