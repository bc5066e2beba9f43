//! Color model conversion: hex ↔ RGB ↔ HSL.
//!
//! Hex strings are the boundary format. Input accepts `#RRGGBB` or `RRGGBB`
//! in any case; output is always `#` followed by six lowercase digits.
//!
//! HSL is the working space for palette generation because a lightness ramp
//! is a straight line there. Hue is in degrees `[0, 360)`, saturation and
//! lightness are percentages `[0, 100]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
}

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// Parse a six-digit hex color, with or without the leading `#`.
///
/// Shorthand (`#abc`) and alpha (`#rrggbbaa`) forms are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }

    // All six bytes are ASCII hex digits, so the slices are on char boundaries.
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { r, g, b }),
        _ => Err(ColorError::InvalidColorFormat(hex.to_string())),
    }
}

/// Convert 8-bit RGB channels to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    Hsl {
        h: h * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert HSL (degrees, percent, percent) to a `#rrggbb` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    format!("#{:02x}{:02x}{:02x}", to_channel(r), to_channel(g), to_channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    // =========================================================================
    // hex_to_rgb
    // =========================================================================

    #[test]
    fn parses_hex_with_hash() {
        assert_eq!(hex_to_rgb("#0284c7").unwrap(), Rgb::new(2, 132, 199));
    }

    #[test]
    fn parses_hex_without_hash() {
        assert_eq!(hex_to_rgb("0284c7").unwrap(), Rgb::new(2, 132, 199));
    }

    #[test]
    fn parses_uppercase_hex() {
        assert_eq!(hex_to_rgb("#FFAA00").unwrap(), Rgb::new(255, 170, 0));
    }

    #[test]
    fn rejects_shorthand() {
        assert_eq!(
            hex_to_rgb("#abc"),
            Err(ColorError::InvalidColorFormat("#abc".to_string()))
        );
    }

    #[test]
    fn rejects_alpha_channel() {
        assert!(hex_to_rgb("#0284c7ff").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(hex_to_rgb("#0284cg").is_err());
        assert!(hex_to_rgb("not-a-color").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn rejects_double_hash() {
        assert!(hex_to_rgb("##0284c7").is_err());
    }

    #[test]
    fn rejects_multibyte_input_of_six_bytes() {
        // "ééé" is six bytes but not six hex digits
        assert!(hex_to_rgb("ééé").is_err());
    }

    // =========================================================================
    // rgb_to_hsl
    // =========================================================================

    #[test]
    fn brand_blue_to_hsl() {
        let hsl = rgb_to_hsl(2, 132, 199);
        assert_close(hsl.h, 200.4, 0.1);
        assert_close(hsl.s, 98.0, 0.1);
        assert_close(hsl.l, 39.4, 0.1);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_close(hsl.l, 50.2, 0.1);
    }

    #[test]
    fn primaries_have_expected_hues() {
        assert_close(rgb_to_hsl(255, 0, 0).h, 0.0, 1e-9);
        assert_close(rgb_to_hsl(0, 255, 0).h, 120.0, 1e-9);
        assert_close(rgb_to_hsl(0, 0, 255).h, 240.0, 1e-9);
        assert_close(rgb_to_hsl(255, 0, 255).h, 300.0, 1e-9);
    }

    #[test]
    fn light_colors_use_upper_saturation_branch() {
        // l > 0.5: s = d / (2 - max - min)
        let hsl = rgb_to_hsl(255, 200, 200);
        assert_close(hsl.s, 100.0, 1e-9);
        assert_close(hsl.l, 89.2, 0.1);
    }

    // =========================================================================
    // hsl_to_hex
    // =========================================================================

    #[test]
    fn gray_when_unsaturated() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
        assert_eq!(hsl_to_hex(210.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(210.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn pure_hues() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
    }

    #[test]
    fn output_is_zero_padded_lowercase() {
        let hex = hsl_to_hex(200.0, 100.0, 3.0);
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(
            hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn rgb_display_matches_hex_format() {
        assert_eq!(Rgb::new(2, 132, 199).to_string(), "#0284c7");
    }

    #[test]
    fn round_trip_within_one_per_channel() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let original = Rgb::new(r as u8, g as u8, b as u8);
                    let back = hex_to_rgb(&original.to_hsl().to_hex()).unwrap();
                    for (a, z) in [
                        (original.r, back.r),
                        (original.g, back.g),
                        (original.b, back.b),
                    ] {
                        assert!(a.abs_diff(z) <= 1, "{original} came back as {back}");
                    }
                }
            }
        }
    }
}
