//! Palette generation: one brand color → eleven shades.
//!
//! The ramp shape is fixed by [`Shade::lightness`]. Each shade keeps the
//! base hue, takes its target lightness from the table, and adjusts the
//! base saturation:
//!
//! | Target lightness | Saturation |
//! |------------------|------------|
//! | above 70 | `max(10, 0.8 × S)` |
//! | below 30 | `min(100, 1.1 × S)` |
//! | otherwise | `S` |
//!
//! [`generate_palette`] never fails: an unparsable base color logs a warning
//! and yields the palette of [`FALLBACK_COLOR`]. Callers that want to see the
//! error use [`try_generate_palette`].

use crate::colors::{self, ColorError, Rgb};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Brand color used when the requested base color cannot be parsed.
pub const FALLBACK_COLOR: &str = "#0284c7";
const FALLBACK_RGB: Rgb = Rgb::new(0x02, 0x84, 0xc7);

/// One rung of the palette, lightest (`S50`) to darkest (`S950`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades in canonical order.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
            Shade::S950 => "950",
        }
    }

    /// Target HSL lightness (percent).
    pub const fn lightness(self) -> f64 {
        match self {
            Shade::S50 => 95.0,
            Shade::S100 => 90.0,
            Shade::S200 => 80.0,
            Shade::S300 => 70.0,
            Shade::S400 => 60.0,
            Shade::S500 => 50.0,
            Shade::S600 => 40.0,
            Shade::S700 => 30.0,
            Shade::S800 => 22.0,
            Shade::S900 => 15.0,
            Shade::S950 => 8.0,
        }
    }

    pub fn from_key(key: &str) -> Option<Shade> {
        Shade::ALL.into_iter().find(|s| s.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Saturation for a shade of the given target lightness.
pub fn adjusted_saturation(base_saturation: f64, lightness: f64) -> f64 {
    if lightness > 70.0 {
        (base_saturation * 0.8).max(10.0)
    } else if lightness < 30.0 {
        (base_saturation * 1.1).min(100.0)
    } else {
        base_saturation
    }
}

/// Eleven hex colors, one per [`Shade`].
///
/// Serializes as an ordered map from shade key to color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 11],
}

impl Palette {
    pub fn get(&self, shade: Shade) -> &str {
        &self.colors[shade.index()]
    }

    /// Shades with their colors, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::ALL.into_iter().zip(self.colors.iter().map(String::as_str))
    }

    /// Replace one shade with an explicit color.
    #[must_use]
    pub fn with_override(mut self, shade: Shade, hex: impl Into<String>) -> Self {
        self.colors[shade.index()] = hex.into();
        self
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(shade.key(), color)?;
        }
        map.end()
    }
}

/// Generate a palette, surfacing an unparsable base color as an error.
pub fn try_generate_palette(base_color: &str) -> Result<Palette, ColorError> {
    let rgb = colors::hex_to_rgb(base_color)?;
    Ok(palette_from_rgb(rgb))
}

/// Generate a palette, falling back to [`FALLBACK_COLOR`] on invalid input.
pub fn generate_palette(base_color: &str) -> Palette {
    match try_generate_palette(base_color) {
        Ok(palette) => palette,
        Err(err) => {
            tracing::warn!("{err}, using default {FALLBACK_COLOR}");
            palette_from_rgb(FALLBACK_RGB)
        }
    }
}

fn palette_from_rgb(rgb: Rgb) -> Palette {
    let base = rgb.to_hsl();
    tracing::debug!(
        "palette base {rgb}: h={:.1} s={:.1} l={:.1}",
        base.h,
        base.s,
        base.l
    );

    let colors = Shade::ALL.map(|shade| {
        let lightness = shade.lightness();
        colors::hsl_to_hex(
            base.h,
            adjusted_saturation(base.s, lightness),
            lightness,
        )
    });
    Palette { colors }
}
