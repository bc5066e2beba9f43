//! Theme CSS emission.
//!
//! Palettes become CSS custom properties named `--color-{prefix}-{shade}`,
//! one declaration per line, lines joined by a newline plus four spaces so
//! the block drops straight into a `:root { … }` rule:
//!
//! ```text
//! --color-primary-50: #e8f5fc;
//!     --color-primary-100: #d2ecf9;
//!     ...
//! ```
//!
//! Prefixes are not validated; callers pass identifiers legal in a CSS
//! custom-property name.

use crate::colors;
use crate::palette::{self, Palette, Shade};
use crate::types::{ColorPalette, ThemeConfig};
use serde::{Deserialize, Serialize};

/// Separator between emitted declarations.
pub const DECLARATION_SEPARATOR: &str = "\n    ";

/// Fallback stack appended after a configured font family.
pub const FONT_FALLBACK_STACK: &str =
    r#"ui-sans-serif, system-ui, sans-serif, "Apple Color Emoji", "Segoe UI Emoji""#;

/// Border radius presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderRadius {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

/// Radius preset name → CSS length.
pub const BORDER_RADIUS_VALUES: [(&str, &str); 6] = [
    ("none", "0"),
    ("sm", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("full", "9999px"),
];

impl BorderRadius {
    pub fn name(self) -> &'static str {
        BORDER_RADIUS_VALUES[self as usize].0
    }

    pub fn css_value(self) -> &'static str {
        BORDER_RADIUS_VALUES[self as usize].1
    }
}

/// Color mode the page starts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        }
    }
}

/// Render a palette as custom-property declarations, lightest shade first.
pub fn palette_to_css(palette: &Palette, prefix: &str) -> String {
    palette
        .iter()
        .map(|(shade, color)| format!("--color-{prefix}-{shade}: {color};"))
        .collect::<Vec<_>>()
        .join(DECLARATION_SEPARATOR)
}

/// `--font-sans` declaration for a font family.
///
/// The family is written as a CSS string: quotes and backslashes are
/// escaped, and `<` and line breaks are dropped so the value cannot close
/// the surrounding `<style>` element.
pub fn font_declaration(font_family: &str) -> String {
    let mut family = String::with_capacity(font_family.len());
    for c in font_family.chars() {
        match c {
            '"' | '\\' => {
                family.push('\\');
                family.push(c);
            }
            '<' | '\n' | '\r' => {}
            _ => family.push(c),
        }
    }
    format!(r#"--font-sans: "{family}", {FONT_FALLBACK_STACK};"#)
}

/// Declarations for a primary color, an optional accent and an optional font.
///
/// Invalid colors fall back as described in [`palette::generate_palette`].
/// Empty strings count as absent.
pub fn generate_theme_css(
    primary_color: &str,
    accent_color: Option<&str>,
    font_family: Option<&str>,
) -> String {
    let primary = palette::generate_palette(primary_color);
    let accent = non_empty(accent_color).map(palette::generate_palette);
    theme_declarations(&primary, accent.as_ref(), non_empty(font_family))
}

fn theme_declarations(primary: &Palette, accent: Option<&Palette>, font: Option<&str>) -> String {
    let mut css = palette_to_css(primary, "primary");
    if let Some(accent) = accent {
        css.push_str(DECLARATION_SEPARATOR);
        css.push_str(&palette_to_css(accent, "accent"));
    }
    if let Some(font) = font {
        css.push_str(DECLARATION_SEPARATOR);
        css.push_str(&font_declaration(font));
    }
    css
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ColorPalette {
    /// Shades as written in the content file, `500` included.
    pub fn explicit_shades(&self) -> [(Shade, Option<&str>); 11] {
        [
            (Shade::S50, self.shade_50.as_deref()),
            (Shade::S100, self.shade_100.as_deref()),
            (Shade::S200, self.shade_200.as_deref()),
            (Shade::S300, self.shade_300.as_deref()),
            (Shade::S400, self.shade_400.as_deref()),
            (Shade::S500, Some(self.shade_500.as_str())),
            (Shade::S600, self.shade_600.as_deref()),
            (Shade::S700, self.shade_700.as_deref()),
            (Shade::S800, self.shade_800.as_deref()),
            (Shade::S900, self.shade_900.as_deref()),
            (Shade::S950, self.shade_950.as_deref()),
        ]
    }

    /// Full palette: generated from `500`, then explicit shades applied.
    ///
    /// Explicit shades are normalized to lowercase `#rrggbb`. An unparsable
    /// shade keeps its generated color.
    pub fn resolve(&self) -> Palette {
        let base = palette::generate_palette(&self.shade_500);
        self.explicit_shades()
            .into_iter()
            .fold(base, |palette, (shade, color)| {
                let Some(color) = color else {
                    return palette;
                };
                match colors::hex_to_rgb(color) {
                    Ok(rgb) => palette.with_override(shade, rgb.to_string()),
                    Err(err) => {
                        tracing::warn!("shade {shade}: {err}, keeping generated color");
                        palette
                    }
                }
            })
    }
}

impl ThemeConfig {
    pub fn primary(&self) -> Palette {
        match &self.primary_palette {
            Some(explicit) => explicit.resolve(),
            None => palette::generate_palette(&self.primary_color),
        }
    }

    pub fn accent(&self) -> Option<Palette> {
        match (&self.accent_palette, non_empty(self.accent_color.as_deref())) {
            (Some(explicit), _) => Some(explicit.resolve()),
            (None, Some(color)) => Some(palette::generate_palette(color)),
            (None, None) => None,
        }
    }
}

/// Complete `:root` rule for a theme.
pub fn theme_root_css(theme: &ThemeConfig) -> String {
    let accent = theme.accent();
    let mut declarations = theme_declarations(
        &theme.primary(),
        accent.as_ref(),
        non_empty(theme.font_family.as_deref()),
    );
    if let Some(radius) = theme.border_radius {
        declarations.push_str(DECLARATION_SEPARATOR);
        declarations.push_str(&format!("--radius: {};", radius.css_value()));
    }
    format!(":root {{\n    {declarations}\n}}")
}
