//! # Landing Kit
//!
//! A kit for single-page SaaS landing sites built around the AIDA funnel
//! (Attention, Interest, Desire, Action). One content file describes the
//! page; a single brand color becomes the whole color system.
//!
//! # Architecture: Content In, One Page Out
//!
//! ```text
//! site.toml  →  SiteConfig  →  index.html
//!   (config)      (types)       (generate: theme CSS + meta tags + sections)
//! ```
//!
//! The color pipeline is independent of the page and usable on its own:
//!
//! ```text
//! "#0284c7"  →  Rgb  →  Hsl  →  11 × Hsl (fixed lightness)  →  Palette  →  CSS
//!    colors              palette                                        theme
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`colors`] | Hex parsing and RGB ⇄ HSL conversion |
//! | [`palette`] | 11-shade palette generation from one base color, with fallback |
//! | [`theme`] | Palette and font CSS custom properties, border radius, color mode |
//! | [`types`] | Content schema for every landing page section |
//! | [`seo`] | HTML-escaped meta, Open Graph and Twitter card tags |
//! | [`version`] | Engine release metadata and version comparison |
//! | [`config`] | Content file loading (TOML or JSON), validation and warnings |
//! | [`generate`] | Renders the landing page with Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fixed Lightness Scale
//!
//! Every palette shares the same lightness ladder (95% down to 8%) and keeps
//! the base hue. Only saturation is adjusted: damped for very light shades so
//! tints stay soft, boosted for very dark shades so they don't turn muddy.
//! Two brand colors with the same hue therefore produce palettes that differ
//! only in saturation, which keeps accents and primaries visually compatible.
//!
//! ## Lenient by Default
//!
//! A typo in a theme color should not break a page. [`palette::generate_palette`]
//! logs a warning and falls back to [`palette::FALLBACK_COLOR`];
//! [`palette::try_generate_palette`] reports the error for callers (like the
//! `palette` command) that want it. `check` lists colors that will fall back.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error and all interpolation is
//! auto-escaped.

pub mod colors;
pub mod config;
pub mod generate;
pub mod output;
pub mod palette;
pub mod seo;
pub mod theme;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod test_helpers;
