//! Site content loading and validation.
//!
//! A landing page is described by one content file, TOML by default:
//!
//! ```text
//! site.toml      ← parsed as TOML
//! site.json      ← parsed as JSON (same keys)
//! ```
//!
//! Loading deserializes into [`SiteConfig`] (unknown keys are rejected to
//! catch typos early) and then runs [`SiteConfig::validate`]. Problems that
//! do not stop a build, such as a theme color that will fall back to the
//! default, are reported by [`SiteConfig::warnings`] instead.
//!
//! Run `landing-kit gen-config` for a documented starting point.

use crate::colors;
use crate::types::{CtaButton, SiteConfig};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Characters rejected in `theme.font_family`, which is written into a CSS string.
const FONT_FAMILY_FORBIDDEN: [char; 5] = ['"', ';', '{', '}', '<'];

/// Recommended length of the meta description, in characters.
pub const SEO_DESCRIPTION_RANGE: RangeInclusive<usize> = 150..=160;

impl SiteConfig {
    /// Check that the fields a page cannot render without are filled in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require(&self.brand, "brand")?;
        require(&self.seo.title, "seo.title")?;
        require(&self.seo.description, "seo.description")?;
        require_button(&self.hero.primary_cta, "hero.primary_cta")?;
        require_button(&self.cta.primary_cta, "cta.primary_cta")?;
        if let Some(pricing) = &self.pricing {
            if pricing.plans.is_empty() {
                return Err(ConfigError::Validation(
                    "pricing.plans must not be empty".into(),
                ));
            }
            for (i, plan) in pricing.plans.iter().enumerate() {
                require_button(&plan.cta, &format!("pricing.plans[{i}].cta"))?;
            }
        }
        if let Some(theme) = &self.theme {
            require(&theme.primary_color, "theme.primary_color")?;
            let forbidden = theme
                .font_family
                .as_deref()
                .and_then(|font| font.chars().find(|c| FONT_FAMILY_FORBIDDEN.contains(c)));
            if let Some(c) = forbidden {
                return Err(ConfigError::Validation(format!(
                    "theme.font_family must not contain {c:?}"
                )));
            }
        }
        Ok(())
    }

    /// Non-fatal content advice, one message per finding.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(theme) = &self.theme {
            let candidates = [
                ("theme.primary_color", Some(theme.primary_color.as_str())),
                ("theme.accent_color", theme.accent_color.as_deref()),
            ];
            for (field, color) in candidates {
                let Some(color) = color.filter(|c| !c.is_empty()) else {
                    continue;
                };
                if let Err(err) = colors::hex_to_rgb(color) {
                    warnings.push(format!("{field}: {err}; the default palette will be used"));
                }
            }

            let palettes = [
                ("theme.primary_palette", &theme.primary_palette),
                ("theme.accent_palette", &theme.accent_palette),
            ];
            for (field, palette) in palettes {
                let Some(palette) = palette else {
                    continue;
                };
                for (shade, color) in palette.explicit_shades() {
                    let Some(color) = color else {
                        continue;
                    };
                    if let Err(err) = colors::hex_to_rgb(color) {
                        warnings.push(format!(
                            "{field}.{shade}: {err}; the generated shade will be used"
                        ));
                    }
                }
            }
        }

        let description_len = self.seo.description.chars().count();
        if !SEO_DESCRIPTION_RANGE.contains(&description_len) {
            warnings.push(format!(
                "seo.description is {description_len} characters; {}-{} is recommended",
                SEO_DESCRIPTION_RANGE.start(),
                SEO_DESCRIPTION_RANGE.end()
            ));
        }

        if self.problem.items.len() < 2 {
            warnings.push("problem.items: at least 2 problems are recommended".to_string());
        }

        if self.hero.visual_path.is_some() && self.hero.visual_alt.is_none() {
            warnings.push("hero.visual_alt is missing for hero.visual_path".to_string());
        }

        warnings
    }
}

fn require(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_button(button: &CtaButton, field: &str) -> Result<(), ConfigError> {
    require(&button.text, &format!("{field}.text"))
}

/// Parse site content from a string. `json` selects the JSON parser.
pub fn parse_site(content: &str, json: bool) -> Result<SiteConfig, ConfigError> {
    let site: SiteConfig = if json {
        serde_json::from_str(content)?
    } else {
        toml::from_str(content)?
    };
    site.validate()?;
    Ok(site)
}

/// Load and validate a site content file.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
pub fn load_site(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_site(&content, json)
}

/// Returns a fully-commented example `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_site_toml() -> &'static str {
    include_str!("../fixtures/site.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::ColorPalette;
    use std::fs;

    #[test]
    fn stock_config_parses_and_validates() {
        let site = parse_site(stock_site_toml(), false).unwrap();
        assert_eq!(site.brand, "Acme Launch");
        assert!(site.pricing.is_some());
        assert!(site.faq.is_some());
    }

    #[test]
    fn stock_config_has_no_warnings() {
        let site = parse_site(stock_site_toml(), false).unwrap();
        assert_eq!(site.warnings(), Vec::<String>::new());
    }

    #[test]
    fn load_site_reads_toml() {
        let tmp = setup_fixtures();
        let site = load_site(&tmp.path().join("site.toml")).unwrap();
        assert_eq!(site.seo.title, "Acme Launch | Ship landing pages in minutes");
    }

    #[test]
    fn load_site_reads_json() {
        let tmp = setup_fixtures();
        let json = serde_json::to_string_pretty(&sample_site()).unwrap();
        let path = tmp.path().join("site.json");
        fs::write(&path, json).unwrap();

        let site = load_site(&path).unwrap();
        assert_eq!(site.brand, "Acme Launch");
        assert_eq!(site.problem.items.len(), 3);
    }

    #[test]
    fn load_site_missing_file_is_io_error() {
        let tmp = setup_fixtures();
        let result = load_site(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let result = parse_site("this is not valid toml [[[", false);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_json_is_error() {
        let result = parse_site("{ not json", true);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let content = format!("{}\nbrand_colour = \"red\"\n", stock_site_toml());
        // appended after a table header, so it lands in the last table
        let result = parse_site(&content, false);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // validate
    // =========================================================================

    #[test]
    fn empty_brand_fails_validation() {
        let mut site = sample_site();
        site.brand = "  ".to_string();
        let err = site.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config validation error: brand must not be empty"
        );
    }

    #[test]
    fn empty_cta_text_fails_validation() {
        let mut site = sample_site();
        site.cta.primary_cta.text = String::new();
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("cta.primary_cta.text"));
    }

    #[test]
    fn empty_pricing_plans_fail_validation() {
        let mut site = sample_site();
        if let Some(pricing) = site.pricing.as_mut() {
            pricing.plans.clear();
        }
        assert!(matches!(site.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn invalid_theme_color_still_validates() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            theme.primary_color = "blue".to_string();
        }
        assert!(site.validate().is_ok());
    }

    #[test]
    fn font_family_breaking_out_of_css_fails_validation() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            theme.font_family = Some("Inter</style><script>alert(1)</script>".to_string());
        }
        let err = site.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config validation error: theme.font_family must not contain '<'"
        );
    }

    #[test]
    fn font_family_with_quote_fails_validation() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            theme.font_family = Some(r#"Inter", serif"#.to_string());
        }
        assert!(matches!(site.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn multi_word_font_family_validates() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            theme.font_family = Some("IBM Plex Sans".to_string());
        }
        assert!(site.validate().is_ok());
    }

    // =========================================================================
    // warnings
    // =========================================================================

    #[test]
    fn invalid_theme_colors_are_reported() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            theme.primary_color = "blue".to_string();
            theme.accent_color = Some("#12".to_string());
        }
        let warnings = site.warnings();
        assert!(warnings.iter().any(|w| w.starts_with("theme.primary_color:")));
        assert!(warnings.iter().any(|w| w.starts_with("theme.accent_color:")));
    }

    #[test]
    fn invalid_explicit_shades_are_reported() {
        let content = stock_site_toml().replace(
            "# [theme.primary_palette]\n# \"500\" = \"#0284c7\"\n# \"950\" = \"#082f49\"",
            "[theme.primary_palette]\n\"500\" = \"0284C7\"\n\"950\" = \"navy\"",
        );
        let site = parse_site(&content, false).unwrap();
        assert!(site.theme.as_ref().unwrap().primary_palette.is_some());
        let warnings = site.warnings();
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].starts_with("theme.primary_palette.950: invalid color format"));
    }

    #[test]
    fn valid_explicit_shades_are_not_reported() {
        let mut site = sample_site();
        if let Some(theme) = site.theme.as_mut() {
            let mut palette = ColorPalette {
                shade_50: None,
                shade_100: None,
                shade_200: None,
                shade_300: None,
                shade_400: None,
                shade_500: "0284C7".to_string(),
                shade_600: None,
                shade_700: None,
                shade_800: None,
                shade_900: None,
                shade_950: None,
            };
            palette.shade_50 = Some("#FAFAFA".to_string());
            theme.accent_palette = Some(palette);
        }
        assert_eq!(site.warnings(), Vec::<String>::new());
    }

    #[test]
    fn short_description_is_reported() {
        let mut site = sample_site();
        site.seo.description = "Too short".to_string();
        let warnings = site.warnings();
        assert_eq!(
            warnings,
            vec!["seo.description is 9 characters; 150-160 is recommended".to_string()]
        );
    }

    #[test]
    fn single_problem_is_reported() {
        let mut site = sample_site();
        site.problem.items.truncate(1);
        assert!(site.warnings().iter().any(|w| w.starts_with("problem.items")));
    }

    #[test]
    fn hero_visual_without_alt_is_reported() {
        let mut site = sample_site();
        site.hero.visual_path = Some("/hero.png".to_string());
        site.hero.visual_alt = None;
        assert!(site.warnings().iter().any(|w| w.contains("visual_alt")));
    }
}
