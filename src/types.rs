//! Landing-page content schema.
//!
//! A [`SiteConfig`] describes one landing page, section by section, in AIDA
//! order:
//!
//! | Stage | Section |
//! |-------|---------|
//! | Attention | [`HeroSection`] |
//! | Interest | [`ProblemSection`], [`SolutionSection`] |
//! | Desire | [`BenefitsSection`], [`TrustSection`] |
//! | Action | [`CtaSection`] |
//!
//! Pricing, FAQ and theme are optional; footer and SEO are always present.
//! These are plain data. Loading and validation live in [`crate::config`],
//! rendering in [`crate::generate`].
//!
//! Fields that a page can do without are `Option` (or a defaulted `Vec`), so
//! the required/optional split is checked when the content file is parsed.
//! Unknown keys are rejected.

use crate::theme::{BorderRadius, ColorMode};
use serde::{Deserialize, Serialize};

/// Icon reference in `set:name` form, e.g. `"lucide:clock"`.
pub type IconName = String;

/// Call-to-action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaButton {
    pub text: String,
    /// Supporting line under the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    /// Link target. Rendered as `#cta` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

// ─── Attention ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    /// Social-proof badge, e.g. "Trusted by 10,000+ founders".
    pub emotional_hook: String,
    pub primary_cta: CtaButton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_alt: Option<String>,
}

// ─── Interest ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemItem {
    pub title: String,
    pub description: String,
    /// Stat or fact backing the problem.
    pub microcopy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub items: Vec<ProblemItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionStep {
    /// Display order; steps render sorted by this number.
    pub step: u32,
    pub title: String,
    pub description: String,
    pub benefit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub steps: Vec<SolutionStep>,
}

// ─── Desire ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
    /// Quantified value, e.g. "< 5 min".
    pub metric: String,
    pub metric_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaButton>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenefitsSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub items: Vec<BenefitItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustMetric {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientLogo {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustSection {
    pub section_title: String,
    pub section_subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_quote: Option<Testimonial>,
    pub metrics: Vec<TrustMetric>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logos: Vec<ClientLogo>,
}

// ─── Action ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub primary_cta: CtaButton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

// ─── Optional sections ───────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    /// Billing period label, e.g. "month".
    pub interval: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: CtaButton,
    /// Highlight as the recommended plan.
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    /// Markdown.
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqSection {
    pub section_title: String,
    pub section_subtitle: String,
    pub items: Vec<FaqItem>,
}

// ─── Footer ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsletterConfig {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl SocialLinks {
    /// Configured networks as `(name, url)`, in a fixed order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", &self.twitter),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Instagram", &self.instagram),
            ("YouTube", &self.youtube),
            ("Facebook", &self.facebook),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| (name, u))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    pub description: String,
    pub copyright: String,
    pub links: Vec<FooterLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<NewsletterConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

// ─── SEO ─────────────────────────────────────────────────────

/// OpenGraph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Document language, e.g. "en". Rendered as `en` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub title: String,
    /// Ideally 150-160 characters.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Social sharing image, 1200x630.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// Site handle for `twitter:site`, e.g. "@acme".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub og_type: OgType,
}

// ─── Theme ───────────────────────────────────────────────────

/// A hand-picked palette. Only `500` is required; missing shades are
/// generated from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    #[serde(rename = "50", default, skip_serializing_if = "Option::is_none")]
    pub shade_50: Option<String>,
    #[serde(rename = "100", default, skip_serializing_if = "Option::is_none")]
    pub shade_100: Option<String>,
    #[serde(rename = "200", default, skip_serializing_if = "Option::is_none")]
    pub shade_200: Option<String>,
    #[serde(rename = "300", default, skip_serializing_if = "Option::is_none")]
    pub shade_300: Option<String>,
    #[serde(rename = "400", default, skip_serializing_if = "Option::is_none")]
    pub shade_400: Option<String>,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600", default, skip_serializing_if = "Option::is_none")]
    pub shade_600: Option<String>,
    #[serde(rename = "700", default, skip_serializing_if = "Option::is_none")]
    pub shade_700: Option<String>,
    #[serde(rename = "800", default, skip_serializing_if = "Option::is_none")]
    pub shade_800: Option<String>,
    #[serde(rename = "900", default, skip_serializing_if = "Option::is_none")]
    pub shade_900: Option<String>,
    #[serde(rename = "950", default, skip_serializing_if = "Option::is_none")]
    pub shade_950: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Brand color as `#RRGGBB`.
    pub primary_color: String,
    /// Overrides the palette generated from `primary_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_palette: Option<ColorPalette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_palette: Option<ColorPalette>,
    /// Font family name, available via a web font service or the system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Stylesheet URL that loads `font_family`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color_mode: Option<ColorMode>,
}

// ─── Site ────────────────────────────────────────────────────

/// The whole landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,

    pub hero: HeroSection,
    pub problem: ProblemSection,
    pub solution: SolutionSection,
    pub benefits: BenefitsSection,
    pub trust: TrustSection,
    pub cta: CtaSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,

    pub footer: FooterSection,
    pub seo: SeoConfig,
}
