//! Landing page generation.
//!
//! Renders a [`SiteConfig`] into a single static `index.html`.
//!
//! ## Page Structure
//!
//! Sections render in AIDA order, each with a fragment id so CTA buttons can
//! link to them:
//!
//! ```text
//! #hero       Attention
//! #problem    Interest
//! #solution   Interest → Desire
//! #benefits   Desire
//! #trust      Desire → Action
//! #pricing    (optional)
//! #faq        (optional)
//! #cta        Action
//! footer
//! ```
//!
//! ## CSS
//!
//! The `<style>` element holds the theme's `:root` block (palettes, font,
//! radius) followed by `static/style.css`, embedded at compile time. Without
//! a `[theme]` the default brand palette is used.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All content text is escaped. The meta tags from [`crate::seo`] and the
//! rendered FAQ markdown are inserted pre-escaped.

use crate::config::{self, ConfigError};
use crate::palette;
use crate::seo::{self, SeoProps};
use crate::theme;
use crate::types::*;
use crate::version::VERSION;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Link target for CTA buttons without an `href`.
pub const DEFAULT_CTA_HREF: &str = "#cta";

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Load `site_path`, render it and write `index.html` into `output_dir`.
///
/// Returns the path of the written file.
pub fn generate(site_path: &Path, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let site = config::load_site(site_path)?;
    generate_site(&site, output_dir)
}

/// Render an already loaded site into `output_dir/index.html`.
pub fn generate_site(site: &SiteConfig, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    for warning in site.warnings() {
        tracing::warn!("{warning}");
    }

    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, render_page(site).into_string())?;
    tracing::info!("Generated {}", index_path.display());
    Ok(index_path)
}

/// Theme `:root` block plus the static stylesheet.
pub fn page_css(site: &SiteConfig) -> String {
    let root = match &site.theme {
        Some(theme) => theme::theme_root_css(theme),
        None => format!(
            ":root {{\n    {}\n}}",
            theme::generate_theme_css(palette::FALLBACK_COLOR, None, None)
        ),
    };
    format!("{root}\n\n{CSS_STATIC}")
}

pub fn render_page(site: &SiteConfig) -> Markup {
    let content = html! {
        main {
            (render_hero(&site.hero))
            (render_problem(&site.problem))
            (render_solution(&site.solution))
            (render_benefits(&site.benefits))
            (render_trust(&site.trust))
            @if let Some(pricing) = &site.pricing {
                (render_pricing(pricing))
            }
            @if let Some(faq) = &site.faq {
                (render_faq(faq))
            }
            (render_cta(&site.cta))
        }
        (render_footer(&site.footer, &site.brand, &site.tagline))
    };

    base_document(site, &page_css(site), content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the document shell: head with meta tags and styles, then `content`.
fn base_document(site: &SiteConfig, css: &str, content: Markup) -> Markup {
    let lang = site.seo.lang.as_deref().unwrap_or("en");
    let color_mode = site
        .theme
        .as_ref()
        .and_then(|t| t.default_color_mode)
        .unwrap_or_default();
    let font_url = site.theme.as_ref().and_then(|t| t.font_url.as_deref());

    html! {
        (DOCTYPE)
        html lang=(lang) data-color-mode=(color_mode.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (PreEscaped(seo::generate_meta_tags(&SeoProps::from(&site.seo))))
                @if let Some(keywords) = &site.seo.keywords {
                    meta name="keywords" content=(keywords);
                }
                @if let Some(handle) = &site.seo.twitter_handle {
                    meta name="twitter:site" content=(handle);
                }
                meta name="generator" content=(VERSION.full());
                @if let Some(url) = font_url {
                    link rel="stylesheet" href=(url);
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        header.section-header {
            h2 { (title) }
            p { (subtitle) }
        }
    }
}

/// Renders a CTA button with its optional subtext.
fn cta_button(button: &CtaButton, primary: bool) -> Markup {
    let href = button.href.as_deref().unwrap_or(DEFAULT_CTA_HREF);
    html! {
        div.cta {
            a.button.button-primary[primary].button-secondary[!primary] href=(href) {
                (button.text)
            }
            @if let Some(subtext) = &button.subtext {
                small { (subtext) }
            }
        }
    }
}

fn icon(name: Option<&str>) -> Markup {
    html! {
        @if let Some(name) = name {
            span.icon data-icon=(name) aria-hidden="true" {}
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn render_hero(hero: &HeroSection) -> Markup {
    html! {
        section #hero .hero {
            p.hero-hook { (hero.emotional_hook) }
            h1 { (hero.headline) }
            p.hero-subheadline { (hero.subheadline) }
            div.actions {
                (cta_button(&hero.primary_cta, true))
                @if let Some(secondary) = &hero.secondary_cta {
                    (cta_button(secondary, false))
                }
            }
            @if let Some(path) = &hero.visual_path {
                img.hero-visual src=(path) alt=(hero.visual_alt.as_deref().unwrap_or(""));
            }
        }
    }
}

fn render_problem(problem: &ProblemSection) -> Markup {
    html! {
        section #problem .problem {
            (section_header(&problem.section_title, &problem.section_subtitle))
            div.grid {
                @for item in &problem.items {
                    article.card {
                        (icon(item.icon.as_deref()))
                        h3 { (item.title) }
                        p { (item.description) }
                        p.microcopy { (item.microcopy) }
                    }
                }
            }
        }
    }
}

fn render_solution(solution: &SolutionSection) -> Markup {
    let mut steps: Vec<&SolutionStep> = solution.steps.iter().collect();
    steps.sort_by_key(|s| s.step);

    html! {
        section #solution .solution {
            (section_header(&solution.section_title, &solution.section_subtitle))
            ol.grid {
                @for step in steps {
                    li.card {
                        span.step-number { (step.step) }
                        (icon(step.icon.as_deref()))
                        h3 { (step.title) }
                        p { (step.description) }
                        p.benefit { strong { (step.benefit) } }
                        @if let Some(path) = &step.visual_path {
                            img src=(path) alt=(step.title) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn render_benefits(benefits: &BenefitsSection) -> Markup {
    html! {
        section #benefits .benefits {
            (section_header(&benefits.section_title, &benefits.section_subtitle))
            div.grid {
                @for item in &benefits.items {
                    article.card {
                        (icon(item.icon.as_deref()))
                        p.metric { (item.metric) }
                        p.metric-label { (item.metric_label) }
                        h3 { (item.title) }
                        p { (item.description) }
                        @if let Some(cta) = &item.cta {
                            (cta_button(cta, false))
                        }
                    }
                }
            }
        }
    }
}

fn testimonial(t: &Testimonial, class: &str) -> Markup {
    html! {
        figure class=(class) {
            blockquote { (t.quote) }
            figcaption {
                @if let Some(photo) = &t.photo_path {
                    img src=(photo) alt=(t.name) loading="lazy";
                }
                strong { (t.name) }
                ", " (t.role)
                @if let Some(company) = &t.company {
                    ", " (company)
                }
            }
        }
    }
}

fn render_trust(trust: &TrustSection) -> Markup {
    html! {
        section #trust .trust {
            (section_header(&trust.section_title, &trust.section_subtitle))
            @if let Some(quote) = &trust.main_quote {
                (testimonial(quote, "main-quote"))
            }
            dl.trust-metrics {
                @for metric in &trust.metrics {
                    div {
                        dt.metric { (metric.value) }
                        dd.metric-label { (metric.label) }
                        @if let Some(description) = &metric.description {
                            dd { (description) }
                        }
                    }
                }
            }
            div.grid {
                @for t in &trust.testimonials {
                    (testimonial(t, "card"))
                }
            }
            @if !trust.logos.is_empty() {
                div.logos {
                    @for logo in &trust.logos {
                        img src=(logo.path) alt=(logo.name) loading="lazy";
                    }
                }
            }
        }
    }
}

fn render_pricing(pricing: &PricingSection) -> Markup {
    html! {
        section #pricing .pricing {
            (section_header(&pricing.section_title, &pricing.section_subtitle))
            div.grid {
                @for plan in &pricing.plans {
                    article.card.plan.plan-popular[plan.is_popular] {
                        h3 { (plan.name) }
                        p {
                            span.price { (plan.price) }
                            " / " (plan.interval)
                        }
                        p { (plan.description) }
                        ul {
                            @for feature in &plan.features {
                                li { (feature) }
                            }
                        }
                        (cta_button(&plan.cta, plan.is_popular))
                    }
                }
            }
        }
    }
}

/// Render markdown to HTML.
fn markdown(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    out
}

fn render_faq(faq: &FaqSection) -> Markup {
    html! {
        section #faq .faq {
            (section_header(&faq.section_title, &faq.section_subtitle))
            @for item in &faq.items {
                details {
                    summary { (item.question) }
                    div.answer { (PreEscaped(markdown(&item.answer))) }
                }
            }
        }
    }
}

fn render_cta(cta: &CtaSection) -> Markup {
    html! {
        section #cta .final-cta {
            (section_header(&cta.section_title, &cta.section_subtitle))
            div.actions {
                (cta_button(&cta.primary_cta, true))
                @if let Some(secondary) = &cta.secondary_cta {
                    (cta_button(secondary, false))
                }
            }
            @if !cta.features.is_empty() {
                ul.features {
                    @for feature in &cta.features {
                        li { (feature) }
                    }
                }
            }
        }
    }
}

fn render_footer(footer: &FooterSection, brand: &str, tagline: &str) -> Markup {
    let social = footer
        .social
        .as_ref()
        .map(SocialLinks::entries)
        .unwrap_or_default();

    html! {
        footer.site-footer {
            p.brand { strong { (brand) } " · " (tagline) }
            p { (footer.description) }
            @if !footer.links.is_empty() {
                nav.footer-links {
                    @for link in &footer.links {
                        a href=(link.href) { (link.text) }
                    }
                }
            }
            @if let Some(newsletter) = &footer.newsletter {
                div.newsletter {
                    h3 { (newsletter.title) }
                    p { (newsletter.description) }
                    form {
                        input type="email" name="email" placeholder=(newsletter.placeholder) required;
                        button.button.button-primary type="submit" { (newsletter.button_text) }
                    }
                }
            }
            @if !social.is_empty() {
                nav.social {
                    @for (name, url) in &social {
                        a href=(url) rel="noopener" { (name) }
                    }
                }
            }
            p.copyright { (footer.copyright) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
