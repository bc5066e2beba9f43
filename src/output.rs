//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Palette
//!
//! ```text
//!  50  #e8f5fc
//! 100  #d2ecf9
//! ...
//! 950  #001b29
//! ```
//!
//! ## Check
//!
//! ```text
//! Acme Launch
//! 001 Hero: Ship a landing page before lunch
//! 002 Problem (3 items)
//! ...
//!
//! Theme
//!     primary: #0284c7
//!     accent: #f59e0b
//!
//! Warnings
//!     seo.description is 9 characters; 150-160 is recommended
//! ```
//!
//! ## Build
//!
//! ```text
//! Acme Launch → dist/index.html
//!     9 sections
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::palette::Palette;
use crate::types::SiteConfig;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a section line: index + name, then either a count or a headline.
///
/// ```text
/// 002 Problem (3 items)
/// 001 Hero: Ship a landing page before lunch
/// ```
fn section_line(index: usize, name: &str, detail: SectionDetail<'_>) -> String {
    match detail {
        SectionDetail::Count(n, noun) => {
            format!("{} {} ({} {})", format_index(index), name, n, noun)
        }
        SectionDetail::Headline(text) => format!("{} {}: {}", format_index(index), name, text),
    }
}

enum SectionDetail<'a> {
    Count(usize, &'a str),
    Headline(&'a str),
}

// ============================================================================
// Palette
// ============================================================================

pub fn format_palette(palette: &Palette) -> Vec<String> {
    palette
        .iter()
        .map(|(shade, color)| format!("{:>3}  {}", shade.key(), color))
        .collect()
}

pub fn print_palette(palette: &Palette) {
    for line in format_palette(palette) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check(site: &SiteConfig, warnings: &[String]) -> Vec<String> {
    use SectionDetail::{Count, Headline};

    let mut sections = vec![
        ("Hero", Headline(&site.hero.headline)),
        ("Problem", Count(site.problem.items.len(), "items")),
        ("Solution", Count(site.solution.steps.len(), "steps")),
        ("Benefits", Count(site.benefits.items.len(), "items")),
        ("Trust", Count(site.trust.testimonials.len(), "testimonials")),
    ];
    if let Some(pricing) = &site.pricing {
        sections.push(("Pricing", Count(pricing.plans.len(), "plans")));
    }
    if let Some(faq) = &site.faq {
        sections.push(("FAQ", Count(faq.items.len(), "questions")));
    }
    sections.push(("CTA", Headline(&site.cta.section_title)));
    sections.push(("Footer", Count(site.footer.links.len(), "links")));

    let mut lines = vec![site.brand.clone()];
    lines.extend(
        sections
            .into_iter()
            .enumerate()
            .map(|(i, (name, detail))| section_line(i + 1, name, detail)),
    );

    if let Some(theme) = &site.theme {
        lines.push(String::new());
        lines.push("Theme".to_string());
        lines.push(format!("{}primary: {}", indent(1), theme.primary_color));
        if let Some(accent) = &theme.accent_color {
            lines.push(format!("{}accent: {}", indent(1), accent));
        }
        if let Some(font) = &theme.font_family {
            lines.push(format!("{}font: {}", indent(1), font));
        }
    }

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        lines.extend(warnings.iter().map(|w| format!("{}{}", indent(1), w)));
    }

    lines
}

pub fn print_check(site: &SiteConfig, warnings: &[String]) {
    for line in format_check(site, warnings) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build(site: &SiteConfig, index_path: &Path) -> Vec<String> {
    // hero, problem, solution, benefits, trust, cta, footer
    let sections = 7 + usize::from(site.pricing.is_some()) + usize::from(site.faq.is_some());
    vec![
        format!("{} → {}", site.brand, index_path.display()),
        format!("{}{} sections", indent(1), sections),
    ]
}

pub fn print_build(site: &SiteConfig, index_path: &Path) {
    for line in format_build(site, index_path) {
        println!("{}", line);
    }
}
