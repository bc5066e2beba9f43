//! Meta-tag generation for the document head.
//!
//! Emits `<title>`, the description meta tag, OpenGraph tags and a
//! `summary_large_image` Twitter card, joined by a newline plus four spaces.
//! Every interpolated value goes through [`escape_html`].

use crate::types::{OgType, SeoConfig};

/// Width and height advertised for `og:image`.
pub const OG_IMAGE_SIZE: (u32, u32) = (1200, 630);

#[derive(Debug, Clone, Default)]
pub struct SeoProps {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub og_type: OgType,
}

impl From<&SeoConfig> for SeoProps {
    fn from(seo: &SeoConfig) -> Self {
        Self {
            title: seo.title.clone(),
            description: seo.description.clone(),
            canonical: seo.canonical.clone(),
            og_image: seo.og_image.clone(),
            og_type: seo.og_type,
        }
    }
}

/// Escape `& < > " '` for use in text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn generate_meta_tags(props: &SeoProps) -> String {
    let title = escape_html(&props.title);
    let description = escape_html(&props.description);
    let canonical = props.canonical.as_deref().filter(|c| !c.is_empty());
    let og_image = props.og_image.as_deref().filter(|i| !i.is_empty());

    let mut tags = vec![
        format!("<title>{title}</title>"),
        format!(r#"<meta name="description" content="{description}" />"#),
        format!(r#"<meta property="og:title" content="{title}" />"#),
        format!(r#"<meta property="og:description" content="{description}" />"#),
        format!(
            r#"<meta property="og:type" content="{}" />"#,
            props.og_type.as_str()
        ),
    ];

    if let Some(canonical) = canonical {
        let canonical = escape_html(canonical);
        tags.push(format!(r#"<link rel="canonical" href="{canonical}" />"#));
        tags.push(format!(r#"<meta property="og:url" content="{canonical}" />"#));
    }

    if let Some(image) = og_image {
        let (width, height) = OG_IMAGE_SIZE;
        tags.push(format!(
            r#"<meta property="og:image" content="{}" />"#,
            escape_html(image)
        ));
        tags.push(format!(r#"<meta property="og:image:width" content="{width}" />"#));
        tags.push(format!(r#"<meta property="og:image:height" content="{height}" />"#));
    }

    tags.push(r#"<meta name="twitter:card" content="summary_large_image" />"#.to_string());
    tags.push(format!(r#"<meta name="twitter:title" content="{title}" />"#));
    tags.push(format!(
        r#"<meta name="twitter:description" content="{description}" />"#
    ));
    if let Some(image) = og_image {
        tags.push(format!(
            r#"<meta name="twitter:image" content="{}" />"#,
            escape_html(image)
        ));
    }

    tags.join("\n    ")
}
