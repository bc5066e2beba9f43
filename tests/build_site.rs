//! End-to-end: content file on disk → `index.html` on disk.

use landing_kit::config::{self, ConfigError};
use landing_kit::generate::{self, GenerateError};
use std::fs;
use tempfile::TempDir;

fn write_stock_site(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, config::stock_site_toml()).unwrap();
    path
}

#[test]
fn build_writes_a_complete_page() {
    let tmp = TempDir::new().unwrap();
    let site_path = write_stock_site(&tmp, "site.toml");
    let output = tmp.path().join("dist");

    let index = generate::generate(&site_path, &output).unwrap();
    assert_eq!(index, output.join("index.html"));

    let html = fs::read_to_string(&index).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Acme Launch | Ship landing pages in minutes</title>"));
    assert!(html.contains("--color-primary-500: #03a7fc;"));
    assert!(html.contains("--color-accent-50:"));
    assert!(html.contains("--radius: 0.5rem;"));
    for id in ["hero", "problem", "solution", "benefits", "trust", "pricing", "faq", "cta"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
    }
}

#[test]
fn build_creates_nested_output_directories() {
    let tmp = TempDir::new().unwrap();
    let site_path = write_stock_site(&tmp, "site.toml");
    let output = tmp.path().join("a").join("b").join("dist");

    generate::generate(&site_path, &output).unwrap();
    assert!(output.join("index.html").is_file());
}

#[test]
fn json_content_renders_the_same_page_as_toml() {
    let tmp = TempDir::new().unwrap();
    let toml_path = write_stock_site(&tmp, "site.toml");
    let site = config::load_site(&toml_path).unwrap();
    let json_path = tmp.path().join("site.json");
    fs::write(&json_path, serde_json::to_string_pretty(&site).unwrap()).unwrap();

    let from_toml = generate::generate(&toml_path, &tmp.path().join("toml")).unwrap();
    let from_json = generate::generate(&json_path, &tmp.path().join("json")).unwrap();
    assert_eq!(
        fs::read_to_string(from_toml).unwrap(),
        fs::read_to_string(from_json).unwrap()
    );
}

#[test]
fn invalid_theme_color_still_builds_with_default_palette() {
    let tmp = TempDir::new().unwrap();
    let content = config::stock_site_toml().replace(
        r##"primary_color = "#0284c7""##,
        r##"primary_color = "not-a-color""##,
    );
    let site_path = tmp.path().join("site.toml");
    fs::write(&site_path, content).unwrap();

    let site = config::load_site(&site_path).unwrap();
    assert_eq!(site.warnings().len(), 1);

    let index = generate::generate(&site_path, &tmp.path().join("dist")).unwrap();
    let html = fs::read_to_string(index).unwrap();
    assert!(html.contains("--color-primary-500: #03a7fc;"));
}

#[test]
fn missing_site_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let result = generate::generate(&tmp.path().join("nope.toml"), &tmp.path().join("dist"));
    assert!(matches!(
        result,
        Err(GenerateError::Config(ConfigError::Io(_)))
    ));
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn empty_brand_fails_validation_before_writing() {
    let tmp = TempDir::new().unwrap();
    let content = config::stock_site_toml().replace(
        r#"brand = "Acme Launch""#,
        r#"brand = "  ""#,
    );
    let site_path = tmp.path().join("site.toml");
    fs::write(&site_path, content).unwrap();

    let result = generate::generate(&site_path, &tmp.path().join("dist"));
    assert!(matches!(
        result,
        Err(GenerateError::Config(ConfigError::Validation(_)))
    ));
    assert!(!tmp.path().join("dist").exists());
}
