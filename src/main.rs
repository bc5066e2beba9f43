use clap::{Parser, Subcommand};
use landing_kit::seo::SeoProps;
use landing_kit::version::VERSION;
use landing_kit::{config, generate, output, palette, seo, theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landing-kit")]
#[command(about = "AIDA landing page kit with a brand palette generator")]
#[command(long_about = "\
AIDA landing page kit with a brand palette generator

One content file describes one landing page. Sections follow the AIDA funnel:

  site.toml
  ├── [hero]                 # Attention
  ├── [problem], [solution]  # Interest
  ├── [benefits], [trust]    # Desire
  ├── [cta]                  # Action
  ├── [pricing], [faq]       # optional
  ├── [theme]                # optional: brand color, accent, font
  ├── [footer]
  └── [seo]

A single brand color becomes an 11-shade palette (50 lightest → 950 darkest),
emitted as --color-primary-* custom properties. Invalid colors fall back to
#0284c7.

Set RUST_LOG=debug for detailed logging.

Run 'landing-kit gen-config' to generate a documented site.toml.")]
#[command(version = VERSION.number)]
struct Cli {
    /// Site content file (.toml or .json)
    #[arg(long, default_value = "site.toml", global = true)]
    site: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an 11-shade palette from a hex color
    Palette {
        /// Base color, e.g. "#0284c7"
        color: String,
        /// Print CSS custom properties with this prefix instead of a table
        #[arg(long, conflicts_with = "json")]
        prefix: Option<String>,
        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print theme CSS declarations for a primary color, accent and font
    Theme {
        /// Primary brand color
        primary: String,
        /// Accent color
        #[arg(long)]
        accent: Option<String>,
        /// Font family
        #[arg(long)]
        font: Option<String>,
    },
    /// Print the SEO meta tags for the site
    Meta,
    /// Validate the site content without building
    Check,
    /// Render the landing page into the output directory
    Build,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Palette {
            color,
            prefix,
            json,
        } => {
            let palette = palette::try_generate_palette(&color)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else if let Some(prefix) = prefix {
                for declaration in theme::palette_to_css(&palette, &prefix).lines() {
                    println!("{}", declaration.trim());
                }
            } else {
                output::print_palette(&palette);
            }
        }
        Command::Theme {
            primary,
            accent,
            font,
        } => {
            let css = theme::generate_theme_css(&primary, accent.as_deref(), font.as_deref());
            println!(":root {{\n    {css}\n}}");
        }
        Command::Meta => {
            let site = config::load_site(&cli.site)?;
            println!("{}", seo::generate_meta_tags(&SeoProps::from(&site.seo)));
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.display());
            let site = config::load_site(&cli.site)?;
            output::print_check(&site, &site.warnings());
            println!("==> Content is valid");
        }
        Command::Build => {
            println!("==> Building {} → {}", cli.site.display(), cli.output.display());
            let site = config::load_site(&cli.site)?;
            let index_path = generate::generate_site(&site, &cli.output)?;
            output::print_build(&site, &index_path);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_site_toml());
        }
    }

    Ok(())
}
