use clap::{Parser, Subcommand};
use simple_folio::types::Manifest;
use simple_folio::{config, content, embed, generate, output, resolve};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for creative portfolios")]
#[command(long_about = "\
Static site generator for creative portfolios

One JSON file is the data source. content.json describes the hero, bio,
social links, video reel, graphics, and brand logos; Simple Folio renders a
single-page portfolio with click-to-play embeds for YouTube, Vimeo, and
Google Drive links.

Content structure:

  content/
  ├── content.json                 # All page content (every field optional)
  ├── config.toml                  # Presentation config (optional)
  └── assets/                      # Static assets → copied to output root

Every content field has a documented default, so an empty {} still builds a
complete page. A video URL no provider recognizes renders as an inert card;
a missing content.json builds a page whose bio region explains the problem.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate resolved manifest
    #[arg(long, default_value = ".simple-folio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content.json and resolve display values into a manifest
    Load,
    /// Produce the final HTML site from a resolved manifest
    Generate,
    /// Run the full pipeline: load → generate
    Build,
    /// Validate content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Resolve a single video URL to its embed URL
    Embed {
        /// Raw video URL as it would appear in content.json
        url: String,
    },
}

const MANIFEST_FILE: &str = "resolved.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Load => {
            run_load(&cli)?;
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join(MANIFEST_FILE);
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            let manifest: Manifest =
                serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
            output::print_generate_output(&manifest.site, &cli.output);
        }
        Command::Build => {
            println!("==> Stage 1: Loading {}", cli.source.display());
            let manifest_path = run_load(&cli)?;

            println!("==> Stage 2: Generating HTML \u{2192} {}", cli.output.display());
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            let manifest: Manifest =
                serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
            output::print_generate_output(&manifest.site, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let loaded = content::load_content(&cli.source)?;
            let site = resolve::resolve(&loaded);
            config::load_config(&cli.source)?;
            output::print_load_output(&loaded, &site);

            for (idx, card) in site.videos.iter().enumerate() {
                if card.embed.is_none() {
                    println!("warning: video {} has no playable URL", idx + 1);
                }
            }
            for (idx, card) in site.graphics.iter().enumerate() {
                if card.src.is_empty() {
                    println!("warning: graphic {} has no source image", idx + 1);
                }
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Embed { url } => match embed::embed_url(&url) {
            Some(embed) => println!("{embed}"),
            None => {
                eprintln!("unsupported or unparseable video URL: {url}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Stage 1: load content, resolve display values, write the manifest.
///
/// A content document that fails to load degrades to the fallback page
/// state rather than failing the build; the config file, by contrast, is
/// operator input and hard-fails on errors.
fn run_load(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let site_config = config::load_config(&cli.source)?;

    let (loaded, site) = match content::load_content(&cli.source) {
        Ok(loaded) => {
            let site = resolve::resolve(&loaded);
            (loaded, site)
        }
        Err(err) => {
            eprintln!("warning: {err}; building fallback page");
            (content::SiteContent::default(), resolve::fallback())
        }
    };

    output::print_load_output(&loaded, &site);

    let manifest = Manifest {
        site,
        config: site_config,
    };
    std::fs::create_dir_all(&cli.temp_dir)?;
    let manifest_path = cli.temp_dir.join(MANIFEST_FILE);
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(manifest_path)
}
