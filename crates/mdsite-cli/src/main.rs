use anyhow::{bail, Result};
use clap::Parser;
use mdsite::{MarkdownService, PageOptions};
use std::path::PathBuf;

mod config;
mod site;
mod template;

use config::{SiteConfig, DEFAULT_CONFIG_FILE};
use site::{copy_static, SiteGenerator};

#[derive(Parser, Debug)]
#[command(name = "mdsite", about = "Build a static HTML site from Markdown")]
struct Args {
    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Prefix for root-relative links, e.g. /my-site/
    #[arg(long)]
    basepath: Option<String>,

    /// Config file path
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_to(self, config: &mut SiteConfig) {
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(basepath) = self.basepath {
            config.basepath = basepath;
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = SiteConfig::load_from_path(&args.config)?.unwrap_or_default();
    args.apply_to(&mut config);
    log::debug!("{config:?}");

    copy_static(&config.static_dir, &config.output_dir)?;

    let service = MarkdownService::with_options(PageOptions {
        default_title: config.default_title.clone(),
    });
    let report = SiteGenerator::new(service, config.basepath.as_str()).generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
    )?;

    log::info!(
        "built {} page(s) into {}",
        report.generated.len(),
        config.output_dir.display()
    );

    if !report.is_success() {
        for (path, reason) in &report.failed {
            eprintln!("  {}: {reason}", path.display());
        }
        bail!("{} page(s) failed to build", report.failed.len());
    }

    Ok(())
}
