use anyhow::Result;
use clap::Parser;
use pwa_icons::config::GeneratorConfig;
use pwa_icons::generator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-pwa-icons")]
#[command(about = "Generate placeholder PWA icons into public/icons", long_about = None)]
struct Cli {
    /// YAML file overriding colors, fonts or the output directory
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write icons here instead of the configured output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    println!("Generating placeholder PWA icons...");
    println!();

    let generated = generator::generate_all(&config)?;

    println!();
    println!("✅ All {} icons generated", generated.len());
    println!("📁 Output directory: {}", config.output_dir.display());
    println!();
    println!("⚠️  These are placeholder icons; replace them with the designed assets before release");

    Ok(())
}
