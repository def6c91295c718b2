mod config;
mod constants;
mod font;
mod renderer;

use anyhow::Result;
use clap::Parser;
use config::IconConfig;
use font::Typesetter;
use renderer::{generate_all, launcher_requests};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Regenerate the MapleMetrics Android launcher icon set", long_about = None)]
struct Cli {
    /// YAML config overriding label, background, and output root
    #[arg(short, long, default_value = "icons.yaml")]
    config: PathBuf,

    /// Root directory the android/ output tree is created under
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Two-letter label drawn in the icon center
    #[arg(short, long)]
    label: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = IconConfig::load_or_default(&cli.config)?;
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(label) = cli.label {
        config.label = label;
    }
    config.validate()?;

    println!("🍁 Generating MapleMetrics app icons...");
    println!(
        "📱 Simple design: {} background + white {} + small maple leaf",
        config.background, config.label
    );

    let style = config.style()?;
    let requests = launcher_requests(&config.out_dir);
    let mut typesetter = Typesetter::new();
    generate_all(&requests, &style, &mut typesetter)?;

    println!();
    println!("🎉 All icons created successfully!");
    println!();
    println!("📋 Next steps:");
    println!("1. npx cap sync android");
    println!("2. cd android && ./gradlew assembleDebug");
    println!("3. Your APK will be ready!");

    Ok(())
}
