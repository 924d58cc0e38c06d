use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use subicons::{generator, GeneratorConfig, DEFAULT_OUT_DIR};

/// Draw the extension icon set (16, 32, 48 and 128 px PNGs).
#[derive(Parser, Debug)]
#[command(name = "subicons", version, about)]
struct Cli {
    /// Existing directory to write icon<size>.png files into
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Log at debug level (file digests)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let out_dir = cli.out_dir.clone();
    generator::generate_into(GeneratorConfig { out_dir: cli.out_dir })
        .with_context(|| format!("generating icons into {}", out_dir.display()))?;
    Ok(())
}
