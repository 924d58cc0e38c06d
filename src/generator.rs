//! Icon set generator: render every fixed size and write it to disk

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::rendering::{self, IconSize};
use crate::{GeneratorConfig, ICON_SIZES};

/// Record of one icon file written by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    /// Hex SHA-256 of the written PNG bytes
    pub sha256: String,
}

/// `<dir>/icon<size>.png`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon{}.png", size))
}

pub struct IconSetGenerator {
    config: GeneratorConfig,
}

impl IconSetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Render and write every size in order, invoking `on_icon` after each
    /// file lands. Stops at the first failure; files already written stay.
    pub fn run_with<F>(&self, mut on_icon: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(&GeneratedIcon),
    {
        let mut written = Vec::with_capacity(ICON_SIZES.len());
        for size in ICON_SIZES {
            let icon = self.write_icon(size)?;
            on_icon(&icon);
            written.push(icon);
        }
        Ok(written)
    }

    pub fn run(&self) -> Result<Vec<GeneratedIcon>> {
        self.run_with(|_| {})
    }

    /// Render one size and overwrite its file.
    pub fn write_icon(&self, size: u32) -> Result<GeneratedIcon> {
        let size = IconSize::new(size).inspect_err(|_| warn!("Rejecting icon size {}", size))?;
        let png_data = rendering::encode_png(&rendering::render_icon(size))?;

        let path = icon_path(&self.config.out_dir, size.get());
        fs::write(&path, &png_data).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        let sha256 = hex::encode(Sha256::digest(&png_data));
        info!("Wrote {} icon to {}", size, path.display());
        debug!("{}: {} bytes, sha256 {}", path.display(), png_data.len(), sha256);

        Ok(GeneratedIcon {
            size: size.get(),
            path,
            sha256,
        })
    }
}

/// Generate the full icon set into `icons/`, printing one progress line per
/// file and a completion line.
pub fn generate_all() -> Result<()> {
    generate_into(GeneratorConfig::default()).map(|_| ())
}

/// Same as [`generate_all`] for a configured output directory.
pub fn generate_into(config: GeneratorConfig) -> Result<Vec<GeneratedIcon>> {
    let icons = IconSetGenerator::new(config).run_with(print_progress)?;
    println!("Icon generation complete!");
    Ok(icons)
}

fn print_progress(icon: &GeneratedIcon) {
    println!("Generated icon: {}", icon.path.display());
}
