//! Subtitle downloader icon set
//!
//! Procedurally draws the extension's "video + subtitles + download" icon at
//! the fixed sizes browsers ask for and writes each one as a PNG.
//!
//! The 128x128 reference design is scaled per size, turned into a short list
//! of paint commands and rasterized onto a transparent RGBA canvas. Rendering
//! is a pure function of the size; only the generator touches the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use subicons::{GeneratorConfig, IconSetGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = IconSetGenerator::new(GeneratorConfig::default());
//! for icon in generator.run()? {
//!     println!("{} -> {}", icon.size, icon.path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub mod rendering;

pub use generator::{generate_all, generate_into, icon_path, GeneratedIcon, IconSetGenerator};
pub use rendering::{render, render_png, IconSize, RenderedIcon};

/// Sizes written by the generator, in write order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory the icons land in unless configured otherwise
pub const DEFAULT_OUT_DIR: &str = "icons";

/// Configuration for the icon set generator
///
/// The output directory must already exist; the generator never creates it.
///
/// # Examples
///
/// ```
/// let cfg = subicons::GeneratorConfig::default();
/// assert_eq!(cfg.out_dir, std::path::PathBuf::from("icons"));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving `icon<size>.png` files
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("icons"));
    }

    #[test]
    fn test_icon_sizes_are_ordered() {
        assert!(ICON_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ICON_SIZES[ICON_SIZES.len() - 1], rendering::layout::REFERENCE_SIZE);
    }
}
