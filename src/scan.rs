//! Content scanning and manifest generation.
//!
//! Stage 1 of the folio build pipeline. Reads the content directory,
//! validates it, probes image sizes, and produces a [`Manifest`] that the
//! generate stage renders without touching the content directory again
//! (apart from copying `assets/`).
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Site configuration (optional)
//! ├── projects.toml        # Ordered project catalog (required)
//! ├── about.md             # About page body (optional)
//! └── assets/              # Copied verbatim to the output root
//!     ├── logo.png
//!     └── images/
//!         ├── raanana-jazz/hero.png
//!         └── ...
//! ```
//!
//! Image references in `projects.toml` are site-absolute URLs
//! (`/images/raanana-jazz/hero.png`) and resolve under `assets/`.
//!
//! ## About Page
//!
//! The first `# heading` of `about.md` is the page title and is removed
//! from the body. If the first block after it is a lone image
//! (`![Lior](/images/portrait.png)`), that image becomes the portrait shown
//! beside the text.

use crate::catalog::{self, Catalog};
use crate::config::{self, SiteConfig};
use crate::imaging::{self, HeaderProbe, ImageProbe};
use crate::types::{AboutPage, GalleryImage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const ABOUT_FILE: &str = "about.md";
pub const ASSETS_DIR: &str = "assets";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the generate stage needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub about: AboutPage,
    /// Every referenced image keyed by its `src`.
    pub images: BTreeMap<String, GalleryImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Manifest {
    /// Size-annotated image for `src`, or the fallback size when `src` was
    /// never scanned.
    pub fn image(&self, src: &str) -> GalleryImage {
        self.images.get(src).cloned().unwrap_or_else(|| {
            let [width, height] = self.config.gallery.fallback_size;
            GalleryImage {
                src: src.to_string(),
                width,
                height,
                probed: false,
            }
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ScanError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    scan_with(root, &HeaderProbe)
}

/// [`scan`] with a custom image probe.
pub fn scan_with(root: &Path, probe: &impl ImageProbe) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let catalog = Catalog::load(root)?;
    let about = parse_about(root)?;

    let mut srcs: Vec<&str> = catalog.image_paths();
    let extras = [
        about.portrait.as_deref(),
        config.site.logo.as_deref(),
        config.site.hero_illustration.as_deref(),
    ];
    for src in extras.into_iter().flatten() {
        if !srcs.contains(&src) {
            srcs.push(src);
        }
    }

    let assets = root.join(ASSETS_DIR);
    let fallback = config.gallery.fallback_size;
    let threads = config::effective_threads(&config.processing);
    let report = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| imaging::probe_all(probe, &assets, &srcs, fallback)),
        Err(_) => imaging::probe_all(probe, &assets, &srcs, fallback),
    };

    Ok(Manifest {
        config,
        catalog,
        about,
        images: report.images,
        warnings: report.warnings,
    })
}

/// Read `about.md`, or an empty page titled "About" when it is absent.
fn parse_about(root: &Path) -> Result<AboutPage, ScanError> {
    let path = root.join(ABOUT_FILE);
    if !path.exists() {
        return Ok(AboutPage {
            title: "About".to_string(),
            body: String::new(),
            portrait: None,
        });
    }
    let content = fs::read_to_string(&path)?;
    Ok(parse_about_markdown(&content))
}

fn parse_about_markdown(content: &str) -> AboutPage {
    let mut title = None;
    let mut lines: Vec<&str> = Vec::new();
    for line in content.lines() {
        if title.is_none() && line.starts_with("# ") {
            title = Some(line.trim_start_matches("# ").trim().to_string());
        } else {
            lines.push(line);
        }
    }

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let mut portrait = None;
    if let Some(i) = first {
        let block_ends = lines.get(i + 1).is_none_or(|next| next.trim().is_empty());
        if let Some(src) = block_ends.then(|| parse_lone_image(lines[i])).flatten() {
            portrait = Some(src);
            lines.remove(i);
        }
    }

    AboutPage {
        title: title.unwrap_or_else(|| "About".to_string()),
        body: lines.join("\n").trim().to_string(),
        portrait,
    }
}

/// `![alt](src)` on a line of its own → `src`.
fn parse_lone_image(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("![")?;
    let (_, rest) = rest.split_once("](")?;
    let src = rest.strip_suffix(')')?;
    (!src.is_empty() && !src.contains(char::is_whitespace)).then(|| src.to_string())
}
