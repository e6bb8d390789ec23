//! Image dimension probing.
//!
//! Images are served exactly as authored; the only thing the build reads
//! from them is their pixel size, so masonry packing and `aspect-ratio`
//! reservations match the real files. Probing reads headers only
//! (`image::image_dimensions`) and runs on the rayon pool.
//!
//! A missing or unreadable image is an authoring problem, not a build
//! failure: it gets the configured fallback size, `probed: false`, and a
//! warning for the CLI report.

use crate::types::GalleryImage;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read dimensions: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Reads the pixel size of an image file.
pub trait ImageProbe: Sync {
    fn identify(&self, path: &Path) -> Result<Dimensions, ProbeError>;
}

/// Header-only probing with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderProbe;

impl ImageProbe for HeaderProbe {
    fn identify(&self, path: &Path) -> Result<Dimensions, ProbeError> {
        if !path.is_file() {
            return Err(ProbeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }
        let (width, height) =
            image::image_dimensions(path).map_err(|e| ProbeError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }
}

/// Map a site-absolute image URL (`/images/a.png`) to a file under the
/// assets directory. `None` for remote URLs and paths escaping the root.
pub fn resolve_asset(assets_root: &Path, src: &str) -> Option<PathBuf> {
    if src.contains("://") || src.starts_with("data:") {
        return None;
    }
    let relative = Path::new(src.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(assets_root.join(relative))
}

/// Probed images keyed by `src`, plus warnings for the ones that fell back.
#[derive(Debug, Default)]
pub struct ProbeReport {
    pub images: BTreeMap<String, GalleryImage>,
    pub warnings: Vec<String>,
}

/// Probe every `src` in parallel. Warnings keep the order of `srcs`.
pub fn probe_all(
    probe: &impl ImageProbe,
    assets_root: &Path,
    srcs: &[&str],
    fallback: [u32; 2],
) -> ProbeReport {
    let results: Vec<(GalleryImage, Option<String>)> = srcs
        .par_iter()
        .map(|src| probe_one(probe, assets_root, src, fallback))
        .collect();

    let mut report = ProbeReport::default();
    for (image, warning) in results {
        report.warnings.extend(warning);
        report.images.insert(image.src.clone(), image);
    }
    report
}

fn probe_one(
    probe: &impl ImageProbe,
    assets_root: &Path,
    src: &str,
    fallback: [u32; 2],
) -> (GalleryImage, Option<String>) {
    let unprobed = |reason: String| {
        (
            GalleryImage {
                src: src.to_string(),
                width: fallback[0],
                height: fallback[1],
                probed: false,
            },
            Some(format!(
                "{}: {} (using {}x{})",
                src, reason, fallback[0], fallback[1]
            )),
        )
    };

    let Some(path) = resolve_asset(assets_root, src) else {
        return unprobed("not a local asset path".to_string());
    };
    match probe.identify(&path) {
        Ok(dims) if dims.width > 0 && dims.height > 0 => (
            GalleryImage {
                src: src.to_string(),
                width: dims.width,
                height: dims.height,
                probed: true,
            },
            None,
        ),
        Ok(_) => unprobed("zero-sized image".to_string()),
        Err(e) => unprobed(e.to_string()),
    }
}
