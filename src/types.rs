//! Shared types serialized between the scan and generate stages.
//!
//! Projects are read from `projects.toml` by the scan stage, enriched with
//! probed image dimensions, written to the manifest as JSON, and read back
//! unchanged by the generate stage.

use serde::{Deserialize, Serialize};

/// One portfolio piece.
///
/// Projects are immutable once scanned. Their position in `projects.toml`
/// is their display order and the order `next project` follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// URL segment under `/work/`. Unique across the catalog.
    pub slug: String,
    pub category: String,
    /// Free-form year or range, e.g. `"2022-2024"`.
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub hero_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Accent color as `#rgb` or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// External project website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// How the main image list is laid out on the project page.
    #[serde(default)]
    pub layout: GalleryLayout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
}

/// A named part of a project with its own images, e.g. one client website
/// within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subsection {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Layout used for a project's main image list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    /// Shortest-column packing, responsive column count.
    Masonry,
    /// Square tiles.
    Grid,
    /// Fixed-height horizontal strip.
    Row,
    /// Full-width stacked images with scroll-linked transforms.
    #[default]
    Parallax,
    /// Main images are not shown (subsections carry the gallery).
    None,
}

impl GalleryLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryLayout::Masonry => "masonry",
            GalleryLayout::Grid => "grid",
            GalleryLayout::Row => "row",
            GalleryLayout::Parallax => "parallax",
            GalleryLayout::None => "none",
        }
    }
}

/// An image reference with its intrinsic size.
///
/// `probed` is false when the file could not be read and the size is the
/// configured fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub probed: bool,
}

impl GalleryImage {
    /// Height divided by width; 1.0 for degenerate sizes.
    pub fn aspect(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.height as f64 / self.width as f64
        }
    }
}

/// The about page, read from `about.md`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPage {
    /// Title from the first `# heading`, or "About".
    pub title: String,
    /// Markdown body with the title heading removed.
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults_to_parallax() {
        assert_eq!(GalleryLayout::default(), GalleryLayout::Parallax);
    }

    #[test]
    fn layout_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            layout: GalleryLayout,
        }
        let w: Wrapper = toml::from_str(r#"layout = "masonry""#).unwrap();
        assert_eq!(w.layout, GalleryLayout::Masonry);
    }

    #[test]
    fn project_rejects_unknown_fields() {
        let result: Result<Project, _> = toml::from_str(
            r##"
id = "x"
title = "X"
slug = "x"
category = "c"
year = "2024"
description = "d"
hero_image = "/h.png"
colour = "#fff"
"##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn aspect_is_height_over_width() {
        let img = GalleryImage {
            src: "a.png".into(),
            width: 600,
            height: 800,
            probed: true,
        };
        assert!((img.aspect() - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_of_zero_size_is_square() {
        let img = GalleryImage {
            src: "a.png".into(),
            width: 0,
            height: 800,
            probed: false,
        };
        assert_eq!(img.aspect(), 1.0);
    }
}
