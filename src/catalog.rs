//! The project catalog: a fixed-order list of [`Project`] records.
//!
//! ## File Format
//!
//! `projects.toml` in the content root holds an ordered `[[projects]]` array.
//! File order is display order on the home and work pages, and the order
//! "next project" follows:
//!
//! ```toml
//! [[projects]]
//! id = "jazz-posters"
//! title = "Posters for Jazz Performances"
//! slug = "posters-for-jazz-performances"
//! category = "Print Design"
//! year = "2022-2024"
//! description = "A collection of posters for live jazz performances."
//! services = ["Poster Design", "Typography"]
//! hero_image = "/images/jazz-posters/hero.png"
//! images = ["/images/jazz-posters/1.png"]
//! color = "#F7B731"
//! layout = "masonry"
//! ```
//!
//! ## Validation
//!
//! - The catalog is not empty
//! - Ids and slugs are unique
//! - Slugs are URL-safe (see [`naming::is_valid_slug`])
//! - Accent colors are `#rgb` or `#rrggbb`
//! - External links are absolute `http(s)` URLs

use crate::naming;
use crate::types::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

pub const CATALOG_FILE: &str = "projects.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading projects.toml: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in projects.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("projects.toml defines no projects")]
    Empty,
    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Project slug is not URL-safe: {0:?}")]
    InvalidSlug(String),
    #[error("Project {slug}: invalid accent color {color:?}")]
    InvalidColor { slug: String, color: String },
    #[error("Project {slug}: {field} is not an absolute http(s) URL: {value:?}")]
    InvalidLink {
        slug: String,
        field: &'static str,
        value: String,
    },
}

/// Ordered, validated list of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Parse a catalog from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load `projects.toml` from the content root.
    pub fn load(root: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(root.join(CATALOG_FILE))?;
        Self::from_toml(&text)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Find a project by slug. `None` for an unknown slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// The project after `slug` in list order, wrapping from the last to
    /// the first. `None` when `slug` is unknown.
    pub fn next_after(&self, slug: &str) -> Option<&Project> {
        let index = self.projects.iter().position(|p| p.slug == slug)?;
        self.projects.get((index + 1) % self.projects.len())
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !naming::is_valid_slug(&project.slug) {
                return Err(CatalogError::InvalidSlug(project.slug.clone()));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
            if !ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if let Some(color) = project.color.as_deref().filter(|c| !is_hex_color(c)) {
                return Err(CatalogError::InvalidColor {
                    slug: project.slug.clone(),
                    color: color.to_string(),
                });
            }
            check_link(&project.slug, "link", project.link.as_deref())?;
            check_link(&project.slug, "instagram", project.instagram.as_deref())?;
            for sub in &project.subsections {
                check_link(&project.slug, "subsection link", sub.link.as_deref())?;
            }
        }
        Ok(())
    }

    /// Every image path referenced by the catalog, in page order, without
    /// duplicates.
    pub fn image_paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();
        for project in &self.projects {
            let all = std::iter::once(project.hero_image.as_str())
                .chain(project.images.iter().map(String::as_str))
                .chain(
                    project
                        .subsections
                        .iter()
                        .flat_map(|s| s.images.iter().map(String::as_str)),
                );
            for path in all {
                if seen.insert(path) {
                    paths.push(path);
                }
            }
        }
        paths
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

fn check_link(slug: &str, field: &'static str, value: Option<&str>) -> Result<(), CatalogError> {
    let Some(value) = value else {
        return Ok(());
    };
    if is_web_url(value) {
        return Ok(());
    }
    Err(CatalogError::InvalidLink {
        slug: slug.to_string(),
        field,
        value: value.to_string(),
    })
}

/// Absolute `http`/`https` URL, the only kind rendered as an outbound link.
pub fn is_web_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_catalog, sample_project};
    use tempfile::TempDir;

    #[test]
    fn by_slug_finds_every_known_project() {
        let catalog = sample_catalog();
        for project in catalog.iter() {
            let found = catalog.by_slug(&project.slug).unwrap();
            assert_eq!(found.id, project.id);
        }
    }

    #[test]
    fn by_slug_unknown_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.by_slug("no-such-project").is_none());
        assert!(catalog.by_slug("").is_none());
    }

    #[test]
    fn next_after_follows_list_order() {
        let catalog = sample_catalog();
        let next = catalog.next_after("raanana-jazz-festival").unwrap();
        assert_eq!(next.slug, "websites-for-jazz-musicians");
        let next = catalog.next_after("websites-for-jazz-musicians").unwrap();
        assert_eq!(next.slug, "posters-for-jazz-performances");
    }

    #[test]
    fn next_after_wraps_last_to_first() {
        let catalog = sample_catalog();
        let next = catalog.next_after("posters-for-jazz-performances").unwrap();
        assert_eq!(next.slug, "raanana-jazz-festival");
    }

    #[test]
    fn next_after_unknown_is_none() {
        assert!(sample_catalog().next_after("missing").is_none());
    }

    #[test]
    fn next_after_single_project_is_itself() {
        let catalog = Catalog {
            projects: vec![sample_project("solo")],
        };
        assert_eq!(catalog.next_after("solo").unwrap().slug, "solo");
    }

    #[test]
    fn sample_catalog_slugs_are_unique() {
        let catalog = sample_catalog();
        let slugs: HashSet<_> = catalog.iter().map(|p| &p.slug).collect();
        assert_eq!(slugs.len(), catalog.len());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn duplicate_slug_rejected() {
        let mut second = sample_project("dup");
        second.id = "other".into();
        let catalog = Catalog {
            projects: vec![sample_project("dup"), second],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateSlug(s)) if s == "dup"
        ));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut second = sample_project("two");
        second.id = "one".into();
        let catalog = Catalog {
            projects: vec![sample_project("one"), second],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(
            Catalog::default().validate(),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn invalid_slug_rejected() {
        let catalog = Catalog {
            projects: vec![sample_project("Not A Slug")],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidSlug(_))
        ));
    }

    #[test]
    fn invalid_color_rejected() {
        let mut project = sample_project("p");
        project.color = Some("orange".into());
        let catalog = Catalog {
            projects: vec![project],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidColor { .. })
        ));
    }

    #[test]
    fn relative_link_rejected() {
        let mut project = sample_project("p");
        project.link = Some("www.example.com".into());
        let catalog = Catalog {
            projects: vec![project],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidLink { field: "link", .. })
        ));
    }

    #[test]
    fn non_http_link_rejected() {
        let mut project = sample_project("p");
        project.instagram = Some("javascript:alert(1)".into());
        let catalog = Catalog {
            projects: vec![project],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#FF6B35"));
        assert!(is_hex_color("#fff"));
        assert!(!is_hex_color("FF6B35"));
        assert!(!is_hex_color("#ff6b3"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn from_toml_preserves_file_order() {
        let catalog = Catalog::from_toml(
            r#"
[[projects]]
id = "b"
title = "B"
slug = "b"
category = "c"
year = "2024"
description = "d"
hero_image = "/b.png"

[[projects]]
id = "a"
title = "A"
slug = "a"
category = "c"
year = "2023"
description = "d"
hero_image = "/a.png"
"#,
        )
        .unwrap();
        let slugs: Vec<_> = catalog.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);
    }

    #[test]
    fn load_reads_projects_file() {
        let tmp = TempDir::new().unwrap();
        let text = toml::to_string(&sample_catalog()).unwrap();
        fs::write(tmp.path().join(CATALOG_FILE), text).unwrap();
        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog, sample_catalog());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Catalog::load(tmp.path()),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn image_paths_are_deduplicated_in_order() {
        let catalog = sample_catalog();
        let paths = catalog.image_paths();
        assert_eq!(paths[0], "/images/raanana-jazz/hero.png");
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        // gil-1.png is both the hero and a subsection image
        assert_eq!(
            paths
                .iter()
                .filter(|p| **p == "/images/jazz-websites/gil-1.png")
                .count(),
            1
        );
    }
}
