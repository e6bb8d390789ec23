//! Shared test utilities for the folio test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let catalog = sample_catalog();
//! assert_eq!(catalog.next_after("posters-for-jazz-performances").unwrap().slug,
//!            "raanana-jazz-festival");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::scan::Manifest;
use crate::types::{AboutPage, GalleryLayout, Project, Subsection};
use std::collections::BTreeMap;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Sample data
// =========================================================================

/// A minimal valid project whose id and slug are both `slug`.
pub fn sample_project(slug: &str) -> Project {
    Project {
        id: slug.to_string(),
        title: format!("Project {slug}"),
        slug: slug.to_string(),
        category: "Print Design".to_string(),
        year: "2024".to_string(),
        description: "A sample project.".to_string(),
        services: vec!["Typography".to_string()],
        hero_image: format!("/images/{slug}/hero.png"),
        images: vec![format!("/images/{slug}/1.png")],
        color: None,
        link: None,
        instagram: None,
        layout: GalleryLayout::default(),
        subsections: Vec::new(),
    }
}

fn paths(dir: &str, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|n| format!("/images/{dir}/{n}"))
        .collect()
}

/// The three-project portfolio, in display order.
pub fn sample_catalog() -> Catalog {
    let festival = Project {
        id: "raanana-jazz".into(),
        title: "Raanana Jazz Festival".into(),
        slug: "raanana-jazz-festival".into(),
        category: "Festival Identity".into(),
        year: "2024".into(),
        description: "A comprehensive visual identity for an annual jazz festival.".into(),
        services: vec![
            "Visual Identity".into(),
            "Website Design".into(),
            "Merchandise".into(),
            "Social Media".into(),
        ],
        hero_image: "/images/raanana-jazz/hero.png".into(),
        images: paths(
            "raanana-jazz",
            &["image-1.png", "image-2.jpg", "image-3.jpg", "image-4.jpg", "image-5.jpg"],
        ),
        color: Some("#FF6B35".into()),
        link: Some("https://www.raananajazzfestival.com".into()),
        instagram: Some("https://www.instagram.com/world.jazz.music".into()),
        layout: GalleryLayout::Grid,
        subsections: Vec::new(),
    };

    let websites = Project {
        id: "jazz-websites".into(),
        title: "Websites for Jazz Musicians".into(),
        slug: "websites-for-jazz-musicians".into(),
        category: "Web Design".into(),
        year: "2023-2024".into(),
        description: "A series of website projects for jazz musicians.".into(),
        services: vec!["Web Design".into(), "Logo Design".into()],
        hero_image: "/images/jazz-websites/gil-1.png".into(),
        images: paths("jazz-websites", &["gil-1.png"]),
        color: Some("#4ECDC4".into()),
        link: None,
        instagram: None,
        layout: GalleryLayout::None,
        subsections: vec![
            Subsection {
                title: "Amit Friedman".into(),
                description: "Website and visual identity for pianist Amit Friedman.".into(),
                images: paths("jazz-websites", &["amit-1.png", "amit-2.png"]),
                link: Some("https://www.amitfriedman.com".into()),
            },
            Subsection {
                title: "Gil Livni".into(),
                description: "Website for bassist Gil Livni.".into(),
                images: paths("jazz-websites", &["gil-1.png", "gil-2.png"]),
                link: None,
            },
        ],
    };

    let posters = Project {
        id: "jazz-posters".into(),
        title: "Posters for Jazz Performances".into(),
        slug: "posters-for-jazz-performances".into(),
        category: "Print Design".into(),
        year: "2022-2024".into(),
        description: "A collection of posters for live jazz performances.".into(),
        services: vec!["Poster Design".into(), "Typography".into()],
        hero_image: "/images/jazz-posters/hero.png".into(),
        images: paths("jazz-posters", &["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"]),
        color: Some("#F7B731".into()),
        link: None,
        instagram: None,
        layout: GalleryLayout::Masonry,
        subsections: Vec::new(),
    };

    Catalog {
        projects: vec![festival, websites, posters],
    }
}

/// [`sample_catalog`] with default config and no probed images, so every
/// image renders at the fallback size.
pub fn sample_manifest() -> Manifest {
    Manifest {
        config: SiteConfig::default(),
        catalog: sample_catalog(),
        about: AboutPage {
            title: "About".into(),
            body: "Lior's connection to jazz began behind the scenes.".into(),
            portrait: None,
        },
        images: BTreeMap::new(),
        warnings: Vec::new(),
    }
}
