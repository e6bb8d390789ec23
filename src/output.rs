//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (project, subsection, page) is its semantic identity,
//! its positional index and title, with file paths and sizes shown as
//! indented context lines. The scan output reads as a content inventory; the
//! generate output maps each page to the file it was written to.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Projects
//! 001 Raanana Jazz Festival (5 images, grid)
//!     Slug: raanana-jazz-festival
//!     A comprehensive visual identity for an annual jazz festival.
//!     001 hero.png 1600x900
//!     002 image-1.png 1200x1200
//! 002 Websites for Jazz Musicians (1 image, none)
//!     Slug: websites-for-jazz-musicians
//!     001 Amit Friedman (2 images)
//!         001 amit-1.png 1440x900
//!
//! Pages
//!     001 About
//!         Source: about.md
//!
//! Config
//!     config.toml
//!     assets/
//!
//! Warnings
//!     /images/jazz-posters/6.png: not found (using 600x800)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! About → about/index.html
//! Work → work/index.html
//!     001 Raanana Jazz Festival → work/raanana-jazz-festival/index.html
//! Contact → contact/index.html
//! Not Found → 404.html
//!
//! Generated 6 pages, copied 14 assets
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::generate::GenerateSummary;
use crate::routes::Route;
use crate::scan::{ABOUT_FILE, ASSETS_DIR, Manifest};
use crate::types::GalleryImage;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Raanana Jazz Festival (5 images, grid)
/// 001 About
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Format an image line: file name and size, flagged when the size is
/// the fallback.
///
/// ```text
/// 001 hero.png 1600x900
/// 002 missing.png 600x800 (not probed)
/// ```
fn image_line(index: usize, image: &GalleryImage) -> String {
    let name = image.src.rsplit('/').next().unwrap_or(&image.src);
    let marker = if image.probed { "" } else { " (not probed)" };
    format!(
        "{} {} {}x{}{}",
        format_index(index),
        name,
        image.width,
        image.height,
        marker
    )
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn warnings_section(warnings: &[String]) -> Vec<String> {
    if warnings.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Warnings".to_string()];
    lines.extend(warnings.iter().map(|w| format!("{}{}", indent(1), w)));
    lines
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered portfolio.
///
/// Information-first: each project leads with its positional index and
/// title; slug, description and images follow as indented context lines.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (i, project) in manifest.catalog.iter().enumerate() {
        let detail = format!(
            "{}, {}",
            plural(project.images.len(), "image"),
            project.layout.as_str()
        );
        lines.push(entity_header(i + 1, &project.title, Some(&detail)));
        lines.push(format!("{}Slug: {}", indent(1), project.slug));

        let desc = truncate_desc(project.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("{}{}", indent(1), desc));
        }

        let mut srcs = vec![&project.hero_image];
        srcs.extend(project.images.iter().filter(|src| **src != project.hero_image));
        for (j, src) in srcs.into_iter().enumerate() {
            lines.push(format!("{}{}", indent(1), image_line(j + 1, &manifest.image(src))));
        }

        for (j, subsection) in project.subsections.iter().enumerate() {
            let detail = plural(subsection.images.len(), "image");
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(j + 1, &subsection.title, Some(&detail))
            ));
            for (k, src) in subsection.images.iter().enumerate() {
                lines.push(format!("{}{}", indent(2), image_line(k + 1, &manifest.image(src))));
            }
        }
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    lines.push(format!(
        "{}{}",
        indent(1),
        entity_header(1, &manifest.about.title, None)
    ));
    if source_root.join(ABOUT_FILE).exists() {
        lines.push(format!("{}Source: {}", indent(2), ABOUT_FILE));
    }
    if let Some(portrait) = &manifest.about.portrait {
        lines.push(format!("{}Portrait: {}", indent(2), portrait));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }

    lines.extend(warnings_section(&manifest.warnings));
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// One-line verdict for `folio check`, followed by any warnings.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let subsections: usize = manifest.catalog.iter().map(|p| p.subsections.len()).sum();
    let mut lines = vec![format!(
        "Content OK: {}, {}, {}",
        plural(manifest.catalog.len(), "project"),
        plural(subsections, "subsection"),
        plural(manifest.images.len(), "image")
    )];
    lines.extend(warnings_section(&manifest.warnings));
    lines
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output.
///
/// Information-first: each page leads with its title, followed by `→` and
/// the output path. Project pages are indented under Work.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let mut project_index = 0;

    for page in &summary.pages {
        let path = page.path.display();
        match page.route {
            Route::Project(_) => {
                project_index += 1;
                lines.push(format!(
                    "{}{} \u{2192} {}",
                    indent(1),
                    entity_header(project_index, &page.title, None),
                    path
                ));
            }
            _ => lines.push(format!("{} \u{2192} {}", page.title, path)),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, copied {}",
        plural(summary.pages.len(), "page"),
        plural(summary.assets, "asset")
    ));
    lines.extend(warnings_section(&summary.warnings));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
