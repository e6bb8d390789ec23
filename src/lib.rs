//! # Folio
//!
//! A static site generator for a graphic designer's portfolio. A short,
//! ordered project list and an about page become a small site: home, work
//! index, one page per project, about, contact, and a not-found page. The
//! pages carry scroll-linked and pointer-linked animation that switches off
//! entirely under a reduced-motion preference.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (projects, config, image sizes)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON you can inspect between stages, and
//! the generate stage renders from it alone, apart from copying `assets/`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads `projects.toml`, `about.md`, `config.toml`, probes image sizes |
//! | [`generate`] | Stage 2: renders every route with Maud and copies assets |
//! | [`catalog`] | Fixed-order project list with lookup, wrap-around next, and validation |
//! | [`config`] | Layered `config.toml` loading, validation, and CSS variables |
//! | [`types`] | Shared types serialized between stages (`Project`, `GalleryImage`) |
//! | [`routes`] | The page table and navigation links |
//! | [`naming`] | Slug rules and DOM id derivation |
//! | [`motion`] | Animation presets rendered to CSS, kinetic text, motion preference |
//! | [`gallery`] | Masonry, grid, row, and parallax image layouts |
//! | [`lightbox`] | Full-screen viewer whose state lives in the URL fragment |
//! | [`imaging`] | Header-only image size probing on the rayon pool |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Decide at Build Time
//!
//! Everything that does not depend on the visitor is computed in Rust:
//! stagger delays, kinetic character splits, masonry column packing,
//! keyframes for every variant and scroll transform, and lightbox anchors.
//! The embedded script only handles what cannot be known ahead of time:
//! pointer position, viewport intersection, and the saved motion override.
//!
//! ## One Switch for Motion
//!
//! All animation CSS is scoped under `:root[data-motion="full"]`. The head
//! bootstrap sets the attribute from the saved override and the operating
//! system's reduced-motion signal before first paint; the toggle button
//! flips it. Nothing else has to know about the preference.
//!
//! ## Images Served As Authored
//!
//! The designer's images are copied verbatim. Only their dimensions are
//! read, so layouts reserve the right space and masonry columns balance.

pub mod catalog;
pub mod config;
pub mod gallery;
pub mod generate;
pub mod imaging;
pub mod lightbox;
pub mod motion;
pub mod naming;
pub mod output;
pub mod routes;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
