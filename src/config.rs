//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a sparse user file in the content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Lior Doron — Graphic Designer"
//! description = "Graphic designer working with jazz musicians and cultural projects."
//! headline = "Graphic designer for jazz and cultural projects."
//! tagline = "Identity, web, and print for live music."
//! email = "dearliordoron@gmail.com"
//! email_subject = "I want to work with you Lior!"
//!
//! [colors]
//! background = "#faf8f5"
//! foreground = "#1a1a1a"
//! muted = "#6b6b6b"
//! accent = "#8b1538"
//! accent_secondary = "#c17f59"
//!
//! [motion]
//! default = "full"          # "full" or "reduced" before a visitor chooses
//! smooth_scroll = true
//! cursor_follower = true
//! grain = true
//!
//! [gallery]
//! fallback_size = [600, 800] # used when an image cannot be probed
//! breakpoints = [640, 768, 1024]
//! masonry_columns = [2, 3, 4, 5]
//! row_height = "200px"
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog;
use crate::motion::MotionPreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity and contact details.
    pub site: SiteInfo,
    /// Palette exposed as CSS custom properties.
    pub colors: ColorConfig,
    /// Motion defaults and decorative effects.
    pub motion: MotionConfig,
    /// Gallery layout settings.
    pub gallery: GalleryConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gallery = &self.gallery;
        if gallery.fallback_size[0] == 0 || gallery.fallback_size[1] == 0 {
            return Err(ConfigError::Validation(
                "gallery.fallback_size values must be non-zero".into(),
            ));
        }
        if !gallery.breakpoints.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::Validation(
                "gallery.breakpoints must be strictly increasing".into(),
            ));
        }
        if gallery.masonry_columns.len() != gallery.breakpoints.len() + 1 {
            return Err(ConfigError::Validation(
                "gallery.masonry_columns needs one entry more than gallery.breakpoints".into(),
            ));
        }
        if gallery.masonry_columns.contains(&0) {
            return Err(ConfigError::Validation(
                "gallery.masonry_columns values must be non-zero".into(),
            ));
        }
        if self.site.email.trim().is_empty() {
            return Err(ConfigError::Validation("site.email must not be empty".into()));
        }
        if let Some(social) = self.site.socials.iter().find(|s| !catalog::is_web_url(&s.url)) {
            return Err(ConfigError::Validation(format!(
                "site.socials url for {} must be an absolute http(s) URL: {:?}",
                social.name, social.url
            )));
        }
        Ok(())
    }
}

/// Identity and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Document title suffix and Open Graph title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Name shown in the navigation logo alt text.
    pub author: String,
    /// Logo image path; the author name is shown as text when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Kinetic headline on the home page.
    pub headline: String,
    /// Line under the home headline.
    pub tagline: String,
    /// Hero illustration on the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_illustration: Option<String>,
    /// Intro copy on the work index.
    pub work_intro: String,
    /// Contact address for the mailto link.
    pub email: String,
    /// Subject prefilled in the mailto link.
    pub email_subject: String,
    /// Intro copy on the contact page.
    pub contact_intro: String,
    /// Availability note at the bottom of the contact page.
    pub availability: String,
    /// Social links on the contact page.
    pub socials: Vec<SocialLink>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Lior Doron — Graphic Designer".to_string(),
            description: "Graphic designer working with jazz musicians and cultural projects."
                .to_string(),
            author: "Lior Doron".to_string(),
            logo: None,
            headline: "Graphic designer for jazz and cultural projects.".to_string(),
            tagline: "Identity, web, and print for live music.".to_string(),
            hero_illustration: None,
            work_intro: "A collection of projects spanning visual identity, web design, and \
                         print for jazz musicians and cultural initiatives."
                .to_string(),
            email: "dearliordoron@gmail.com".to_string(),
            email_subject: "I want to work with you Lior!".to_string(),
            contact_intro: "Interested in working together on a project? Get in touch to \
                            discuss visual identity, web design, or print materials for your \
                            musical or cultural initiative."
                .to_string(),
            availability: String::new(),
            socials: vec![SocialLink {
                name: "Instagram".to_string(),
                handle: "@dearliordoron".to_string(),
                url: "https://instagram.com/dearliordoron".to_string(),
                color: "#E1306C".to_string(),
            }],
        }
    }
}

/// An outbound social profile link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
    /// Underline color on hover.
    pub color: String,
}

/// Site palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub foreground: String,
    /// Secondary text (captions, metadata lines).
    pub muted: String,
    pub accent: String,
    pub accent_secondary: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#faf8f5".to_string(),
            foreground: "#1a1a1a".to_string(),
            muted: "#6b6b6b".to_string(),
            accent: "#8b1538".to_string(),
            accent_secondary: "#c17f59".to_string(),
        }
    }
}

/// Motion defaults and decorative effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Preference assumed until a visitor toggles it.
    pub default: MotionPreference,
    /// Smooth scrolling under full motion.
    pub smooth_scroll: bool,
    /// Spring-following cursor dot on fine pointers.
    pub cursor_follower: bool,
    /// Animated film-grain overlay.
    pub grain: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default: MotionPreference::Full,
            smooth_scroll: true,
            cursor_follower: true,
            grain: true,
        }
    }
}

/// Gallery layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// `[width, height]` assumed for images that cannot be probed.
    pub fallback_size: [u32; 2],
    /// Viewport widths (px) where the masonry column count changes.
    pub breakpoints: Vec<u32>,
    /// Column count below the first breakpoint, between each pair, and
    /// above the last. One entry more than `breakpoints`.
    pub masonry_columns: Vec<usize>,
    /// Height of the horizontal image strip used by subsections.
    pub row_height: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            fallback_size: [600, 800],
            breakpoints: vec![640, 768, 1024],
            masonry_columns: vec![2, 3, 4, 5],
            row_height: "200px".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image-probing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity and contact
# ---------------------------------------------------------------------------
[site]
title = "Lior Doron — Graphic Designer"
description = "Graphic designer working with jazz musicians and cultural projects."
author = "Lior Doron"
# logo = "/logo.png"
headline = "Graphic designer for jazz and cultural projects."
tagline = "Identity, web, and print for live music."
# hero_illustration = "/images/hero-illustration.png"
work_intro = "A collection of projects spanning visual identity, web design, and print for jazz musicians and cultural initiatives."
email = "dearliordoron@gmail.com"
email_subject = "I want to work with you Lior!"
contact_intro = "Interested in working together on a project? Get in touch to discuss visual identity, web design, or print materials for your musical or cultural initiative."
availability = ""

[[site.socials]]
name = "Instagram"
handle = "@dearliordoron"
url = "https://instagram.com/dearliordoron"
color = "#E1306C"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#faf8f5"
foreground = "#1a1a1a"
muted = "#6b6b6b"          # Captions, years, categories
accent = "#8b1538"
accent_secondary = "#c17f59"

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Preference assumed until a visitor uses the motion toggle: "full" or "reduced".
# The operating system's reduced-motion setting always wins over "full".
default = "full"
smooth_scroll = true
cursor_follower = true
grain = true

# ---------------------------------------------------------------------------
# Galleries
# ---------------------------------------------------------------------------
[gallery]
# [width, height] assumed for images whose size cannot be read.
fallback_size = [600, 800]
# Viewport widths (px) where the masonry column count changes.
breakpoints = [640, 768, 1024]
# Columns below the first breakpoint, between breakpoints, and above the last.
masonry_columns = [2, 3, 4, 5]
# Height of the horizontal image strip used by project subsections.
row_height = "200px"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel image-probing workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-fg: {fg};
    --color-muted: {muted};
    --color-accent: {accent};
    --color-accent-secondary: {accent_secondary};
}}"#,
        bg = colors.background,
        fg = colors.foreground,
        muted = colors.muted,
        accent = colors.accent,
        accent_secondary = colors.accent_secondary,
    )
}

/// Generate the gallery CSS: row height and one media query per masonry
/// column-count band, showing only the packing built for that band.
pub fn generate_gallery_css(gallery: &GalleryConfig) -> String {
    let mut css = format!(
        ":root {{\n    --row-height: {};\n}}\n.masonry-variant {{ display: none; }}\n",
        gallery.row_height
    );
    for (band, columns) in gallery.masonry_columns.iter().enumerate() {
        let min = band.checked_sub(1).map(|i| gallery.breakpoints[i]);
        let max = gallery.breakpoints.get(band).map(|bp| bp - 1);
        let query = match (min, max) {
            (None, None) => None,
            (Some(lo), None) => Some(format!("(min-width: {lo}px)")),
            (None, Some(hi)) => Some(format!("(max-width: {hi}px)")),
            (Some(lo), Some(hi)) => Some(format!("(min-width: {lo}px) and (max-width: {hi}px)")),
        };
        let rule = format!(
            ".masonry-variant[data-columns=\"{columns}\"] {{ display: flex; }}"
        );
        match query {
            Some(q) => css.push_str(&format!("@media {q} {{\n    {rule}\n}}\n")),
            None => {
                css.push_str(&rule);
                css.push('\n');
            }
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.background, "#faf8f5");
        assert_eq!(config.colors.accent, "#8b1538");
    }

    #[test]
    fn default_config_has_gallery_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.fallback_size, [600, 800]);
        assert_eq!(config.gallery.breakpoints, vec![640, 768, 1024]);
        assert_eq!(config.gallery.masonry_columns, vec![2, 3, 4, 5]);
    }

    #[test]
    fn default_motion_is_full_with_effects() {
        let config = SiteConfig::default();
        assert_eq!(config.motion.default, MotionPreference::Full);
        assert!(config.motion.smooth_scroll);
        assert!(config.motion.cursor_follower);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#ff6b35"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#ff6b35");
        assert_eq!(config.colors.background, "#faf8f5");
        assert_eq!(config.site.author, "Lior Doron");
    }

    #[test]
    fn parse_motion_default_reduced() {
        let toml = r#"
[motion]
default = "reduced"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.motion.default, MotionPreference::Reduced);
        assert!(config.motion.grain);
    }

    #[test]
    fn invalid_motion_default_rejected() {
        let toml = r#"
[motion]
default = "sometimes"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn generate_color_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.accent = "#123456".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent: #123456"));
        assert!(css.contains("--color-bg: #faf8f5"));
        assert!(css.contains("--color-accent-secondary:"));
    }

    #[test]
    fn generate_gallery_css_has_one_rule_per_band() {
        let css = generate_gallery_css(&GalleryConfig::default());
        assert!(css.contains("--row-height: 200px"));
        assert!(css.contains("@media (max-width: 639px)"));
        assert!(css.contains("@media (min-width: 640px) and (max-width: 767px)"));
        assert!(css.contains("@media (min-width: 768px) and (max-width: 1023px)"));
        assert!(css.contains("@media (min-width: 1024px)"));
        for columns in 2..=5 {
            assert!(css.contains(&format!("[data-columns=\"{columns}\"]")));
        }
    }

    #[test]
    fn generate_gallery_css_without_breakpoints_is_unconditional() {
        let gallery = GalleryConfig {
            breakpoints: vec![],
            masonry_columns: vec![3],
            ..GalleryConfig::default()
        };
        let css = generate_gallery_css(&gallery);
        assert!(!css.contains("@media"));
        assert!(css.contains(".masonry-variant[data-columns=\"3\"] { display: flex; }"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.background, "#faf8f5");
        assert_eq!(config.site.email, "dearliordoron@gmail.com");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
email = "studio@example.com"

[colors]
background = "#ffffff"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.email, "studio@example.com");
        assert_eq!(config.colors.background, "#ffffff");
        // Unspecified values should be defaults
        assert_eq!(config.colors.foreground, "#1a1a1a");
        assert_eq!(config.site.socials.len(), 1);
    }

    #[test]
    fn load_config_socials_replace_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[[site.socials]]
name = "Behance"
handle = "liordoron"
url = "https://behance.net/liordoron"
color = "#1769ff"

[[site.socials]]
name = "Instagram"
handle = "@dearliordoron"
url = "https://instagram.com/dearliordoron"
color = "#E1306C"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        let names: Vec<_> = config.site.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Behance", "Instagram"]);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Processing config tests
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let config = ProcessingConfig {
            max_processes: None,
        };
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let config = ProcessingConfig {
            max_processes: Some(99999),
        };
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_never_zero() {
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[gallery]
row_height = "200px"
breakpoints = [640, 768]
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[gallery]
row_height = "160px"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let gallery = merged.get("gallery").unwrap();
        assert_eq!(gallery.get("row_height").unwrap().as_str(), Some("160px"));
        assert_eq!(gallery.get("breakpoints").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("columns = [2, 3, 4, 5]").unwrap();
        let overlay: toml::Value = toml::from_str("columns = [1]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("columns").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[motion]
smoth_scroll = false
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[themes]\nx = 1\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_fallback_size_zero() {
        let mut config = SiteConfig::default();
        config.gallery.fallback_size = [0, 800];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_breakpoints_must_increase() {
        let mut config = SiteConfig::default();
        config.gallery.breakpoints = vec![768, 640, 1024];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("breakpoints"));
    }

    #[test]
    fn validate_column_count_matches_breakpoints() {
        let mut config = SiteConfig::default();
        config.gallery.masonry_columns = vec![2, 3];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_columns_rejected() {
        let mut config = SiteConfig::default();
        config.gallery.masonry_columns = vec![0, 3, 4, 5];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_email_rejected() {
        let mut config = SiteConfig::default();
        config.site.email = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_social_url_must_be_web_link() {
        let mut config = SiteConfig::default();
        config.site.socials[0].url = "javascript:alert(1)".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.site.socials[0].url = "instagram.com/dearliordoron".into();
        assert!(config.validate().is_err());

        config.site.socials[0].url = "https://instagram.com/dearliordoron".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[gallery]\nmasonry_columns = [2]\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.site.work_intro, defaults.site.work_intro);
        assert_eq!(config.site.contact_intro, defaults.site.contact_intro);
        assert_eq!(config.site.socials.len(), 1);
        assert_eq!(config.colors.accent, defaults.colors.accent);
        assert_eq!(config.motion.default, MotionPreference::Full);
        assert_eq!(config.gallery.masonry_columns, defaults.gallery.masonry_columns);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[site]", "[colors]", "[motion]", "[gallery]", "[processing]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        for key in ["site", "colors", "motion", "gallery", "processing"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
