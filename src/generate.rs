//! HTML site generation.
//!
//! Stage 2 of the folio build pipeline. Takes the scanned manifest and
//! writes the final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): kinetic headline, tagline, featured projects
//! - **Work** (`/work/index.html`): every project as a tilting card
//! - **Project pages** (`/work/{slug}/index.html`): hero, overview, gallery,
//!   subsections, and a link to the next project
//! - **About** (`/about/index.html`): markdown body from `about.md`
//! - **Contact** (`/contact/index.html`): mailto card and social links
//! - **Not found** (`/404.html`)
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── about/index.html
//! ├── contact/index.html
//! ├── work/
//! │   ├── index.html
//! │   └── raanana-jazz-festival/index.html
//! ├── logo.png                  # copied from content/assets/
//! └── images/...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout and typography (colors injected from config)
//! - `static/motion.js`: motion toggle, scroll reveals, pointer effects, and
//!   the Escape key for the lightbox
//!
//! The motion stylesheet is generated from [`crate::motion`] and appended.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::gallery::{Gallery, GalleryItem};
use crate::motion::presets::{
    FADE_IN, FADE_IN_UP, HOVER_LIFT, HOVER_NUDGE, HOVER_SCALE, MASK_REVEAL, PAGE_ENTER, SCALE_IN,
    SCROLL_REVEAL, SLIDE_IN_LEFT, Stagger, TAP_SCALE, delay_style, fmt_num, stagger,
};
use crate::motion::scroll::{HERO_FADE, HERO_PARALLAX, RHYTHM_SLIDE, RHYTHM_SPIN};
use crate::motion::{self, MotionSettings, kinetic, preference};
use crate::naming;
use crate::routes::{NAV_LINKS, Route, site_routes};
use crate::scan::{ASSETS_DIR, Manifest, ScanError};
use crate::types::{GalleryLayout, Project};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ScanError),
    #[error("Asset copy error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// A page written by the generate stage.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub route: Route,
    /// Project title, or the page's name for fixed pages.
    pub title: String,
    /// Relative to the output directory.
    pub path: PathBuf,
}

/// What the generate stage wrote.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// In build order.
    pub pages: Vec<GeneratedPage>,
    /// Number of files copied from `assets/`.
    pub assets: usize,
    /// Scan warnings carried through for the report.
    pub warnings: Vec<String>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/motion.js");

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let manifest = Manifest::load(manifest_path)?;

    fs::create_dir_all(output_dir)?;
    let assets = copy_assets(&source_dir.join(ASSETS_DIR), output_dir)?;

    let mut pages = Vec::new();
    for (route, markup) in render_site(&manifest) {
        let relative = route.output_path();
        let path = output_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, markup.into_string())?;
        pages.push(GeneratedPage {
            title: page_title(&manifest, &route),
            route,
            path: relative,
        });
    }

    Ok(GenerateSummary {
        pages,
        assets,
        warnings: manifest.warnings.clone(),
    })
}

/// Render every page of the site without touching the filesystem.
pub fn render_site(manifest: &Manifest) -> Vec<(Route, Markup)> {
    let site = Site::new(manifest);
    site_routes(&manifest.catalog)
        .into_iter()
        .map(|route| {
            let markup = site.render(&route);
            (route, markup)
        })
        .collect()
}

fn page_title(manifest: &Manifest, route: &Route) -> String {
    match route {
        Route::Home => "Home".to_string(),
        Route::About => manifest.about.title.clone(),
        Route::Work => "Work".to_string(),
        Route::Project(slug) => manifest
            .catalog
            .by_slug(slug)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| slug.clone()),
        Route::Contact => "Contact".to_string(),
        Route::NotFound => "Not Found".to_string(),
    }
}

/// Copy `assets/` into the output root, preserving relative paths.
/// Dotfiles are skipped. A missing assets directory copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Shared inputs of every page.
struct Site<'a> {
    manifest: &'a Manifest,
    css: String,
    motion: MotionSettings,
}

impl<'a> Site<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let config = &manifest.config;
        let css = format!(
            "{}\n\n{}\n\n{}\n\n{}",
            config::generate_color_css(&config.colors),
            config::generate_gallery_css(&config.gallery),
            CSS_STATIC,
            motion::stylesheet()
        );
        // The configured default stands in for the visitor's override until
        // the bootstrap script reads the real one.
        let motion = MotionSettings {
            user: Some(config.motion.default),
            system: preference::MotionPreference::Full,
        };
        Self {
            manifest,
            css,
            motion,
        }
    }

    fn config(&self) -> &SiteConfig {
        &self.manifest.config
    }

    fn render(&self, route: &Route) -> Markup {
        match route {
            Route::Home => render_home(self),
            Route::About => render_about(self),
            Route::Work => render_work(self),
            Route::Project(slug) => match self.manifest.catalog.by_slug(slug) {
                Some(project) => render_project(self, project),
                None => render_not_found(self),
            },
            Route::Contact => render_contact(self),
            Route::NotFound => render_not_found(self),
        }
    }
}

// ============================================================================
// Shared chrome
// ============================================================================

fn base_document(
    site: &Site,
    route: &Route,
    title: Option<&str>,
    body_class: &str,
    content: Markup,
) -> Markup {
    let config = site.config();
    let full_title = match title {
        Some(t) => format!("{} | {}", t, config.site.title),
        None => config.site.title.clone(),
    };
    html! {
        (DOCTYPE)
        html lang="en"
            data-motion=(site.motion.effective().as_str())
            data-motion-default=(config.motion.default.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5";
                title { (full_title) }
                meta name="description" content=(config.site.description);
                meta property="og:type" content="website";
                meta property="og:title" content=(full_title);
                meta property="og:description" content=(config.site.description);
                @if let Some(logo) = &config.site.logo {
                    meta property="og:image" content=(logo);
                    link rel="icon" href=(logo);
                }
                script { (PreEscaped(preference::bootstrap_script(config.motion.default))) }
                style { (PreEscaped(&site.css)) }
            }
            body class=(body_class)
                data-smooth-scroll=(flag(config.motion.smooth_scroll))
                data-cursor=(flag(config.motion.cursor_follower)) {
                a.skip-link href="#main" { "Skip to content" }
                @if config.motion.grain {
                    div.grain aria-hidden="true" {}
                }
                @if config.motion.cursor_follower {
                    div.cursor aria-hidden="true" {
                        div.cursor-dot {}
                        div.cursor-ring {}
                    }
                }
                (render_nav(config, route))
                main #main data-anim=(PAGE_ENTER.name) {
                    (content)
                }
                (render_motion_toggle(&site.motion))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Top bar with the logo, the desktop links, and a checkbox-driven menu for
/// narrow screens.
pub fn render_nav(config: &SiteConfig, current: &Route) -> Markup {
    let links = Stagger::new(0.2, stagger::FAST);
    html! {
        header.site-nav {
            div.nav-inner {
                a.nav-logo href="/" data-anim=(SLIDE_IN_LEFT.name) aria-label="Home" {
                    @if let Some(logo) = &config.site.logo {
                        img src=(logo) alt=(config.site.author);
                    } @else {
                        span.nav-wordmark { (config.site.author) }
                    }
                }
                input.nav-toggle type="checkbox" id="nav-toggle" aria-hidden="true";
                label.nav-hamburger for="nav-toggle" aria-label="Toggle menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.nav-links aria-label="Main" {
                    ul {
                        @for (i, link) in NAV_LINKS.iter().enumerate() {
                            @let active = link.is_active(current);
                            li data-anim=(FADE_IN_UP.name) style=(links.style(i)) {
                                a href=(link.href())
                                    class=[active.then_some("active")]
                                    aria-current=[active.then_some("page")] {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fixed button flipping the motion preference. The script rewrites the
/// labels after reading the saved override.
fn render_motion_toggle(settings: &MotionSettings) -> Markup {
    html! {
        button.motion-toggle type="button" data-motion-toggle=""
            aria-label=(settings.toggle_aria_label())
            aria-pressed=(flag(settings.should_reduce_motion())) {
            span.motion-toggle-icon aria-hidden="true" {}
            span.motion-toggle-label { (settings.toggle_label()) }
        }
    }
}

fn flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

fn project_meta(project: &Project) -> String {
    format!("{} • {}", project.category, project.year)
}

fn accent_style(project: &Project) -> Option<String> {
    project
        .color
        .as_ref()
        .map(|c| format!("--project-color: {}", c))
}

fn external_link(href: &str, label: &str) -> Markup {
    html! {
        a.external-link href=(href) target="_blank" rel="noopener noreferrer" data-hover=(HOVER_NUDGE.name) {
            (label) " ↗"
        }
    }
}

// ============================================================================
// Home
// ============================================================================

fn render_home(site: &Site) -> Markup {
    let config = site.config();
    let manifest = site.manifest;
    let content = html! {
        div.background aria-hidden="true" {
            div.blob.blob-primary {}
            div.blob.blob-secondary {}
        }
        section.hero {
            @if let Some(src) = &config.site.hero_illustration {
                @let image = manifest.image(src);
                div.hero-illustration data-anim=(SCALE_IN.name) {
                    img src=(image.src) alt="" width=(image.width) height=(image.height);
                }
            }
            h1.headline { (kinetic::render(&config.site.headline, 0.3)) }
            p.tagline data-anim=(FADE_IN_UP.name) style=(delay_style(0.8)) {
                (config.site.tagline)
            }
            div.hero-cta data-anim=(FADE_IN_UP.name) style=(delay_style(1.0)) {
                a.button href=(Route::Work.href())
                    data-hover=(HOVER_SCALE.name) data-tap=(TAP_SCALE.name) {
                    "View Work"
                }
            }
        }
        section.featured {
            div.section-heading data-reveal=(SCROLL_REVEAL.name) {
                h2 { "Featured Projects" }
                div.accent-rule {}
            }
            div.featured-list {
                @for (i, project) in manifest.catalog.iter().enumerate() {
                    div data-reveal=(SCROLL_REVEAL.name) style=(delay_style(i as f64 * 0.1)) {
                        (render_feature_card(site, project))
                    }
                }
            }
            div.featured-more data-reveal=(SCROLL_REVEAL.name) style=(delay_style(0.4)) {
                a href=(Route::Work.href()) data-hover=(HOVER_NUDGE.name) { "View All Projects →" }
            }
        }
    };
    base_document(site, &Route::Home, None, "home", content)
}

fn render_feature_card(site: &Site, project: &Project) -> Markup {
    let hero = site.manifest.image(&project.hero_image);
    let route = Route::Project(project.slug.clone());
    html! {
        a.feature-card href=(route.href()) style=[accent_style(project)] {
            div.feature-media data-hover=(HOVER_SCALE.name) {
                img src=(hero.src) alt=(project.title) width=(hero.width) height=(hero.height) loading="lazy";
            }
            div.feature-overlay {
                h3 { (project.title) }
                p { (project_meta(project)) }
            }
            div.accent-bar {}
        }
    }
}

// ============================================================================
// Work
// ============================================================================

fn render_work(site: &Site) -> Markup {
    let config = site.config();
    let cards = Stagger::new(0.3, stagger::NORMAL);
    let content = html! {
        div.page.work-page {
            header.page-header {
                h1 { (kinetic::render("Selected Work", 0.0)) }
                p.intro data-anim=(FADE_IN_UP.name) style=(delay_style(0.5)) {
                    (config.site.work_intro)
                }
            }
            div.project-grid {
                @for (i, project) in site.manifest.catalog.iter().enumerate() {
                    div data-anim=(FADE_IN_UP.name) style=(cards.style(i)) {
                        (render_project_card(site, project))
                    }
                }
            }
        }
    };
    base_document(site, &Route::Work, Some("Work"), "work", content)
}

fn render_project_card(site: &Site, project: &Project) -> Markup {
    let hero = site.manifest.image(&project.hero_image);
    let route = Route::Project(project.slug.clone());
    html! {
        a.project-card href=(route.href()) data-tilt="5" style=[accent_style(project)] {
            div.card-media {
                div.card-image data-hover=(HOVER_SCALE.name) {
                    img src=(hero.src) alt=(project.title) width=(hero.width) height=(hero.height) loading="lazy";
                }
                div.accent-bar {}
            }
            div.card-info {
                div.card-title-row {
                    h3 { (project.title) }
                    span.card-year { (project.year) }
                }
                p.card-category { (project.category) }
            }
        }
    }
}

// ============================================================================
// Project
// ============================================================================

fn render_project(site: &Site, project: &Project) -> Markup {
    let manifest = site.manifest;
    let config = site.config();
    let hero = manifest.image(&project.hero_image);
    let route = Route::Project(project.slug.clone());

    let main_gallery = Gallery::new(
        naming::gallery_id(&project.slug, None),
        project.layout,
        gallery_items(manifest, &project.images, &project.title),
    );
    let services = Stagger::new(0.0, stagger::NORMAL);

    let content = html! {
        article.project-page style=[accent_style(project)] {
            section.project-hero {
                div.hero-media data-scroll=(HERO_PARALLAX.name) {
                    div.hero-mask data-anim=(MASK_REVEAL.name) {
                        img src=(hero.src) alt=(project.title) width=(hero.width) height=(hero.height);
                    }
                    div.hero-shade {}
                }
                div.hero-content data-scroll=(HERO_FADE.name) {
                    div.hero-inner data-anim=(FADE_IN_UP.name) style=(delay_style(0.8)) {
                        @if project.color.is_some() {
                            div.hero-rule {}
                        }
                        h1 { (project.title) }
                        p.hero-meta { (project_meta(project)) }
                    }
                }
            }
            section.project-overview {
                div.overview-text data-reveal=(SCROLL_REVEAL.name) {
                    h2 { "Overview" }
                    p { (project.description) }
                }
                div.overview-side data-reveal=(SCROLL_REVEAL.name) style=(delay_style(0.2)) {
                    @if !project.services.is_empty() {
                        h3 { "Services" }
                        ul.services {
                            @for (i, service) in project.services.iter().enumerate() {
                                li data-reveal=(SLIDE_IN_LEFT.name) style=(services.style(i)) { (service) }
                            }
                        }
                    }
                    @if project.link.is_some() || project.instagram.is_some() {
                        div.project-links {
                            @if let Some(link) = &project.link {
                                (external_link(link, "Visit Website"))
                            }
                            @if let Some(instagram) = &project.instagram {
                                (external_link(instagram, "Instagram"))
                            }
                        }
                    }
                }
            }
            @if project.layout != GalleryLayout::None && !project.images.is_empty() {
                section.project-gallery {
                    (main_gallery.render(&config.gallery))
                }
            }
            @for (i, subsection) in project.subsections.iter().enumerate() {
                @let gallery = Gallery::new(
                    naming::gallery_id(&project.slug, Some((i, &subsection.title))),
                    GalleryLayout::Row,
                    gallery_items(manifest, &subsection.images, &subsection.title),
                );
                section.project-subsection {
                    div.subsection-head data-reveal=(SCROLL_REVEAL.name) {
                        div {
                            h2 { (subsection.title) }
                            p { (subsection.description) }
                        }
                        @if let Some(link) = &subsection.link {
                            (external_link(link, "Visit Website"))
                        }
                    }
                    (gallery.render(&config.gallery))
                }
            }
            @if let Some(next) = manifest.catalog.next_after(&project.slug) {
                (render_next_project(next))
            }
        }
    };
    base_document(site, &route, Some(&project.title), "project", content)
}

/// Size-annotated items for a list of image paths, alt text numbered from 1.
fn gallery_items(manifest: &Manifest, srcs: &[String], label: &str) -> Vec<GalleryItem> {
    srcs.iter()
        .enumerate()
        .map(|(i, src)| GalleryItem {
            image: manifest.image(src),
            alt: format!("{} image {}", label, i + 1),
        })
        .collect()
}

fn render_next_project(next: &Project) -> Markup {
    html! {
        section.next-project data-reveal=(FADE_IN_UP.name) {
            p.eyebrow { "Next Project" }
            a.next-link href=(Route::Project(next.slug.clone()).href()) data-hover=(HOVER_NUDGE.name) {
                h2 { (next.title) " " span.arrow aria-hidden="true" { "→" } }
            }
            p.next-meta { (project_meta(next)) }
        }
    }
}

// ============================================================================
// About
// ============================================================================

fn render_about(site: &Site) -> Markup {
    let manifest = site.manifest;
    let about = &manifest.about;
    let parser = Parser::new(&about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        div.page.about-page {
            header.page-header {
                h1 { (kinetic::render(&about.title, 0.0)) }
            }
            section.about-body data-reveal=(SCROLL_REVEAL.name) {
                @if let Some(src) = &about.portrait {
                    @let portrait = manifest.image(src);
                    figure.about-portrait data-anim=(SLIDE_IN_LEFT.name) style=(delay_style(0.3)) {
                        img src=(portrait.src) alt=(site.config().site.author)
                            width=(portrait.width) height=(portrait.height);
                    }
                }
                div.about-text data-anim=(FADE_IN_UP.name) style=(delay_style(0.5)) {
                    (PreEscaped(body_html))
                }
            }
            div.rhythm data-reveal=(FADE_IN.name) aria-hidden="true" {
                div.rhythm-slide data-scroll=(RHYTHM_SLIDE.name) {
                    div.rhythm-spin data-scroll=(RHYTHM_SPIN.name) {
                        (rhythm_motif())
                    }
                }
            }
            section.cta data-reveal=(SCROLL_REVEAL.name) {
                h2 { "Let's work together" }
                a.button href=(Route::Contact.href())
                    data-hover=(HOVER_SCALE.name) data-tap=(TAP_SCALE.name) {
                    "Get in Touch"
                }
            }
        }
    };
    base_document(site, &Route::About, Some(&about.title), "about", content)
}

/// Three concentric rings and eight spokes; strokes draw in once revealed.
fn rhythm_motif() -> Markup {
    let rings = [
        (80, "var(--color-accent)"),
        (60, "var(--color-accent-secondary)"),
        (40, "var(--color-accent)"),
    ];
    let spokes = Stagger::new(0.0, stagger::NORMAL);
    html! {
        svg.rhythm-motif viewBox="0 0 200 200" {
            @for (i, (r, stroke)) in rings.into_iter().enumerate() {
                circle.rhythm-ring cx="100" cy="100" r=(r) fill="none" stroke=(stroke)
                    stroke-width="2" pathLength="1" style=(delay_style(i as f64 * 0.2)) {}
            }
            @for i in 0..8 {
                @let angle = (i as f64 * 45.0).to_radians();
                line.rhythm-spoke x1="100" y1="100"
                    x2=(fmt_num(100.0 + 80.0 * angle.cos()))
                    y2=(fmt_num(100.0 + 80.0 * angle.sin()))
                    stroke="var(--color-accent)" stroke-width="1" pathLength="1"
                    style=(spokes.style(i)) {}
            }
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

/// `mailto:` URL with a percent-encoded subject (spaces as `%20`).
pub fn mailto_href(email: &str, subject: &str) -> String {
    if subject.is_empty() {
        return format!("mailto:{}", email);
    }
    let encoded: String = url::form_urlencoded::byte_serialize(subject.as_bytes()).collect();
    format!("mailto:{}?subject={}", email, encoded.replace('+', "%20"))
}

fn render_contact(site: &Site) -> Markup {
    let info = &site.config().site;
    let socials = Stagger::new(0.7, stagger::NORMAL);
    let content = html! {
        div.page.contact-page {
            header.page-header {
                h1 { (kinetic::render("Let's Connect", 0.0)) }
            }
            section.contact-body data-reveal=(SCROLL_REVEAL.name) {
                p.contact-intro { (info.contact_intro) }
                a.email-card href=(mailto_href(&info.email, &info.email_subject))
                    data-anim=(FADE_IN_UP.name) style=(delay_style(0.5))
                    data-hover=(HOVER_LIFT.name) data-tap=(TAP_SCALE.name) {
                    span.eyebrow { "Email" }
                    span.email-address { (info.email) }
                    span.email-hint { "Click to send email" }
                }
                @if !info.socials.is_empty() {
                    div.socials {
                        @for (i, social) in info.socials.iter().enumerate() {
                            a.social-card href=(social.url) target="_blank" rel="noopener noreferrer"
                                data-anim=(FADE_IN_UP.name) data-hover=(HOVER_LIFT.name)
                                style={ (socials.style(i)) "; --social-color: " (social.color) } {
                                span.social-name { (social.name) " " span aria-hidden="true" { "↗" } }
                                span.social-handle { (social.handle) }
                                span.social-underline {}
                            }
                        }
                    }
                }
            }
            @if !info.availability.is_empty() {
                section.availability data-reveal=(SCROLL_REVEAL.name) style=(delay_style(0.9)) {
                    h2 { "Availability" }
                    p { (info.availability) }
                }
            }
        }
    };
    base_document(site, &Route::Contact, Some("Contact"), "contact", content)
}

// ============================================================================
// Not found
// ============================================================================

fn render_not_found(site: &Site) -> Markup {
    let content = html! {
        div.not-found data-anim=(SCALE_IN.name) {
            h1.gradient-text { "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist or has been moved." }
            a.button href=(Route::Home.href())
                data-hover=(HOVER_SCALE.name) data-tap=(TAP_SCALE.name) {
                "Go Home"
            }
        }
    };
    base_document(site, &Route::NotFound, Some("Page Not Found"), "not-found", content)
}
