//! Project image galleries.
//!
//! A gallery is an ordered list of images rendered in one of the
//! [`GalleryLayout`]s, followed by its [`Lightbox`] overlays. Every
//! thumbnail links to the open fragment of its image.
//!
//! ## Masonry
//!
//! Images are packed into columns greedily: each image goes to the column
//! whose stacked height (sum of height/width ratios) is smallest so far,
//! leftmost on ties. Packing is done once per configured column count, and
//! media queries from [`config::generate_gallery_css`] show the variant
//! that matches the viewport.
//!
//! [`config::generate_gallery_css`]: crate::config::generate_gallery_css

use crate::config::GalleryConfig;
use crate::lightbox::{Lightbox, LightboxImage};
use crate::motion::presets::{FADE_IN_UP, SCALE_IN, Stagger, stagger};
use crate::motion::scroll::{IMAGE_DRIFT, IMAGE_FADE, IMAGE_ZOOM};
use crate::types::{GalleryImage, GalleryLayout};
use maud::{Markup, PreEscaped, html};

/// An image with the alt text it carries in this gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub image: GalleryImage,
    pub alt: String,
}

impl GalleryItem {
    fn aspect_style(&self) -> String {
        format!(
            "aspect-ratio: {} / {}",
            self.image.width.max(1),
            self.image.height.max(1)
        )
    }
}

/// Assign item indices to `columns` columns, shortest column first.
///
/// `aspects` are height/width ratios. Within each column, indices keep
/// their original order. A column count of zero is treated as one.
pub fn masonry_columns(aspects: &[f64], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut heights = vec![0.0_f64; columns];
    let mut assigned = vec![Vec::new(); columns];
    for (index, aspect) in aspects.iter().enumerate() {
        let mut shortest = 0;
        for (col, height) in heights.iter().enumerate() {
            if *height < heights[shortest] {
                shortest = col;
            }
        }
        heights[shortest] += aspect;
        assigned[shortest].push(index);
    }
    assigned
}

#[derive(Debug, Clone)]
pub struct Gallery {
    /// DOM id, also the lightbox's closed fragment.
    pub id: String,
    pub layout: GalleryLayout,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(id: impl Into<String>, layout: GalleryLayout, items: Vec<GalleryItem>) -> Self {
        Self {
            id: id.into(),
            layout,
            items,
        }
    }

    pub fn lightbox(&self) -> Lightbox {
        Lightbox::new(
            self.id.clone(),
            self.items
                .iter()
                .map(|item| LightboxImage {
                    src: item.image.src.clone(),
                    alt: item.alt.clone(),
                })
                .collect(),
        )
    }

    /// The gallery followed by its overlays. Empty for [`GalleryLayout::None`]
    /// or a gallery without images.
    pub fn render(&self, config: &GalleryConfig) -> Markup {
        if self.layout == GalleryLayout::None || self.items.is_empty() {
            return html! {};
        }
        let lightbox = self.lightbox();
        let body = match self.layout {
            GalleryLayout::Masonry => self.render_masonry(&lightbox, config),
            GalleryLayout::Grid => self.render_grid(&lightbox),
            GalleryLayout::Row => self.render_row(&lightbox),
            GalleryLayout::Parallax | GalleryLayout::None => self.render_parallax(&lightbox),
        };
        html! {
            div.gallery id=(self.id) data-layout=(self.layout.as_str()) {
                (body)
            }
            (lightbox.render())
        }
    }

    fn thumb(&self, lightbox: &Lightbox, index: usize) -> Markup {
        let item = &self.items[index];
        html! {
            a.gallery-thumb href=(lightbox.open_href(index)) aria-label={ "Open " (item.alt) } {
                img src=(item.image.src) alt=(item.alt) width=(item.image.width) height=(item.image.height) loading="lazy" decoding="async";
                span.zoom-hint aria-hidden="true" { (PreEscaped(ZOOM_ICON)) }
            }
        }
    }

    fn render_masonry(&self, lightbox: &Lightbox, config: &GalleryConfig) -> Markup {
        let aspects: Vec<f64> = self.items.iter().map(|item| item.image.aspect()).collect();
        let mut counts = config.masonry_columns.clone();
        counts.sort_unstable();
        counts.dedup();
        html! {
            @for count in counts {
                div.masonry-variant data-columns=(count) {
                    @for column in masonry_columns(&aspects, count) {
                        div.masonry-column {
                            @for index in column {
                                div.masonry-cell style=(self.items[index].aspect_style()) data-hover="scale" {
                                    (self.thumb(lightbox, index))
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn render_grid(&self, lightbox: &Lightbox) -> Markup {
        let schedule = Stagger::new(0.0, stagger::NORMAL);
        html! {
            div.gallery-grid {
                @for index in 0..self.items.len() {
                    div.grid-tile data-reveal=(SCALE_IN.name) style=(schedule.style(index)) {
                        (self.thumb(lightbox, index))
                    }
                }
            }
        }
    }

    fn render_row(&self, lightbox: &Lightbox) -> Markup {
        let schedule = Stagger::new(0.0, stagger::NORMAL);
        html! {
            div.gallery-row {
                @for (index, item) in self.items.iter().enumerate() {
                    div.row-tile data-reveal=(FADE_IN_UP.name) data-hover="scale"
                        style={ (item.aspect_style()) "; " (schedule.style(index)) } {
                        (self.thumb(lightbox, index))
                    }
                }
            }
        }
    }

    fn render_parallax(&self, lightbox: &Lightbox) -> Markup {
        html! {
            div.gallery-parallax {
                @for index in 0..self.items.len() {
                    div class={ "parallax-item " (parallax_placement(index)) } data-scroll=(IMAGE_FADE.name) {
                        div.parallax-frame data-scroll=(IMAGE_ZOOM.name) {
                            div.parallax-image data-scroll=(IMAGE_DRIFT.name) {
                                (self.thumb(lightbox, index))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Alternating widths: even items full width, odd items narrower and
/// pushed right or left in turn.
fn parallax_placement(index: usize) -> &'static str {
    if index % 2 == 0 {
        "wide"
    } else if index % 4 == 1 {
        "narrow-right"
    } else {
        "narrow-left"
    }
}

const ZOOM_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0zM10 7v6m3-3H7"/></svg>"#;
