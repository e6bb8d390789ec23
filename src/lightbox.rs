//! Full-screen image viewer for project galleries.
//!
//! The viewer state lives in the URL fragment, so it works without
//! scripting and survives reloads and the back button:
//!
//! | State | Fragment |
//! |-------|----------|
//! | `Closed { gallery }` | `#{gallery}` |
//! | `Open { gallery, index, .. }` | `#lb-{gallery}-{index + 1}` |
//!
//! Each image gets one overlay element whose id is its open fragment; CSS
//! `:target` shows it and suspends page scroll while it is shown. Because
//! the document has a single fragment, at most one image is open at a
//! time. The backdrop and the close control link to the closed fragment;
//! the embedded script maps Escape to the same link.

use maud::{Markup, PreEscaped, html};

const OPEN_PREFIX: &str = "lb-";

/// How a visitor dismissed the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Backdrop,
    CloseButton,
    Escape,
}

impl CloseTrigger {
    /// Value of the `data-close` attribute on the matching control.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseTrigger::Backdrop => "backdrop",
            CloseTrigger::CloseButton => "button",
            CloseTrigger::Escape => "escape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxState {
    Closed {
        gallery: String,
    },
    Open {
        gallery: String,
        /// Zero-based position in the gallery.
        index: usize,
        image: LightboxImage,
    },
}

impl LightboxState {
    pub fn closed(gallery: impl Into<String>) -> Self {
        LightboxState::Closed {
            gallery: gallery.into(),
        }
    }

    pub fn gallery(&self) -> &str {
        match self {
            LightboxState::Closed { gallery } | LightboxState::Open { gallery, .. } => gallery,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    /// The selected image, if open.
    pub fn image(&self) -> Option<&LightboxImage> {
        match self {
            LightboxState::Open { image, .. } => Some(image),
            LightboxState::Closed { .. } => None,
        }
    }

    /// Select an image. Replaces any image already selected.
    pub fn open(self, index: usize, image: LightboxImage) -> Self {
        LightboxState::Open {
            gallery: self.gallery().to_string(),
            index,
            image,
        }
    }

    /// Dismiss the viewer. The result is closed whatever the trigger.
    pub fn close(self, _trigger: CloseTrigger) -> Self {
        LightboxState::closed(self.gallery())
    }

    /// Fragment (without `#`) encoding this state.
    pub fn fragment(&self) -> String {
        match self {
            LightboxState::Closed { gallery } => gallery.clone(),
            LightboxState::Open { gallery, index, .. } => open_fragment(gallery, *index),
        }
    }
}

/// Fragment of the overlay for image `index` (zero-based) of `gallery`.
pub fn open_fragment(gallery: &str, index: usize) -> String {
    format!("{}{}-{}", OPEN_PREFIX, gallery, index + 1)
}

/// Split an open fragment into gallery id and zero-based index.
///
/// `"lb-jazz-gallery-3"` → `Some(("jazz-gallery", 2))`
pub fn parse_open_fragment(fragment: &str) -> Option<(&str, usize)> {
    let rest = fragment.trim_start_matches('#').strip_prefix(OPEN_PREFIX)?;
    let (gallery, n) = rest.rsplit_once('-')?;
    let n: usize = n.parse().ok()?;
    if gallery.is_empty() || n == 0 {
        return None;
    }
    Some((gallery, n - 1))
}

/// The images of one gallery, as the viewer sees them.
#[derive(Debug, Clone)]
pub struct Lightbox {
    pub gallery: String,
    pub images: Vec<LightboxImage>,
}

impl Lightbox {
    pub fn new(gallery: impl Into<String>, images: Vec<LightboxImage>) -> Self {
        Self {
            gallery: gallery.into(),
            images,
        }
    }

    /// `href` of the thumbnail that opens image `index`.
    pub fn open_href(&self, index: usize) -> String {
        format!("#{}", open_fragment(&self.gallery, index))
    }

    /// `href` of every close control.
    pub fn close_href(&self) -> String {
        format!("#{}", self.gallery)
    }

    /// Decode a fragment into a state of this gallery. `None` when the
    /// fragment belongs to another gallery or names no image.
    pub fn resolve(&self, fragment: &str) -> Option<LightboxState> {
        let fragment = fragment.trim_start_matches('#');
        if fragment == self.gallery {
            return Some(LightboxState::closed(&self.gallery));
        }
        let (gallery, index) = parse_open_fragment(fragment)?;
        if gallery != self.gallery {
            return None;
        }
        let image = self.images.get(index)?.clone();
        Some(LightboxState::closed(gallery).open(index, image))
    }

    /// One hidden overlay per image.
    pub fn render(&self) -> Markup {
        html! {
            @for (index, image) in self.images.iter().enumerate() {
                div.lightbox id=(open_fragment(&self.gallery, index)) role="dialog" aria-modal="true" aria-label=(image.alt) {
                    a.lightbox-backdrop href=(self.close_href()) data-close=(CloseTrigger::Backdrop.as_str()) tabindex="-1" aria-label="Close lightbox" {}
                    figure.lightbox-frame data-anim="scale-in" {
                        img src=(image.src) alt=(image.alt) loading="lazy" decoding="async";
                    }
                    a.lightbox-close href=(self.close_href()) data-close=(CloseTrigger::CloseButton.as_str()) aria-label="Close lightbox" {
                        (PreEscaped(CLOSE_ICON))
                    }
                    p.lightbox-hint { "Click anywhere or press ESC to close" }
                }
            }
        }
    }
}

const CLOSE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(n: usize) -> LightboxImage {
        LightboxImage {
            src: format!("/images/jazz-posters/{n}.png"),
            alt: format!("Jazz poster {n}"),
        }
    }

    fn posters() -> Lightbox {
        Lightbox::new("posters-gallery", (1..=3).map(poster).collect())
    }

    #[test]
    fn open_selects_image() {
        let state = LightboxState::closed("g").open(1, poster(2));
        assert!(state.is_open());
        assert_eq!(state.image(), Some(&poster(2)));
    }

    #[test]
    fn open_replaces_current_image() {
        let state = LightboxState::closed("g")
            .open(0, poster(1))
            .open(2, poster(3));
        assert_eq!(state.image(), Some(&poster(3)));
        assert_eq!(state.fragment(), "lb-g-3");
    }

    #[test]
    fn closed_after_any_trigger() {
        for trigger in [
            CloseTrigger::Backdrop,
            CloseTrigger::CloseButton,
            CloseTrigger::Escape,
        ] {
            let state = LightboxState::closed("g").open(0, poster(1)).close(trigger);
            assert!(!state.is_open(), "{trigger:?}");
            assert!(state.image().is_none());
            assert_eq!(state, LightboxState::closed("g"));
        }
    }

    #[test]
    fn closing_a_closed_viewer_is_a_no_op() {
        let state = LightboxState::closed("g").close(CloseTrigger::Escape);
        assert_eq!(state, LightboxState::closed("g"));
    }

    #[test]
    fn fragments() {
        assert_eq!(LightboxState::closed("jazz-gallery").fragment(), "jazz-gallery");
        assert_eq!(open_fragment("jazz-gallery", 0), "lb-jazz-gallery-1");
    }

    #[test]
    fn parse_open_fragment_handles_dashed_gallery_ids() {
        assert_eq!(
            parse_open_fragment("#lb-jazz-gallery-12"),
            Some(("jazz-gallery", 11))
        );
        assert_eq!(parse_open_fragment("lb-jazz-gallery-0"), None);
        assert_eq!(parse_open_fragment("lb-jazz-gallery-x"), None);
        assert_eq!(parse_open_fragment("jazz-gallery"), None);
        assert_eq!(parse_open_fragment("lb--3"), None);
    }

    #[test]
    fn resolve_round_trips_states() {
        let lb = posters();
        let open = lb.resolve(&lb.open_href(1)).unwrap();
        assert_eq!(open.image(), Some(&poster(2)));
        assert_eq!(format!("#{}", open.fragment()), lb.open_href(1));
        let closed = lb.resolve(&lb.close_href()).unwrap();
        assert!(!closed.is_open());
    }

    #[test]
    fn resolve_rejects_foreign_or_out_of_range() {
        let lb = posters();
        assert!(lb.resolve("lb-other-gallery-1").is_none());
        assert!(lb.resolve("lb-posters-gallery-4").is_none());
        assert!(lb.resolve("somewhere-else").is_none());
    }

    #[test]
    fn render_one_overlay_per_image() {
        let html = posters().render().into_string();
        assert_eq!(html.matches(r#"class="lightbox""#).count(), 3);
        assert!(html.contains(r#"id="lb-posters-gallery-3""#));
    }

    #[test]
    fn every_close_control_targets_closed_fragment() {
        let html = posters().render().into_string();
        assert_eq!(html.matches(r##"href="#posters-gallery""##).count(), 6);
        assert!(html.contains(r#"data-close="backdrop""#));
        assert!(html.contains(r#"data-close="button""#));
    }
}
