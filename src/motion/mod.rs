//! Motion: animation presets, scroll-linked transforms, kinetic text, and
//! the full/reduced preference that gates all of them.
//!
//! Everything here renders to CSS at build time. Animations only apply
//! under `:root[data-motion="full"]`, so switching the attribute to
//! `reduced` (from the toggle, the saved override, or the OS signal) turns
//! every decorative effect off without touching the markup.

pub mod kinetic;
pub mod preference;
pub mod presets;
pub mod scroll;

pub use preference::{MotionPreference, MotionSettings};
pub use presets::{Stagger, Variant};
pub use scroll::ScrollTransform;

/// The generated motion stylesheet: entrance variants, interactions,
/// scroll transforms, and the reduced-motion overrides.
pub fn stylesheet() -> String {
    let mut css = String::new();
    css.push_str(&presets::stylesheet());
    css.push_str(&scroll::stylesheet());
    css.push_str(REDUCED_OVERRIDES);
    css
}

const REDUCED_OVERRIDES: &str = r#":root[data-motion="reduced"] *,
:root[data-motion="reduced"] *::before,
:root[data-motion="reduced"] *::after {
    animation: none !important;
    transition: none !important;
    scroll-behavior: auto !important;
}
:root[data-motion="reduced"] .cursor,
:root[data-motion="reduced"] .grain,
:root[data-motion="reduced"] .blob {
    display: none;
}
"#;
