//! Scroll-linked transforms.
//!
//! A transform maps scroll progress (0.0 at the start of its range, 1.0 at
//! the end) to one CSS property through piecewise-linear stops. It renders
//! to a `@keyframes` block whose percentages are the input stops, driven by
//! a scroll or view timeline instead of the clock.

use super::presets::fmt_num;
use std::fmt::Write as _;

/// The CSS property a transform drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollProperty {
    /// `translateY` in percent of the element's own height.
    TranslateYPercent,
    TranslateYPx,
    TranslateXPx,
    Opacity,
    Scale,
    RotateDeg,
}

impl ScrollProperty {
    fn declaration(&self, value: f64) -> String {
        let v = fmt_num(value);
        match self {
            ScrollProperty::TranslateYPercent => format!("transform: translateY({v}%)"),
            ScrollProperty::TranslateYPx => format!("transform: translateY({v}px)"),
            ScrollProperty::TranslateXPx => format!("transform: translateX({v}px)"),
            ScrollProperty::Opacity => format!("opacity: {v}"),
            ScrollProperty::Scale => format!("transform: scale({v})"),
            ScrollProperty::RotateDeg => format!("transform: rotate({v}deg)"),
        }
    }
}

/// Which stretch of scrolling drives the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRange {
    /// From the element's top entering the viewport bottom until its bottom
    /// leaves the viewport top.
    Cover,
    /// The first viewport height of the page, for elements pinned at the top.
    PageTop,
}

impl ScrollRange {
    fn declarations(&self) -> &'static str {
        match self {
            ScrollRange::Cover => "animation-timeline: view(); animation-range: cover 0% cover 100%",
            ScrollRange::PageTop => "animation-timeline: scroll(root); animation-range: 0 100vh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransform {
    pub name: &'static str,
    pub property: ScrollProperty,
    pub range: ScrollRange,
    /// Progress stops, strictly increasing within `0.0..=1.0`.
    pub input: &'static [f64],
    /// Property value at each input stop.
    pub output: &'static [f64],
}

impl ScrollTransform {
    /// At least two stops, equal lengths, inputs strictly increasing in `[0, 1]`.
    pub fn is_well_formed(&self) -> bool {
        self.input.len() >= 2
            && self.input.len() == self.output.len()
            && self.input.iter().all(|p| (0.0..=1.0).contains(p))
            && self.input.windows(2).all(|w| w[0] < w[1])
    }

    /// Property value at `progress`, interpolated linearly between stops and
    /// clamped to the first/last output outside the stop range.
    pub fn value_at(&self, progress: f64) -> f64 {
        if !self.is_well_formed() {
            return 0.0;
        }
        let last = self.input.len() - 1;
        if progress <= self.input[0] {
            return self.output[0];
        }
        if progress >= self.input[last] {
            return self.output[last];
        }
        let seg = self
            .input
            .windows(2)
            .position(|w| progress >= w[0] && progress <= w[1])
            .unwrap_or(0);
        let (x0, x1) = (self.input[seg], self.input[seg + 1]);
        let (y0, y1) = (self.output[seg], self.output[seg + 1]);
        y0 + (y1 - y0) * (progress - x0) / (x1 - x0)
    }

    pub fn keyframes(&self) -> String {
        debug_assert!(self.is_well_formed(), "malformed scroll transform {}", self.name);
        let mut css = format!("@keyframes {} {{\n", self.name);
        for (p, v) in self.input.iter().zip(self.output) {
            let _ = writeln!(
                css,
                "    {}% {{ {}; }}",
                fmt_num(p * 100.0),
                self.property.declaration(*v)
            );
        }
        css.push_str("}\n");
        css
    }

    /// Rule attaching the transform to `[data-scroll="name"]` under full
    /// motion, for browsers with scroll-driven animations.
    pub fn rule(&self) -> String {
        format!(
            "@supports (animation-timeline: view()) {{\n    :root[data-motion=\"full\"] [data-scroll=\"{name}\"] {{ animation: {name} linear both; {range}; }}\n}}\n",
            name = self.name,
            range = self.range.declarations(),
        )
    }
}

pub const HERO_PARALLAX: ScrollTransform = ScrollTransform {
    name: "hero-parallax",
    property: ScrollProperty::TranslateYPercent,
    range: ScrollRange::PageTop,
    input: &[0.0, 1.0],
    output: &[0.0, 30.0],
};

pub const HERO_FADE: ScrollTransform = ScrollTransform {
    name: "hero-fade",
    property: ScrollProperty::Opacity,
    range: ScrollRange::PageTop,
    input: &[0.0, 0.5, 1.0],
    output: &[1.0, 0.8, 0.0],
};

pub const IMAGE_DRIFT: ScrollTransform = ScrollTransform {
    name: "image-drift",
    property: ScrollProperty::TranslateYPx,
    range: ScrollRange::Cover,
    input: &[0.0, 1.0],
    output: &[100.0, -100.0],
};

pub const IMAGE_ZOOM: ScrollTransform = ScrollTransform {
    name: "image-zoom",
    property: ScrollProperty::Scale,
    range: ScrollRange::Cover,
    input: &[0.0, 0.5, 1.0],
    output: &[0.9, 1.0, 0.9],
};

pub const IMAGE_FADE: ScrollTransform = ScrollTransform {
    name: "image-fade",
    property: ScrollProperty::Opacity,
    range: ScrollRange::Cover,
    input: &[0.0, 0.2, 0.8, 1.0],
    output: &[0.0, 1.0, 1.0, 0.0],
};

pub const RHYTHM_SLIDE: ScrollTransform = ScrollTransform {
    name: "rhythm-slide",
    property: ScrollProperty::TranslateXPx,
    range: ScrollRange::Cover,
    input: &[0.0, 1.0],
    output: &[-100.0, 100.0],
};

pub const RHYTHM_SPIN: ScrollTransform = ScrollTransform {
    name: "rhythm-spin",
    property: ScrollProperty::RotateDeg,
    range: ScrollRange::Cover,
    input: &[0.0, 1.0],
    output: &[0.0, 360.0],
};

pub const TRANSFORMS: [ScrollTransform; 7] = [
    HERO_PARALLAX,
    HERO_FADE,
    IMAGE_DRIFT,
    IMAGE_ZOOM,
    IMAGE_FADE,
    RHYTHM_SLIDE,
    RHYTHM_SPIN,
];

pub fn stylesheet() -> String {
    TRANSFORMS
        .iter()
        .map(|t| t.keyframes() + &t.rule())
        .collect()
}
