//! Easing curves, durations, staggers, and the named entrance variants.
//!
//! Every variant is a `from` pose animated to a `to` pose with a
//! [`Transition`]. A variant renders to one `@keyframes` block plus the
//! selector rules that attach it: `[data-anim="name"]` plays on page load,
//! `[data-reveal="name"]` plays once the element has scrolled into view.

use std::fmt::Write as _;

/// A CSS `cubic-bezier()` easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing(pub [f64; 4]);

impl Easing {
    pub const SMOOTH: Easing = Easing([0.43, 0.13, 0.23, 0.96]);
    pub const BOUNCE: Easing = Easing([0.68, -0.55, 0.265, 1.55]);
    pub const SHARP: Easing = Easing([0.4, 0.0, 0.2, 1.0]);
    pub const EXPRESSIVE: Easing = Easing([0.87, 0.0, 0.13, 1.0]);

    pub fn to_css(&self) -> String {
        let [a, b, c, d] = self.0;
        format!(
            "cubic-bezier({}, {}, {}, {})",
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d)
        )
    }
}

/// Duration presets in seconds.
pub mod duration {
    pub const FAST: f64 = 0.3;
    pub const NORMAL: f64 = 0.5;
    pub const SLOW: f64 = 0.8;
    pub const VERY_SLOW: f64 = 1.2;
}

/// Stagger step presets in seconds.
pub mod stagger {
    pub const FAST: f64 = 0.05;
    pub const NORMAL: f64 = 0.1;
    pub const SLOW: f64 = 0.15;
}

/// Delay schedule for the children of a staggered container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Delay before the first child starts.
    pub delay_children: f64,
    /// Additional delay per child.
    pub step: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, step: f64) -> Self {
        Self {
            delay_children,
            step,
        }
    }

    /// Delay of the child at `index`.
    pub fn delay(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.step
    }

    /// Inline style setting `--delay` for the child at `index`.
    pub fn style(&self, index: usize) -> String {
        delay_style(self.delay(index))
    }
}

/// Inline style fragment for an explicit delay in seconds.
pub fn delay_style(seconds: f64) -> String {
    format!("--delay: {}s", fmt_num(seconds))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub ease: Easing,
}

impl Transition {
    pub const SMOOTH: Transition = Transition {
        duration: duration::NORMAL,
        ease: Easing::SMOOTH,
    };
    pub const EXPRESSIVE: Transition = Transition {
        duration: duration::SLOW,
        ease: Easing::EXPRESSIVE,
    };
    pub const BOUNCE: Transition = Transition {
        duration: duration::NORMAL,
        ease: Easing::BOUNCE,
    };
}

/// A translation length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn to_css(&self) -> String {
        match self {
            Length::Px(v) => format!("{}px", fmt_num(*v)),
            Length::Percent(v) => format!("{}%", fmt_num(*v)),
        }
    }
}

/// Visual state at one end of a variant. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub scale: Option<f64>,
    /// Gaussian blur radius in px.
    pub blur: Option<f64>,
    /// Percentage clipped from the bottom edge.
    pub clip_bottom: Option<f64>,
}

impl Pose {
    /// CSS declarations for this pose, e.g. `opacity: 0; transform: translateY(60px)`.
    pub fn declarations(&self) -> String {
        let mut decls = Vec::new();
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {}", fmt_num(opacity)));
        }
        let mut transforms = Vec::new();
        if let Some(x) = self.x {
            transforms.push(format!("translateX({})", x.to_css()));
        }
        if let Some(y) = self.y {
            transforms.push(format!("translateY({})", y.to_css()));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({})", fmt_num(scale)));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }
        if let Some(blur) = self.blur {
            decls.push(format!("filter: blur({}px)", fmt_num(blur)));
        }
        if let Some(clip) = self.clip_bottom {
            decls.push(format!("clip-path: inset(0 0 {}% 0)", fmt_num(clip)));
        }
        decls.join("; ")
    }
}

/// A named entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub name: &'static str,
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
}

impl Variant {
    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {name} {{\n    from {{ {from}; }}\n    to {{ {to}; }}\n}}\n",
            name = self.name,
            from = self.from.declarations(),
            to = self.to.declarations(),
        )
    }

    /// The `animation` shorthand; the delay comes from `--delay` on the element.
    pub fn animation(&self) -> String {
        format!(
            "{} {}s {} var(--delay, 0s) both",
            self.name,
            fmt_num(self.transition.duration),
            self.transition.ease.to_css()
        )
    }

    /// Selector rules attaching the animation under full motion.
    ///
    /// Scroll reveals stay at their `from` pose until the runtime marks them
    /// `.is-visible`, and only when scripting is available (`.js`).
    pub fn rules(&self) -> String {
        let name = self.name;
        let anim = self.animation();
        format!(
            ":root[data-motion=\"full\"] [data-anim=\"{name}\"] {{ animation: {anim}; }}\n\
             :root.js[data-motion=\"full\"] [data-reveal=\"{name}\"]:not(.is-visible) {{ {from}; }}\n\
             :root.js[data-motion=\"full\"] [data-reveal=\"{name}\"].is-visible {{ animation: {anim}; }}\n",
            from = self.from.declarations(),
        )
    }
}

const fn opacity(v: f64) -> Option<f64> {
    Some(v)
}

pub const FADE_IN_UP: Variant = Variant {
    name: "fade-in-up",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: Some(Length::Px(60.0)),
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: Some(Length::Px(0.0)),
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::SMOOTH,
};

pub const FADE_IN: Variant = Variant {
    name: "fade-in",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::SMOOTH,
};

pub const SCALE_IN: Variant = Variant {
    name: "scale-in",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: None,
        scale: Some(0.8),
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: None,
        scale: Some(1.0),
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::EXPRESSIVE,
};

pub const SLIDE_IN_LEFT: Variant = Variant {
    name: "slide-in-left",
    from: Pose {
        opacity: opacity(0.0),
        x: Some(Length::Px(-100.0)),
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: Some(Length::Px(0.0)),
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::SMOOTH,
};

pub const SLIDE_IN_RIGHT: Variant = Variant {
    name: "slide-in-right",
    from: Pose {
        opacity: opacity(0.0),
        x: Some(Length::Px(100.0)),
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: Some(Length::Px(0.0)),
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::SMOOTH,
};

/// One character of a kinetic headline.
pub const KINETIC_CHAR: Variant = Variant {
    name: "kinetic-char",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: Some(Length::Px(40.0)),
        scale: Some(0.8),
        blur: Some(10.0),
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: Some(Length::Px(0.0)),
        scale: Some(1.0),
        blur: Some(0.0),
        clip_bottom: None,
    },
    transition: Transition {
        duration: duration::SLOW,
        ease: Easing::EXPRESSIVE,
    },
};

/// Page content on load.
pub const PAGE_ENTER: Variant = Variant {
    name: "page-enter",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: Some(Length::Px(20.0)),
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: Some(Length::Px(0.0)),
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition {
        duration: duration::SLOW,
        ease: Easing::SMOOTH,
    },
};

pub const SCROLL_REVEAL: Variant = Variant {
    name: "scroll-reveal",
    from: Pose {
        opacity: opacity(0.0),
        x: None,
        y: Some(Length::Px(80.0)),
        scale: Some(0.95),
        blur: None,
        clip_bottom: None,
    },
    to: Pose {
        opacity: opacity(1.0),
        x: None,
        y: Some(Length::Px(0.0)),
        scale: Some(1.0),
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::EXPRESSIVE,
};

pub const MASK_REVEAL: Variant = Variant {
    name: "mask-reveal",
    from: Pose {
        opacity: None,
        x: None,
        y: None,
        scale: None,
        blur: None,
        clip_bottom: Some(100.0),
    },
    to: Pose {
        opacity: None,
        x: None,
        y: None,
        scale: None,
        blur: None,
        clip_bottom: Some(0.0),
    },
    transition: Transition {
        duration: duration::VERY_SLOW,
        ease: Easing::EXPRESSIVE,
    },
};

/// Every entrance variant, in stylesheet order.
pub const VARIANTS: [Variant; 9] = [
    FADE_IN_UP,
    FADE_IN,
    SCALE_IN,
    SLIDE_IN_LEFT,
    SLIDE_IN_RIGHT,
    KINETIC_CHAR,
    PAGE_ENTER,
    SCROLL_REVEAL,
    MASK_REVEAL,
];

/// A pointer interaction: a pose applied while hovered or pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub name: &'static str,
    pub pressed: bool,
    pub pose: Pose,
    pub transition: Transition,
}

impl Interaction {
    pub fn rule(&self) -> String {
        let pseudo = if self.pressed { "active" } else { "hover" };
        format!(
            ":root[data-motion=\"full\"] [data-{kind}~=\"{name}\"] {{ transition: transform {dur}s {ease}; }}\n\
             :root[data-motion=\"full\"] [data-{kind}~=\"{name}\"]:{pseudo} {{ {decls}; }}\n",
            kind = if self.pressed { "tap" } else { "hover" },
            name = self.name,
            dur = fmt_num(self.transition.duration),
            ease = self.transition.ease.to_css(),
            decls = self.pose.declarations(),
        )
    }
}

pub const HOVER_SCALE: Interaction = Interaction {
    name: "scale",
    pressed: false,
    pose: Pose {
        opacity: None,
        x: None,
        y: None,
        scale: Some(1.02),
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::BOUNCE,
};

pub const HOVER_LIFT: Interaction = Interaction {
    name: "lift",
    pressed: false,
    pose: Pose {
        opacity: None,
        x: None,
        y: Some(Length::Px(-4.0)),
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition::SMOOTH,
};

pub const HOVER_NUDGE: Interaction = Interaction {
    name: "nudge",
    pressed: false,
    pose: Pose {
        opacity: None,
        x: Some(Length::Px(20.0)),
        y: None,
        scale: None,
        blur: None,
        clip_bottom: None,
    },
    transition: Transition {
        duration: duration::FAST,
        ease: Easing::SHARP,
    },
};

pub const TAP_SCALE: Interaction = Interaction {
    name: "shrink",
    pressed: true,
    pose: Pose {
        opacity: None,
        x: None,
        y: None,
        scale: Some(0.98),
        blur: None,
        clip_bottom: None,
    },
    transition: Transition {
        duration: duration::FAST,
        ease: Easing::SHARP,
    },
};

pub const INTERACTIONS: [Interaction; 4] = [HOVER_SCALE, HOVER_LIFT, HOVER_NUDGE, TAP_SCALE];

/// Keyframes and rules for every variant and interaction.
pub fn stylesheet() -> String {
    let mut css = String::new();
    for variant in &VARIANTS {
        css.push_str(&variant.keyframes());
        css.push_str(&variant.rules());
    }
    for interaction in &INTERACTIONS {
        let _ = write!(css, "{}", interaction.rule());
    }
    css
}

/// Format a number for CSS: at most three decimals, no trailing zeros.
///
/// `0.1 * 3.0` → `"0.3"`, `60.0` → `"60"`, `-0.55` → `"-0.55"`
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
