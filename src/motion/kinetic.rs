//! Kinetic headlines: text split into words and characters, each character
//! entering with a delay proportional to its position in the whole line.

use super::presets::{KINETIC_CHAR, Stagger, stagger};
use maud::{Markup, html};

#[derive(Debug, Clone, PartialEq)]
pub struct KineticChar {
    pub ch: char,
    /// Position among all characters of the line, spaces excluded.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KineticWord {
    pub chars: Vec<KineticChar>,
}

/// Split on whitespace; character indices run across word boundaries.
pub fn split(text: &str) -> Vec<KineticWord> {
    let mut index = 0;
    text.split_whitespace()
        .map(|word| KineticWord {
            chars: word
                .chars()
                .map(|ch| {
                    let c = KineticChar { ch, index };
                    index += 1;
                    c
                })
                .collect(),
        })
        .collect()
}

/// Headline markup. The visible characters are hidden from assistive
/// technology; the full text is exposed through `aria-label`.
pub fn render(text: &str, delay: f64) -> Markup {
    let schedule = Stagger::new(delay, stagger::NORMAL);
    let words = split(text);
    html! {
        span.kinetic aria-label=(text) {
            @for word in &words {
                span.kinetic-word aria-hidden="true" {
                    @for c in &word.chars {
                        span.kinetic-char data-anim=(KINETIC_CHAR.name) style=(schedule.style(c.index)) { (c.ch) }
                    }
                }
                " "
            }
        }
    }
}
