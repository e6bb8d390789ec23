//! The site-wide motion preference.
//!
//! Decorative animation is reduced when either the visitor's saved override
//! or the operating system asks for it. The override is persisted in
//! `localStorage` under [`STORAGE_KEY`]; the same rule is evaluated at build
//! time (with the configured default standing in for the override) to pick
//! the initial `data-motion` attribute, and at run time by the bootstrap
//! script.

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "motion-preference";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionPreference::Full => "full",
            MotionPreference::Reduced => "reduced",
        }
    }

    /// Parse a stored value. Anything but `"full"` / `"reduced"` is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full" => Some(MotionPreference::Full),
            "reduced" => Some(MotionPreference::Reduced),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MotionPreference::Full => MotionPreference::Reduced,
            MotionPreference::Reduced => MotionPreference::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionSettings {
    /// Saved override, if the visitor has toggled.
    pub user: Option<MotionPreference>,
    /// What the operating system reports.
    pub system: MotionPreference,
}

impl MotionSettings {
    pub fn from_storage(stored: Option<&str>, system: MotionPreference) -> Self {
        Self {
            user: stored.and_then(MotionPreference::parse),
            system,
        }
    }

    pub fn should_reduce_motion(&self) -> bool {
        self.user == Some(MotionPreference::Reduced) || self.system == MotionPreference::Reduced
    }

    pub fn effective(&self) -> MotionPreference {
        if self.should_reduce_motion() {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Flip the override. An absent override counts as full.
    pub fn toggled(&self) -> Self {
        Self {
            user: Some(self.user.unwrap_or_default().toggled()),
            system: self.system,
        }
    }

    /// Visible label of the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.should_reduce_motion() {
            "Enable Motion"
        } else {
            "Reduce Motion"
        }
    }

    /// Names what a click switches the override to, so it follows the
    /// override rather than the effective state.
    pub fn toggle_aria_label(&self) -> String {
        let target = self.user.unwrap_or_default().toggled();
        format!("Switch to {} motion", target.as_str())
    }
}

/// Inline `<head>` script applying the saved override and the OS signal
/// before first paint.
pub fn bootstrap_script(default: MotionPreference) -> String {
    format!(
        "(function(){{var d=document.documentElement;d.classList.add('js');\
var s=null;try{{s=localStorage.getItem('{key}');}}catch(e){{}}\
var u=(s==='full'||s==='reduced')?s:'{default}';\
var o=window.matchMedia&&window.matchMedia('(prefers-reduced-motion: reduce)').matches;\
d.setAttribute('data-motion',(u==='reduced'||o)?'reduced':'full');}})();",
        key = STORAGE_KEY,
        default = default.as_str(),
    )
}
