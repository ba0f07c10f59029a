//! Controller configuration: element ids, marker classes and timings.
//!
//! Defaults describe the catalog site's markup. Hosts may pass a partial
//! override (camelCase keys); anything missing falls back to the defaults.

use crate::constants::{CSS_TRANSITION_MS, HIDE_DELAY_MS, REVEAL_DELAY_MS};
use crate::controller::PanelKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty element id for {role}")]
    EmptyId { role: ElementRole },

    #[error("element id `{id}` used for both {first} and {second}")]
    DuplicateId {
        id: String,
        first: ElementRole,
        second: ElementRole,
    },

    #[error("empty `{marker}` marker class on the {panel} panel")]
    EmptyMarker {
        panel: PanelKind,
        marker: &'static str,
    },

    #[error("{name} must be greater than zero")]
    ZeroDelay { name: &'static str },

    #[error("hide delay {hide_delay_ms}ms does not outlast the {transition_ms}ms exit transition")]
    HideBeforeTransition {
        hide_delay_ms: u32,
        transition_ms: u32,
    },
}

/// What a looked-up element is used for. Used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Panel(PanelKind),
    Section(PanelKind),
    OpenTrigger(PanelKind),
    CloseTrigger(PanelKind),
    FocusTarget(PanelKind),
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Panel(k) => write!(f, "{k} panel"),
            ElementRole::Section(k) => write!(f, "{k} section"),
            ElementRole::OpenTrigger(k) => write!(f, "open-{k} trigger"),
            ElementRole::CloseTrigger(k) => write!(f, "close-{k} trigger"),
            ElementRole::FocusTarget(k) => write!(f, "{k} focus target"),
        }
    }
}

/// Class names rendered for each marker bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerClasses {
    /// On the section: removes it from layout.
    pub hidden: String,
    /// On the panel: pre-animation pose, cleared before the reveal.
    pub start_pose: String,
    /// On the panel: off-screen position.
    pub offscreen: String,
    /// On the panel: on-screen, expanded.
    pub shown: String,
}

impl MarkerClasses {
    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("hidden", &self.hidden),
            ("startPose", &self.start_pose),
            ("offscreen", &self.offscreen),
            ("shown", &self.shown),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub panel_id: String,
    pub section_id: String,
    pub open_trigger_id: String,
    pub close_trigger_id: String,
    /// Element focused in the same turn the section becomes visible.
    #[serde(default)]
    pub focus_id: Option<String>,
    pub markers: MarkerClasses,
}

impl PanelConfig {
    pub fn menu() -> Self {
        Self {
            panel_id: "menu".into(),
            section_id: "menu-section".into(),
            open_trigger_id: "menu-btn".into(),
            close_trigger_id: "hide-menu-btn".into(),
            focus_id: None,
            markers: MarkerClasses {
                hidden: "hidden".into(),
                start_pose: "hide-menu".into(),
                offscreen: "left-[-300px]".into(),
                shown: "show-menu".into(),
            },
        }
    }

    pub fn search() -> Self {
        Self {
            panel_id: "search-bar".into(),
            section_id: "search-section".into(),
            open_trigger_id: "search-btn".into(),
            close_trigger_id: "close-search".into(),
            focus_id: Some("search".into()),
            markers: MarkerClasses {
                hidden: "hidden".into(),
                start_pose: "slide-sb".into(),
                offscreen: "top-[-60px]".into(),
                shown: "show-sb".into(),
            },
        }
    }

    /// Every element id this panel needs, paired with its role.
    pub fn element_ids(&self, kind: PanelKind) -> Vec<(ElementRole, &str)> {
        let mut ids = vec![
            (ElementRole::Panel(kind), self.panel_id.as_str()),
            (ElementRole::Section(kind), self.section_id.as_str()),
            (ElementRole::OpenTrigger(kind), self.open_trigger_id.as_str()),
            (ElementRole::CloseTrigger(kind), self.close_trigger_id.as_str()),
        ];
        if let Some(focus) = &self.focus_id {
            ids.push((ElementRole::FocusTarget(kind), focus.as_str()));
        }
        ids
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub reveal_delay_ms: u32,
    pub hide_delay_ms: u32,
    /// Exit transition length of the stylesheet; the hide delay must cover it.
    pub transition_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: REVEAL_DELAY_MS,
            hide_delay_ms: HIDE_DELAY_MS,
            transition_ms: CSS_TRANSITION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub menu: PanelConfig,
    pub search: PanelConfig,
    pub timings: Timings,
    /// Close every panel on Escape.
    pub dismiss_on_escape: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            menu: PanelConfig::menu(),
            search: PanelConfig::search(),
            timings: Timings::default(),
            dismiss_on_escape: true,
        }
    }
}

impl ControllerConfig {
    pub fn panel(&self, kind: PanelKind) -> &PanelConfig {
        match kind {
            PanelKind::Menu => &self.menu,
            PanelKind::Search => &self.search,
        }
    }

    pub fn element_ids(&self) -> Vec<(ElementRole, &str)> {
        PanelKind::ALL
            .iter()
            .flat_map(|&k| self.panel(k).element_ids(k))
            .collect()
    }

    /// Check that every id is present and unique, every marker has a class
    /// name, and the delays are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = self.element_ids();
        for (i, &(role, id)) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyId { role });
            }
            if let Some(&(first, _)) = ids[..i].iter().find(|(_, other)| *other == id) {
                return Err(ConfigError::DuplicateId {
                    id: id.to_string(),
                    first,
                    second: role,
                });
            }
        }

        for kind in PanelKind::ALL {
            for (marker, class) in self.panel(kind).markers.entries() {
                if class.trim().is_empty() {
                    return Err(ConfigError::EmptyMarker {
                        panel: kind,
                        marker,
                    });
                }
            }
        }

        let t = &self.timings;
        if t.reveal_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "revealDelayMs",
            });
        }
        if t.hide_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "hideDelayMs",
            });
        }
        if t.hide_delay_ms < t.transition_ms {
            return Err(ConfigError::HideBeforeTransition {
                hide_delay_ms: t.hide_delay_ms,
                transition_ms: t.transition_ms,
            });
        }
        Ok(())
    }
}
