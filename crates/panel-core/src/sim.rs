//! Headless page for driving a [`Controller`] without a browser.
//!
//! Elements are class sets keyed by id, time is a virtual millisecond clock,
//! and scheduled steps sit in a queue until [`SimPage::advance`] reaches
//! them. Effects are executed the same way the browser host executes them.

use crate::config::{ConfigError, ControllerConfig};
use crate::controller::{action_for_key, Controller, KeyAction, PanelKind, Trigger};
use crate::machine::{Effect, Effects, TimerToken};
use crate::state::{MarkerSet, PanelState};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
struct SimTimer {
    due_ms: u64,
    seq: u64,
    kind: PanelKind,
    token: TimerToken,
}

#[derive(Debug, Clone)]
pub struct SimPage {
    config: ControllerConfig,
    controller: Controller,
    classes: BTreeMap<String, BTreeSet<String>>,
    focused: Option<String>,
    now_ms: u64,
    timers: Vec<SimTimer>,
    seq: u64,
}

impl SimPage {
    /// Build a page holding every configured element, both panels closed.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let classes = config
            .element_ids()
            .into_iter()
            .map(|(_, id)| (id.to_string(), BTreeSet::new()))
            .collect();
        let controller = Controller::new(&config);
        let mut page = Self {
            config,
            controller,
            classes,
            focused: None,
            now_ms: 0,
            timers: Vec::new(),
            seq: 0,
        };
        for kind in PanelKind::ALL {
            let fx = page.controller.adopt(kind, PanelState::Closed);
            page.apply(kind, fx);
        }
        Ok(page)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .get(id)
            .map(|set| set.contains(class))
            .unwrap_or(false)
    }

    pub fn classes(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.classes.get(id)
    }

    /// Click the element with `id`. Returns false when it is not a trigger.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(trigger) = Trigger::ALL
            .into_iter()
            .find(|t| t.element_id(&self.config) == id)
        else {
            return false;
        };
        self.trigger(trigger);
        true
    }

    pub fn trigger(&mut self, trigger: Trigger) {
        let fx = self.controller.trigger(trigger);
        self.apply(trigger.panel(), fx);
    }

    pub fn press_key(&mut self, key: &str) {
        if !self.config.dismiss_on_escape {
            return;
        }
        if let Some(KeyAction::DismissAll) = action_for_key(key) {
            for (kind, fx) in self.controller.dismiss_all() {
                self.apply(kind, fx);
            }
        }
    }

    /// Move the clock forward, firing due steps in due order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms + ms;
        while let Some(idx) = self.next_due(target) {
            let timer = self.timers.remove(idx);
            self.now_ms = timer.due_ms;
            let fx = self.controller.fire(timer.kind, timer.token);
            self.apply(timer.kind, fx);
        }
        self.now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= target)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)
    }

    fn apply(&mut self, kind: PanelKind, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::Cancel(token) => {
                    self.timers.retain(|t| !(t.kind == kind && t.token == token));
                }
                Effect::Render(markers) => self.render(kind, markers),
                Effect::Focus => {
                    self.focused = self.config.panel(kind).focus_id.clone();
                }
                Effect::Schedule { token, delay_ms } => {
                    self.seq += 1;
                    self.timers.push(SimTimer {
                        due_ms: self.now_ms + u64::from(delay_ms),
                        seq: self.seq,
                        kind,
                        token,
                    });
                }
            }
        }
    }

    fn render(&mut self, kind: PanelKind, m: MarkerSet) {
        let panel = self.config.panel(kind).clone();
        let marks = &panel.markers;
        self.set_class(&panel.section_id, &marks.hidden, m.section_hidden);
        self.set_class(&panel.panel_id, &marks.start_pose, m.start_pose);
        self.set_class(&panel.panel_id, &marks.offscreen, m.offscreen);
        self.set_class(&panel.panel_id, &marks.shown, m.shown);
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) {
        let set = self.classes.entry(id.to_string()).or_default();
        if present {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }
}
