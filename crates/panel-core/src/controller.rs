use crate::config::ControllerConfig;
use crate::machine::{Effects, PanelMachine, TimerToken};
use crate::state::PanelState;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Menu,
    Search,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Menu, PanelKind::Search];

    pub fn name(self) -> &'static str {
        match self {
            PanelKind::Menu => "menu",
            PanelKind::Search => "search",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four click targets, each bound to exactly one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    OpenMenu,
    CloseMenu,
    OpenSearch,
    CloseSearch,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::OpenMenu,
        Trigger::CloseMenu,
        Trigger::OpenSearch,
        Trigger::CloseSearch,
    ];

    #[inline]
    pub fn panel(self) -> PanelKind {
        match self {
            Trigger::OpenMenu | Trigger::CloseMenu => PanelKind::Menu,
            Trigger::OpenSearch | Trigger::CloseSearch => PanelKind::Search,
        }
    }

    #[inline]
    pub fn opens(self) -> bool {
        matches!(self, Trigger::OpenMenu | Trigger::OpenSearch)
    }

    /// Element id of this trigger under `config`.
    pub fn element_id(self, config: &ControllerConfig) -> &str {
        let panel = config.panel(self.panel());
        if self.opens() {
            &panel.open_trigger_id
        } else {
            &panel.close_trigger_id
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    DismissAll,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::DismissAll),
        _ => None,
    }
}

/// Menu and search machines behind one dispatch surface.
#[derive(Debug, Clone)]
pub struct Controller {
    menu: PanelMachine,
    search: PanelMachine,
}

impl Controller {
    pub fn new(config: &ControllerConfig) -> Self {
        let machine = |kind: PanelKind| {
            PanelMachine::new(kind, config.timings, config.panel(kind).focus_id.is_some())
        };
        Self {
            menu: machine(PanelKind::Menu),
            search: machine(PanelKind::Search),
        }
    }

    pub fn panel(&self, kind: PanelKind) -> &PanelMachine {
        match kind {
            PanelKind::Menu => &self.menu,
            PanelKind::Search => &self.search,
        }
    }

    fn panel_mut(&mut self, kind: PanelKind) -> &mut PanelMachine {
        match kind {
            PanelKind::Menu => &mut self.menu,
            PanelKind::Search => &mut self.search,
        }
    }

    #[inline]
    pub fn state(&self, kind: PanelKind) -> PanelState {
        self.panel(kind).state()
    }

    /// Effects returned apply to `trigger.panel()`.
    pub fn trigger(&mut self, trigger: Trigger) -> Effects {
        let machine = self.panel_mut(trigger.panel());
        if trigger.opens() {
            machine.open()
        } else {
            machine.close()
        }
    }

    pub fn fire(&mut self, kind: PanelKind, token: TimerToken) -> Effects {
        self.panel_mut(kind).fire(token)
    }

    pub fn adopt(&mut self, kind: PanelKind, state: PanelState) -> Effects {
        self.panel_mut(kind).adopt(state)
    }

    /// Close every panel. Already closed or closing panels yield no effects.
    pub fn dismiss_all(&mut self) -> [(PanelKind, Effects); 2] {
        [
            (PanelKind::Menu, self.menu.close()),
            (PanelKind::Search, self.search.close()),
        ]
    }
}
