use crate::config::Timings;
use crate::controller::PanelKind;
use crate::state::{transition, MarkerSet, PanelEvent, PanelState};
use smallvec::SmallVec;

/// Identifies one scheduled deferred step. Tokens are never reused within a
/// machine, so a callback carrying an old token is recognisably stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Work the host performs, in order, after a machine call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Drop a pending timer (clearTimeout).
    Cancel(TimerToken),
    /// Apply the marker projection to the section and panel.
    Render(MarkerSet),
    /// Move input focus to the panel's focus target.
    Focus,
    /// Call back `fire(token)` after `delay_ms`.
    Schedule { token: TimerToken, delay_ms: u32 },
}

pub type Effects = SmallVec<[Effect; 4]>;

/// State machine for one panel with at most one outstanding timer.
#[derive(Debug, Clone)]
pub struct PanelMachine {
    kind: PanelKind,
    state: PanelState,
    timings: Timings,
    focus_on_open: bool,
    pending: Option<(TimerToken, PanelEvent)>,
    next_token: u64,
}

impl PanelMachine {
    pub fn new(kind: PanelKind, timings: Timings, focus_on_open: bool) -> Self {
        Self {
            kind,
            state: PanelState::Closed,
            timings,
            focus_on_open,
            pending: None,
            next_token: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[inline]
    pub fn markers(&self) -> MarkerSet {
        MarkerSet::for_state(self.state)
    }

    #[inline]
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending.map(|(t, _)| t)
    }

    /// Show the section and clear the start pose now; reveal after the
    /// reveal delay.
    pub fn open(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.enter(PanelEvent::Open, &mut fx) {
            if self.focus_on_open {
                fx.push(Effect::Focus);
            }
            self.arm(PanelEvent::RevealElapsed, self.timings.reveal_delay_ms, &mut fx);
        } else if self.focus_on_open {
            // repeated open still lands the caret in the field
            fx.push(Effect::Focus);
        }
        fx
    }

    /// Animate off-screen now; hide the section after the hide delay.
    pub fn close(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.enter(PanelEvent::Close, &mut fx) {
            self.arm(PanelEvent::HideElapsed, self.timings.hide_delay_ms, &mut fx);
        }
        fx
    }

    /// Run the deferred step for `token`. Stale or unknown tokens do nothing.
    pub fn fire(&mut self, token: TimerToken) -> Effects {
        let mut fx = Effects::new();
        let pending = self.pending;
        match pending {
            Some((armed, event)) if armed == token => {
                self.pending = None;
                self.enter(event, &mut fx);
            }
            _ => {
                log::trace!("[{}] stale timer {} ignored", self.kind, token.id());
            }
        }
        fx
    }

    /// Take over a state observed on the page, dropping any pending step,
    /// and render its projection.
    pub fn adopt(&mut self, state: PanelState) -> Effects {
        let mut fx = Effects::new();
        self.cancel_pending(&mut fx);
        self.state = state;
        fx.push(Effect::Render(self.markers()));
        log::debug!("[{}] adopted {:?}", self.kind, state);
        fx
    }

    // Apply `event`; on success cancel the previous timer and render.
    fn enter(&mut self, event: PanelEvent, fx: &mut Effects) -> bool {
        let Some(next) = transition(self.state, event) else {
            log::trace!("[{}] {:?} ignored in {:?}", self.kind, event, self.state);
            return false;
        };
        self.cancel_pending(fx);
        log::debug!("[{}] {:?} -> {:?} on {:?}", self.kind, self.state, next, event);
        self.state = next;
        fx.push(Effect::Render(self.markers()));
        true
    }

    fn cancel_pending(&mut self, fx: &mut Effects) {
        if let Some((token, _)) = self.pending.take() {
            fx.push(Effect::Cancel(token));
        }
    }

    fn arm(&mut self, event: PanelEvent, delay_ms: u32, fx: &mut Effects) {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some((token, event));
        fx.push(Effect::Schedule { token, delay_ms });
    }
}
