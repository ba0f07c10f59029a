//! Panel state and its projection onto marker classes.
//!
//! The state enum is the single source of truth for a panel. Marker classes
//! on the page are derived from it through [`MarkerSet::for_state`] and are
//! never read back during normal operation (only once at init, see
//! [`PanelState::infer`]).

/// Lifecycle of a single panel. Cyclic, starts `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelState {
    /// Section hidden, panel off-screen.
    #[default]
    Closed,
    /// Section visible, start pose cleared, reveal pending.
    Opening,
    /// Section visible, panel shown.
    Open,
    /// Section visible, panel animating off-screen, hide pending.
    Closing,
}

impl PanelState {
    pub const ALL: [PanelState; 4] = [
        PanelState::Closed,
        PanelState::Opening,
        PanelState::Open,
        PanelState::Closing,
    ];

    /// Whether the wrapper section participates in layout.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, PanelState::Closed)
    }

    /// Whether no deferred step is outstanding.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, PanelState::Closed | PanelState::Open)
    }

    /// Adopt the state the page was served in. Anything other than a visible
    /// section holding a shown panel normalises to `Closed`.
    pub fn infer(section_hidden: bool, shown: bool) -> PanelState {
        if !section_hidden && shown {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }
}

/// Inputs to the panel state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    Open,
    Close,
    RevealElapsed,
    HideElapsed,
}

/// Pure transition function. `None` means the event is ignored in `state`.
///
/// Same-direction repeats are ignored; an opposite-direction event during a
/// transient state takes over from the current pose.
pub fn transition(state: PanelState, event: PanelEvent) -> Option<PanelState> {
    use PanelEvent as E;
    use PanelState as S;
    match (state, event) {
        (S::Closed | S::Closing, E::Open) => Some(S::Opening),
        (S::Open | S::Opening, E::Close) => Some(S::Closing),
        (S::Opening, E::RevealElapsed) => Some(S::Open),
        (S::Closing, E::HideElapsed) => Some(S::Closed),
        _ => None,
    }
}

/// The four marker bits a panel renders: one on the section, three on the
/// panel itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerSet {
    pub section_hidden: bool,
    pub start_pose: bool,
    pub offscreen: bool,
    pub shown: bool,
}

impl MarkerSet {
    pub fn for_state(state: PanelState) -> MarkerSet {
        match state {
            PanelState::Closed => MarkerSet {
                section_hidden: true,
                start_pose: true,
                offscreen: true,
                shown: false,
            },
            PanelState::Opening => MarkerSet {
                section_hidden: false,
                start_pose: false,
                offscreen: true,
                shown: false,
            },
            PanelState::Open => MarkerSet {
                section_hidden: false,
                start_pose: false,
                offscreen: false,
                shown: true,
            },
            PanelState::Closing => MarkerSet {
                section_hidden: false,
                start_pose: true,
                offscreen: true,
                shown: false,
            },
        }
    }

    /// The section is never hidden under a shown panel.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        !(self.section_hidden && self.shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_only_when_open() {
        for s in PanelState::ALL {
            assert_eq!(MarkerSet::for_state(s).shown, s == PanelState::Open);
        }
    }

    #[test]
    fn section_hidden_tracks_visibility() {
        for s in PanelState::ALL {
            assert_eq!(MarkerSet::for_state(s).section_hidden, !s.is_visible());
        }
    }
}
