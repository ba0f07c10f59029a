use panel_core::constants::{HIDE_DELAY_MS, REVEAL_DELAY_MS};
use panel_core::{
    Effect, Effects, MarkerSet, PanelKind, PanelMachine, PanelState, TimerToken, Timings,
};

fn machine(focus: bool) -> PanelMachine {
    PanelMachine::new(PanelKind::Search, Timings::default(), focus)
}

fn scheduled(fx: &Effects) -> Option<(TimerToken, u32)> {
    fx.iter().find_map(|e| match e {
        Effect::Schedule { token, delay_ms } => Some((*token, *delay_ms)),
        _ => None,
    })
}

#[test]
fn open_renders_then_focuses_then_schedules_reveal() {
    let mut m = machine(true);
    let fx = m.open();
    assert_eq!(m.state(), PanelState::Opening);
    assert_eq!(fx.len(), 3);
    assert_eq!(fx[0], Effect::Render(MarkerSet::for_state(PanelState::Opening)));
    assert_eq!(fx[1], Effect::Focus);
    match fx[2] {
        Effect::Schedule { delay_ms, .. } => assert_eq!(delay_ms, REVEAL_DELAY_MS),
        other => panic!("expected schedule, got {other:?}"),
    }
}

#[test]
fn open_without_focus_target_skips_focus() {
    let mut m = machine(false);
    let fx = m.open();
    assert!(!fx.contains(&Effect::Focus));
}

#[test]
fn reveal_fires_into_open() {
    let mut m = machine(false);
    let (token, _) = scheduled(&m.open()).expect("reveal scheduled");
    assert_eq!(m.pending(), Some(token));
    let fx = m.fire(token);
    assert_eq!(m.state(), PanelState::Open);
    assert_eq!(fx.as_slice(), &[Effect::Render(MarkerSet::for_state(PanelState::Open))]);
    assert_eq!(m.pending(), None);
}

#[test]
fn close_schedules_hide_after_delay() {
    let mut m = machine(false);
    let (t, _) = scheduled(&m.open()).unwrap();
    m.fire(t);
    let fx = m.close();
    assert_eq!(m.state(), PanelState::Closing);
    assert_eq!(fx[0], Effect::Render(MarkerSet::for_state(PanelState::Closing)));
    let (hide, delay) = scheduled(&fx).unwrap();
    assert_eq!(delay, HIDE_DELAY_MS);
    m.fire(hide);
    assert_eq!(m.state(), PanelState::Closed);
}

#[test]
fn close_during_opening_cancels_reveal() {
    let mut m = machine(false);
    let (reveal, _) = scheduled(&m.open()).unwrap();
    let fx = m.close();
    assert_eq!(fx[0], Effect::Cancel(reveal));
    assert_eq!(m.state(), PanelState::Closing);

    // the cancelled reveal arriving late must not reopen the panel
    assert!(m.fire(reveal).is_empty());
    assert_eq!(m.state(), PanelState::Closing);
}

#[test]
fn open_during_closing_cancels_hide() {
    let mut m = machine(false);
    let (reveal, _) = scheduled(&m.open()).unwrap();
    m.fire(reveal);
    let (hide, _) = scheduled(&m.close()).unwrap();
    let fx = m.open();
    assert_eq!(fx[0], Effect::Cancel(hide));
    assert_eq!(m.state(), PanelState::Opening);
    assert!(m.fire(hide).is_empty());
    assert_eq!(m.state(), PanelState::Opening);
}

#[test]
fn repeated_open_keeps_original_timer() {
    let mut m = machine(false);
    let (first, _) = scheduled(&m.open()).unwrap();
    let again = m.open();
    assert!(again.is_empty());
    assert_eq!(m.pending(), Some(first));
}

#[test]
fn repeated_open_refocuses_only() {
    let mut m = machine(true);
    let (t, _) = scheduled(&m.open()).unwrap();
    m.fire(t);
    let fx = m.open();
    assert_eq!(fx.as_slice(), &[Effect::Focus]);
    assert_eq!(m.state(), PanelState::Open);
}

#[test]
fn close_when_closed_is_a_no_op() {
    let mut m = machine(true);
    assert!(m.close().is_empty());
    assert_eq!(m.state(), PanelState::Closed);
}

#[test]
fn tokens_are_not_reused() {
    let mut m = machine(false);
    let (a, _) = scheduled(&m.open()).unwrap();
    let (b, _) = scheduled(&m.close()).unwrap();
    let (c, _) = scheduled(&m.open()).unwrap();
    assert!(a != b && b != c && a != c);
}

#[test]
fn adopt_drops_pending_and_renders() {
    let mut m = machine(false);
    let (t, _) = scheduled(&m.open()).unwrap();
    let fx = m.adopt(PanelState::Open);
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::Cancel(t),
            Effect::Render(MarkerSet::for_state(PanelState::Open))
        ]
    );
    assert_eq!(m.pending(), None);
    assert!(m.fire(t).is_empty());
}

#[test]
fn custom_timings_are_used() {
    let timings = Timings {
        reveal_delay_ms: 10,
        hide_delay_ms: 400,
        transition_ms: 300,
    };
    let mut m = PanelMachine::new(PanelKind::Menu, timings, false);
    let (t, reveal) = scheduled(&m.open()).unwrap();
    assert_eq!(reveal, 10);
    m.fire(t);
    let (_, hide) = scheduled(&m.close()).unwrap();
    assert_eq!(hide, 400);
}
