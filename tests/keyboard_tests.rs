// Host-side tests for the key mapping used by the global keydown handler.

use panel_core::{action_for_key, KeyAction};

#[test]
fn escape_dismisses() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::DismissAll));
    // legacy Edge/IE key name
    assert_eq!(action_for_key("Esc"), Some(KeyAction::DismissAll));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["", "e", "E", "Enter", " ", "Tab", "escape", "/", "ArrowUp"] {
        assert_eq!(action_for_key(key), None, "key {key:?} should be ignored");
    }
}
