use panel_core::{ConfigError, ControllerConfig, ElementRole, PanelKind, Timings, Trigger};

#[test]
fn defaults_match_site_markup() {
    let c = ControllerConfig::default();
    assert!(c.validate().is_ok());

    let ids: Vec<&str> = c.element_ids().into_iter().map(|(_, id)| id).collect();
    assert_eq!(
        ids,
        [
            "menu",
            "menu-section",
            "menu-btn",
            "hide-menu-btn",
            "search-bar",
            "search-section",
            "search-btn",
            "close-search",
            "search",
        ]
    );
    assert_eq!(c.menu.markers.offscreen, "left-[-300px]");
    assert_eq!(c.search.markers.offscreen, "top-[-60px]");
    assert_eq!(c.timings.reveal_delay_ms, 50);
    assert_eq!(c.timings.hide_delay_ms, 200);
}

#[test]
fn trigger_ids_follow_config() {
    let c = ControllerConfig::default();
    assert_eq!(Trigger::OpenMenu.element_id(&c), "menu-btn");
    assert_eq!(Trigger::CloseMenu.element_id(&c), "hide-menu-btn");
    assert_eq!(Trigger::OpenSearch.element_id(&c), "search-btn");
    assert_eq!(Trigger::CloseSearch.element_id(&c), "close-search");
}

#[test]
fn duplicate_id_is_rejected() {
    let mut c = ControllerConfig::default();
    c.search.close_trigger_id = "hide-menu-btn".into();
    assert_eq!(
        c.validate(),
        Err(ConfigError::DuplicateId {
            id: "hide-menu-btn".into(),
            first: ElementRole::CloseTrigger(PanelKind::Menu),
            second: ElementRole::CloseTrigger(PanelKind::Search),
        })
    );
}

#[test]
fn empty_id_is_rejected() {
    let mut c = ControllerConfig::default();
    c.menu.section_id = "  ".into();
    let err = c.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::EmptyId {
            role: ElementRole::Section(PanelKind::Menu)
        }
    );
    assert_eq!(err.to_string(), "empty element id for menu section");
}

#[test]
fn empty_marker_is_rejected() {
    let mut c = ControllerConfig::default();
    c.search.markers.shown = String::new();
    assert_eq!(
        c.validate(),
        Err(ConfigError::EmptyMarker {
            panel: PanelKind::Search,
            marker: "shown",
        })
    );
}

#[test]
fn bad_timings_are_rejected() {
    let mut c = ControllerConfig::default();
    c.timings.reveal_delay_ms = 0;
    assert!(matches!(c.validate(), Err(ConfigError::ZeroDelay { .. })));

    c.timings = Timings {
        hide_delay_ms: 100,
        ..Timings::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::HideBeforeTransition {
            hide_delay_ms: 100,
            transition_ms: 150,
        })
    );
}

#[test]
fn partial_json_overrides() {
    let c: ControllerConfig = serde_json::from_str(
        r#"{ "timings": { "hideDelayMs": 350 }, "dismissOnEscape": false }"#,
    )
    .unwrap();
    assert_eq!(c.timings.hide_delay_ms, 350);
    assert_eq!(c.timings.reveal_delay_ms, 50);
    assert!(!c.dismiss_on_escape);
    assert_eq!(c.menu, ControllerConfig::default().menu);
    assert!(c.validate().is_ok());
}

#[test]
fn panel_override_without_focus() {
    let json = r#"{
        "search": {
            "panelId": "sb",
            "sectionId": "sb-wrap",
            "openTriggerId": "sb-open",
            "closeTriggerId": "sb-close",
            "markers": {
                "hidden": "is-hidden",
                "startPose": "sb-start",
                "offscreen": "sb-off",
                "shown": "sb-on"
            }
        }
    }"#;
    let c: ControllerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(c.search.focus_id, None);
    assert_eq!(c.search.markers.hidden, "is-hidden");
    assert_eq!(c.element_ids().len(), 8);
    assert!(c.validate().is_ok());
}

#[test]
fn incomplete_panel_override_fails_to_parse() {
    let res = serde_json::from_str::<ControllerConfig>(r#"{ "menu": { "panelId": "m" } }"#);
    assert!(res.is_err());
}
