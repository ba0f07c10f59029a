use crate::dom;
use crate::panels::{self, SharedPanels};
use panel_core::{ControllerConfig, ElementRole, Trigger};
use web_sys as web;

fn role(trigger: Trigger) -> ElementRole {
    if trigger.opens() {
        ElementRole::OpenTrigger(trigger.panel())
    } else {
        ElementRole::CloseTrigger(trigger.panel())
    }
}

pub fn resolve_triggers(
    document: &web::Document,
    config: &ControllerConfig,
) -> anyhow::Result<Vec<(Trigger, web::HtmlElement)>> {
    Trigger::ALL
        .into_iter()
        .map(|t| Ok((t, dom::element_by_id(document, t.element_id(config), role(t))?)))
        .collect()
}

/// Bind each trigger element to its transition.
pub fn wire_triggers(resolved: Vec<(Trigger, web::HtmlElement)>, panels: &SharedPanels) {
    for (trigger, el) in resolved {
        let panels = panels.clone();
        dom::add_click_listener(&el, move || {
            let effects = panels.borrow_mut().controller_mut().trigger(trigger);
            panels::dispatch(&panels, trigger.panel(), effects);
        });
    }
}
