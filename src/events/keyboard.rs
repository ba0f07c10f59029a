use crate::panels::{self, SharedPanels};
use panel_core::{action_for_key, KeyAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, panels: &SharedPanels) {
    if let Some(KeyAction::DismissAll) = action_for_key(&ev.key()) {
        let closing = panels.borrow_mut().controller_mut().dismiss_all();
        for (kind, effects) in closing {
            if !effects.is_empty() {
                log::debug!("[keys] escape closes {}", kind);
            }
            panels::dispatch(panels, kind, effects);
        }
    }
}

// Escape closes whatever panel is open
pub fn wire_escape_dismiss(panels: SharedPanels) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &panels);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
