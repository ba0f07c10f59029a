use crate::dom;
use panel_core::{
    Controller, ControllerConfig, Effect, Effects, ElementRole, MarkerClasses, MarkerSet,
    PanelConfig, PanelKind, PanelState, TimerToken,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One panel's elements plus the browser timer backing its pending step.
pub struct PanelView {
    panel: web::HtmlElement,
    section: web::HtmlElement,
    focus: Option<web::HtmlElement>,
    markers: MarkerClasses,
    timeout: Option<(TimerToken, i32)>,
}

impl PanelView {
    fn resolve(
        document: &web::Document,
        kind: PanelKind,
        cfg: &PanelConfig,
    ) -> anyhow::Result<Self> {
        let panel = dom::element_by_id(document, &cfg.panel_id, ElementRole::Panel(kind))?;
        let section = dom::element_by_id(document, &cfg.section_id, ElementRole::Section(kind))?;
        let focus = match &cfg.focus_id {
            Some(id) => Some(dom::element_by_id(document, id, ElementRole::FocusTarget(kind))?),
            None => None,
        };
        Ok(Self {
            panel,
            section,
            focus,
            markers: cfg.markers.clone(),
            timeout: None,
        })
    }

    fn observed_state(&self) -> PanelState {
        PanelState::infer(
            dom::has_class(&self.section, &self.markers.hidden),
            dom::has_class(&self.panel, &self.markers.shown),
        )
    }

    fn render(&self, m: MarkerSet) {
        dom::set_class(&self.section, &self.markers.hidden, m.section_hidden);
        dom::set_class(&self.panel, &self.markers.start_pose, m.start_pose);
        dom::set_class(&self.panel, &self.markers.offscreen, m.offscreen);
        dom::set_class(&self.panel, &self.markers.shown, m.shown);
    }

    fn focus(&self) {
        if let Some(el) = &self.focus {
            if let Err(e) = el.focus() {
                log::warn!("[panels] focus failed: {:?}", e);
            }
        }
    }
}

pub struct Panels {
    controller: Controller,
    menu: PanelView,
    search: PanelView,
}

impl Panels {
    fn view(&self, kind: PanelKind) -> &PanelView {
        match kind {
            PanelKind::Menu => &self.menu,
            PanelKind::Search => &self.search,
        }
    }

    fn view_mut(&mut self, kind: PanelKind) -> &mut PanelView {
        match kind {
            PanelKind::Menu => &mut self.menu,
            PanelKind::Search => &mut self.search,
        }
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }
}

pub type SharedPanels = Rc<RefCell<Panels>>;

/// Resolve both panels' elements, then adopt the page's current state.
/// Nothing is wired if any lookup fails.
pub fn build(document: &web::Document, config: &ControllerConfig) -> anyhow::Result<SharedPanels> {
    let menu = PanelView::resolve(document, PanelKind::Menu, &config.menu)?;
    let search = PanelView::resolve(document, PanelKind::Search, &config.search)?;
    let panels = Rc::new(RefCell::new(Panels {
        controller: Controller::new(config),
        menu,
        search,
    }));
    for kind in PanelKind::ALL {
        let effects = {
            let mut p = panels.borrow_mut();
            let observed = p.view(kind).observed_state();
            log::info!("[panels] {} starts {:?}", kind, observed);
            p.controller.adopt(kind, observed)
        };
        dispatch(&panels, kind, effects);
    }
    Ok(panels)
}

/// Execute machine effects against the page, in order.
pub fn dispatch(panels: &SharedPanels, kind: PanelKind, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::Cancel(token) => {
                let mut p = panels.borrow_mut();
                let view = p.view_mut(kind);
                if let Some((pending, handle)) = view.timeout {
                    if pending == token {
                        view.timeout = None;
                        if let Some(window) = web::window() {
                            window.clear_timeout_with_handle(handle);
                        }
                    }
                }
            }
            Effect::Render(markers) => {
                panels.borrow().view(kind).render(markers);
            }
            Effect::Focus => {
                panels.borrow().view(kind).focus();
            }
            Effect::Schedule { token, delay_ms } => {
                let handle = schedule(panels, kind, token, delay_ms);
                panels.borrow_mut().view_mut(kind).timeout = handle.map(|h| (token, h));
            }
        }
    }
}

fn schedule(
    panels: &SharedPanels,
    kind: PanelKind,
    token: TimerToken,
    delay_ms: u32,
) -> Option<i32> {
    let window = web::window()?;
    let panels = panels.clone();
    let callback = Closure::once_into_js(move || fire(&panels, kind, token));
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        timeout,
    ) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("[panels] {} timer not scheduled: {:?}", kind, e);
            None
        }
    }
}

fn fire(panels: &SharedPanels, kind: PanelKind, token: TimerToken) {
    let effects = {
        let mut p = panels.borrow_mut();
        let view = p.view_mut(kind);
        if matches!(view.timeout, Some((pending, _)) if pending == token) {
            view.timeout = None;
        }
        p.controller.fire(kind, token)
    };
    dispatch(panels, kind, effects);
}
