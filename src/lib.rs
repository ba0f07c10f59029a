#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use panel_core::ControllerConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod panels;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("catalog-web starting");
    Ok(())
}

/// Wire the menu and search panels. `config` is an optional object of
/// overrides (camelCase keys); `undefined` or `null` uses the site defaults.
/// Wiring happens now if the document is parsed, else on DOMContentLoaded.
#[wasm_bindgen(js_name = initPanels)]
pub fn init_panels(config: JsValue) -> Result<(), JsValue> {
    static STARTED: AtomicBool = AtomicBool::new(false);

    let config = parse_config(&config).map_err(to_js)?;
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("initPanels called twice; ignoring");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| to_js(anyhow!("no document")))?;

    let ran = dom::on_dom_ready(&document, move |doc| {
        let res = init(doc, &config);
        if let Err(e) = &res {
            log::error!("init error: {:?}", e);
        }
        res
    });
    match ran {
        Some(res) => res.map_err(to_js),
        None => Ok(()),
    }
}

fn parse_config(value: &JsValue) -> anyhow::Result<ControllerConfig> {
    let config = if value.is_undefined() || value.is_null() {
        ControllerConfig::default()
    } else {
        #[allow(deprecated)]
        let parsed = value.into_serde::<ControllerConfig>();
        parsed.map_err(|e| anyhow!("invalid panel config: {e}"))?
    };
    config.validate()?;
    Ok(config)
}

fn init(document: &web::Document, config: &ControllerConfig) -> anyhow::Result<()> {
    // every lookup succeeds before the page is touched
    let triggers = events::resolve_triggers(document, config)?;
    let panels = panels::build(document, config)?;
    events::wire_triggers(triggers, &panels);
    if config.dismiss_on_escape {
        events::wire_escape_dismiss(panels);
    }
    log::info!("[panels] wired");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}
