use anyhow::anyhow;
use panel_core::ElementRole;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve `id` to an element, naming its role when it is missing.
pub fn element_by_id(
    document: &web::Document,
    id: &str,
    role: ElementRole,
) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id} ({role})"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("#{id} ({role}) is not an HTML element"))
}

#[inline]
pub fn has_class(el: &web::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, present: bool) {
    let cl = el.class_list();
    let res = if present {
        cl.add_1(class)
    } else {
        cl.remove_1(class)
    };
    if let Err(e) = res {
        log::warn!("[dom] class `{}` update failed: {:?}", class, e);
    }
}

/// Register a click handler for the page lifetime.
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` now if the document is parsed, otherwise on DOMContentLoaded.
/// Returns `Some` with the result when `f` ran synchronously.
pub fn on_dom_ready<T: 'static>(
    document: &web::Document,
    f: impl FnOnce(&web::Document) -> T + 'static,
) -> Option<T> {
    if document.ready_state() != "loading" {
        return Some(f(document));
    }
    let doc = document.clone();
    let ready = Closure::once(move || {
        f(&doc);
    });
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref());
    ready.forget();
    None
}
