//! Thin helpers over `web_sys` shared by the page enhancements.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, EventTarget, Window};

use crate::error::{EnhanceError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EnhanceError::MissingWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(EnhanceError::MissingDocument)
}

/// Looks up an element by id and casts it, `None` if absent or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Attaches a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Same as [`listen`] with `{ passive: true }`.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Runs `f` once the DOM is parsed; immediately if it already is.
pub fn on_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
