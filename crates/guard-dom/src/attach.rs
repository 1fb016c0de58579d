//! Listener registration.

use guard_core::{FormGuard, GuardConfig, GuardError, GuardResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::surface::{DomSubmit, DomSurface};

const SUBMIT: &str = "submit";

/// A registered submit listener.
///
/// Dropping the handle removes the listener. Call [`GuardHandle::forget`] to
/// keep it for the rest of the page lifetime.
pub struct GuardHandle {
    form: Element,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

impl GuardHandle {
    /// Leak the listener so it stays registered.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }

    /// Get the guarded form element.
    pub fn form(&self) -> &Element {
        &self.form
    }
}

impl Drop for GuardHandle {
    fn drop(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };

        if let Err(err) = self
            .form
            .remove_event_listener_with_callback(SUBMIT, listener.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to remove submit listener");
            return;
        }
        tracing::info!("form guard detached");
    }
}

/// Attach a guard to the current page's document.
pub fn attach(config: &GuardConfig) -> GuardResult<GuardHandle> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| GuardError::Dom("no document available".to_string()))?;

    attach_to(&document, config)
}

/// Attach a guard to the form in `document`.
///
/// All three elements must already exist. The email field must be an
/// `<input>` and the message surface an HTML element.
pub fn attach_to(document: &Document, config: &GuardConfig) -> GuardResult<GuardHandle> {
    config.ensure_valid()?;

    let classes = &config.classes;
    let form = query(document, &classes.form_selector())?;
    let input: HtmlInputElement =
        query_as(document, &classes.email_input_selector(), "HtmlInputElement")?;
    let message: HtmlElement = query_as(document, &classes.message_selector(), "HtmlElement")?;

    let guard = FormGuard::new(config.clone());
    let mut surface = DomSurface::new(message);
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        guard.handle_submit(&DomSubmit::new(&event), &input.value(), &mut surface);
    });

    form.add_event_listener_with_callback(SUBMIT, listener.as_ref().unchecked_ref())
        .map_err(js_error)?;

    tracing::info!(form = %classes.form, "form guard attached");

    Ok(GuardHandle {
        form,
        listener: Some(listener),
    })
}

fn query(document: &Document, selector: &str) -> GuardResult<Element> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| GuardError::ElementNotFound {
            selector: selector.to_string(),
        })
}

fn query_as<T: JsCast>(document: &Document, selector: &str, expected: &str) -> GuardResult<T> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| GuardError::ElementType {
            selector: selector.to_string(),
            expected: expected.to_string(),
        })
}

fn js_error(value: JsValue) -> GuardError {
    GuardError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Attach the guard with the default configuration for the page lifetime.
#[wasm_bindgen]
pub fn attach_form_guard() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    attach(&GuardConfig::default())
        .map(GuardHandle::forget)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Attach the guard with a JSON configuration for the page lifetime.
///
/// Missing fields fall back to their defaults.
#[wasm_bindgen]
pub fn attach_form_guard_with_config(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: GuardConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid guard config: {}", e)))?;

    attach(&config)
        .map(GuardHandle::forget)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
