//! CTA landing section with a guarded email form.
//!
//! This workload demonstrates:
//! - `CtaForm` rendering the form and running the guard on submit
//! - `SignalSurface` driving the message through a Leptos signal
//! - Guard configuration shared through context

mod app;
mod surface;

pub use app::*;
pub use surface::*;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
