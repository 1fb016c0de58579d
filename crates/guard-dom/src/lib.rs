//! Browser binding for the form guard.
//!
//! Looks up the form, email field and message surface by class name and
//! registers a `submit` listener that runs [`guard_core::FormGuard`].
//!
//! ```rust,ignore
//! use guard_core::GuardConfig;
//!
//! let handle = guard_dom::attach(&GuardConfig::default())?;
//! handle.forget(); // keep the listener for the page lifetime
//! ```
//!
//! From JavaScript, after loading the wasm module:
//!
//! ```js
//! import init, { attach_form_guard } from "./pkg/guard_dom.js";
//! await init();
//! attach_form_guard();
//! ```

mod attach;
mod surface;

pub use attach::*;
pub use surface::*;
