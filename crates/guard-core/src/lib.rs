//! Client-side email form guard.
//!
//! The guard intercepts a form's submit intent, inspects the email field and
//! renders exactly one of three feedback messages onto a message surface.
//!
//! This crate provides:
//! - `Feedback` - The empty / invalid / success taxonomy
//! - `FormGuard` - Submit handling against any `MessageSurface`
//! - `MessageState` - In-memory surface, hidden until the first submit
//! - `GuardConfig` - Class names, messages and the success color
//! - `markup` - HTML rendering of the guarded form
//!
//! # Quick Start
//!
//! ```rust
//! use guard_core::{FormGuard, GuardConfig, MessageState, SubmitIntent};
//!
//! struct Suppress;
//!
//! impl SubmitIntent for Suppress {
//!     fn prevent_default(&self) {}
//! }
//!
//! let guard = FormGuard::new(GuardConfig::default());
//! let mut surface = MessageState::default();
//!
//! guard.handle_submit(&Suppress, "user@example.com", &mut surface);
//! assert_eq!(surface.text, "Success!");
//! ```

mod config;
mod error;
mod feedback;
mod guard;
pub mod markup;
mod surface;

pub use config::*;
pub use error::*;
pub use feedback::*;
pub use guard::*;
pub use surface::*;
