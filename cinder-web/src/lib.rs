//! Cinder Web Input Backend
//!
//! Binds the platform-independent input engine from `cinder-input` to the
//! browser DOM: hooks the canvas/document/window event listeners, converts
//! `web_sys` events into raw engine events, and exposes the polling surface
//! game code reads every frame.

#[cfg(target_arch = "wasm32")]
pub mod backend;
#[cfg(target_arch = "wasm32")]
mod pointer_lock;
#[cfg(target_arch = "wasm32")]
mod sensors;

#[cfg(target_arch = "wasm32")]
pub use backend::{InputConfig, WebInput};

pub use cinder_input as input;

/// Route `log` output to the browser console and install the panic hook.
/// Call once when the backend starts up.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}
