//! Seal renderer and interactive image viewport for the browser photo editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! loosely coupled pieces of client-side logic: the procedural seal/watermark
//! renderer (text layout into balanced columns or rows, shape clipping, ink
//! styles, noise texture) and the zoom/pan/pinch viewport that displays the
//! working image. The host UI is responsible only for wiring DOM events and
//! form controls into these types and applying the resulting transforms.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`seal`] | Seal configuration, text layout, style strategies and the draw plan |
//! | [`render`] | Replays a seal plan onto a 2D canvas context; PNG export |
//! | [`viewport`] | Zoom/pan state, fit-to-container math, CSS transform output |
//! | [`input`] | Gesture state machine types, modifiers and keys |
//! | [`engine`] | Testable [`engine::ViewportController`] and the browser [`engine::ImageViewer`] |
//! | [`image_source`] | Async image loading with natural-size reporting |
//! | [`prefs`] | Saved seal templates in local storage |
//! | [`credits`] | Backend context lifecycle and the credit gate for paid operations |
//! | [`geom`] | Points and sizes shared by every module |
//! | [`error`] | Error types surfaced to the host |
//! | [`consts`] | Shared numeric constants (zoom limits, padding, noise density, etc.) |

pub mod consts;
pub mod credits;
pub mod engine;
pub mod error;
pub mod geom;
pub mod image_source;
pub mod input;
pub mod prefs;
pub mod render;
pub mod seal;
pub mod viewport;

/// Install the browser console logger and panic hook.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
