//! Error types surfaced to the host UI.
//!
//! Seal configuration problems and gesture-ordering problems never appear
//! here: the renderer clamps bad input and the controller ignores orphaned
//! gesture updates. Only failures the user must hear about are modeled.

use wasm_bindgen::JsValue;

/// Error returned by [`crate::image_source::load_natural_size`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageLoadError {
    /// The browser environment (window/document) is not available.
    #[error("browser environment unavailable")]
    NoWindow,
    /// The image could not be fetched or decoded.
    #[error("image failed to load: {0}")]
    Decode(String),
    /// The image decoded but reported a degenerate natural size.
    #[error("image has no usable dimensions ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Error returned by seal raster export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    /// The requested backing store exceeds the browser's canvas limits.
    #[error("raster too large: {width}x{height} px (max edge {max} px)")]
    TooLarge { width: u32, height: u32, max: u32 },
    /// An offscreen canvas or its 2D context could not be created.
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    /// Drawing into the canvas failed.
    #[error("drawing failed: {0}")]
    Draw(String),
    /// The encoder produced no image data.
    #[error("PNG encoding failed")]
    Encode,
}

/// Error returned by credit-gated operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreditError {
    /// The caller's balance does not cover the operation.
    #[error("not enough credits: {needed} needed, {available} available")]
    Insufficient { needed: u32, available: u32 },
    /// The backend context was never initialized or has been torn down.
    #[error("backend is not connected")]
    NotConnected,
    /// The remote operation failed; no credits were charged.
    #[error("remote operation failed: {0}")]
    Remote(String),
}

/// Error returned by the template store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Local storage is disabled or unavailable.
    #[error("local storage unavailable")]
    Unavailable,
    /// The store rejected a write (quota, privacy mode).
    #[error("storage write failed: {0}")]
    Write(String),
    /// Serialized templates could not be encoded.
    #[error("template encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Render a `JsValue` error as a readable string.
#[must_use]
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
