//! Image loading for the viewport.
//!
//! Natural dimensions are read only after `decode()` resolves, so a fit is
//! never computed from a half-loaded image.

#[cfg(test)]
#[path = "image_source_test.rs"]
mod image_source_test;

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::{ImageLoadError, js_error_message};
use crate::geom::Size;

/// Load `url` and report its natural size in CSS pixels.
///
/// # Errors
///
/// [`ImageLoadError::NoWindow`] outside a browser, [`ImageLoadError::Decode`]
/// if the fetch or decode fails, and [`ImageLoadError::EmptyImage`] if the
/// decoded image has a zero dimension.
pub async fn load_natural_size(url: &str) -> Result<Size, ImageLoadError> {
    if web_sys::window().is_none() {
        return Err(ImageLoadError::NoWindow);
    }
    let img = HtmlImageElement::new().map_err(|e| ImageLoadError::Decode(js_error_message(&e)))?;
    img.set_src(url);
    JsFuture::from(img.decode()).await.map_err(|e| ImageLoadError::Decode(js_error_message(&e)))?;
    natural_size(img.natural_width(), img.natural_height())
}

/// Validate natural dimensions reported by the browser.
///
/// # Errors
///
/// [`ImageLoadError::EmptyImage`] when either edge is zero.
pub fn natural_size(width: u32, height: u32) -> Result<Size, ImageLoadError> {
    if width == 0 || height == 0 {
        return Err(ImageLoadError::EmptyImage { width, height });
    }
    Ok(Size::new(f64::from(width), f64::from(height)))
}
