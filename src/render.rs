//! Rasterization: replays a [`SealPlan`] onto a 2D canvas context, and PNG export.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a finished plan and produces pixels; layout decisions all live
//! in [`crate::seal`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The export entry points map them into [`ExportError`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use crate::consts::{MAX_EXPORT_EDGE_PX, SUPERSAMPLE};
use crate::error::{ExportError, js_error_message};
use crate::geom::Size;
use crate::seal::style::ClipShape;
use crate::seal::{self, DrawOp, SealConfig, SealPlan};

/// MIME type of exported seals.
pub const PNG_MIME: &str = "image/png";

/// What a browser returns from `toDataURL` when it cannot encode.
const EMPTY_DATA_URL: &str = "data:,";

/// Draw `plan` into `ctx`, whose canvas is already sized to `plan.raster_size()`.
///
/// The target is cleared and every piece of context state this function sets
/// is restored, so repeated calls never accumulate.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, plan: &SealPlan) -> Result<(), JsValue> {
    let s = plan.supersample;

    ctx.save();
    ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, plan.size.width, plan.size.height);
    ctx.set_text_baseline("middle");

    let mut punching = false;
    for op in &plan.ops {
        match op {
            DrawOp::Clip(shape) => {
                ctx.begin_path();
                trace_shape(ctx, *shape)?;
                ctx.clip();
            }
            DrawOp::FillCanvas { color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, plan.size.width, plan.size.height);
            }
            DrawOp::StrokeShape { shape, color, width } => {
                ctx.begin_path();
                trace_shape(ctx, *shape)?;
                ctx.set_line_width(*width);
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawOp::Text { run, font, color } => {
                ctx.set_font(font);
                ctx.set_text_align(run.align.as_css());
                ctx.set_fill_style_str(color);
                ctx.fill_text(&run.text, run.at.x, run.at.y)?;
            }
            DrawOp::Punch(particle) => {
                if !punching {
                    ctx.set_global_composite_operation("destination-out")?;
                    ctx.set_fill_style_str("#000");
                    punching = true;
                }
                ctx.begin_path();
                ctx.arc(particle.center.x, particle.center.y, particle.radius, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
        }
    }

    ctx.restore();
    Ok(())
}

/// Render `config` into an on-page canvas, resizing its backing store.
///
/// Used for the live preview: call on every config change.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or a draw call fails.
pub fn render_to_canvas(canvas: &HtmlCanvasElement, config: &SealConfig) -> Result<SealPlan, JsValue> {
    let plan = seal::render_plan(config, &mut browser_rng());
    let ctx = context_2d(canvas)?;
    size_backing_store(canvas, &plan);
    draw(&ctx, &plan)?;
    Ok(plan)
}

/// A rendered seal held in an offscreen canvas.
pub struct SealRaster {
    canvas: HtmlCanvasElement,
    plan: SealPlan,
}

impl SealRaster {
    /// The offscreen canvas, usable as an image source for other layers.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The plan that produced this raster.
    #[must_use]
    pub fn plan(&self) -> &SealPlan {
        &self.plan
    }

    /// Encode as a `data:image/png;base64,...` URL.
    ///
    /// # Errors
    ///
    /// [`ExportError::Encode`] if the browser produced no image data.
    pub fn to_png_data_url(&self) -> Result<String, ExportError> {
        let url = self
            .canvas
            .to_data_url_with_type(PNG_MIME)
            .map_err(|e| ExportError::Draw(js_error_message(&e)))?;
        validate_data_url(url)
    }
}

/// Render `config` into a fresh offscreen canvas.
///
/// # Errors
///
/// [`ExportError::TooLarge`] when the supersampled raster exceeds the canvas
/// limit, [`ExportError::Canvas`] when no canvas can be created, and
/// [`ExportError::Draw`] when drawing fails.
pub fn render(config: &SealConfig) -> Result<SealRaster, ExportError> {
    check_raster_size(config)?;
    let plan = seal::render_plan(config, &mut browser_rng());

    let canvas = offscreen_canvas()?;
    let ctx = context_2d(&canvas).map_err(|e| ExportError::Canvas(js_error_message(&e)))?;
    size_backing_store(&canvas, &plan);
    draw(&ctx, &plan).map_err(|e| ExportError::Draw(js_error_message(&e)))?;
    Ok(SealRaster { canvas, plan })
}

/// Render and encode in one step. Nothing is returned unless encoding succeeds.
///
/// # Errors
///
/// See [`render`] and [`SealRaster::to_png_data_url`].
pub fn export_png(config: &SealConfig) -> Result<String, ExportError> {
    let result = render(config).and_then(|raster| raster.to_png_data_url());
    if let Err(err) = &result {
        log::warn!("seal export failed: {err}");
    }
    result
}

/// Trigger a browser download of `data_url` as `file_name`.
///
/// # Errors
///
/// [`ExportError::Canvas`] if the document or anchor element is unavailable.
pub fn download_png(data_url: &str, file_name: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Canvas("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Canvas(js_error_message(&e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Canvas("anchor element expected".to_owned()))?;
    anchor.set_href(data_url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Download file name for a seal exported at `timestamp_ms`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn export_file_name(timestamp_ms: f64) -> String {
    format!("watermark-{}.png", timestamp_ms.max(0.0).trunc() as i64)
}

/// Reject requested sizes whose backing store the browser cannot allocate.
///
/// Runs on the raw request, before anything is planned or allocated.
///
/// # Errors
///
/// [`ExportError::TooLarge`] when either supersampled edge exceeds
/// [`MAX_EXPORT_EDGE_PX`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn check_raster_size(config: &SealConfig) -> Result<(), ExportError> {
    let requested = config.canvas_size;
    let raster = Size::new((requested.width * SUPERSAMPLE).round(), (requested.height * SUPERSAMPLE).round());
    if raster.width > MAX_EXPORT_EDGE_PX || raster.height > MAX_EXPORT_EDGE_PX {
        return Err(ExportError::TooLarge {
            width: raster.width as u32,
            height: raster.height as u32,
            max: MAX_EXPORT_EDGE_PX as u32,
        });
    }
    Ok(())
}

/// Accept only non-empty PNG data URLs.
///
/// # Errors
///
/// [`ExportError::Encode`] for an empty or non-PNG payload.
pub fn validate_data_url(url: String) -> Result<String, ExportError> {
    if url == EMPTY_DATA_URL || !url.starts_with("data:image/png") {
        return Err(ExportError::Encode);
    }
    Ok(url)
}

// =============================================================
// Helpers
// =============================================================

/// Add the outline of `shape` to the current path.
fn trace_shape(ctx: &CanvasRenderingContext2d, shape: ClipShape) -> Result<(), JsValue> {
    match shape {
        ClipShape::RoundedRect { size, radius: r } => {
            let (w, h) = (size.width, size.height);
            ctx.move_to(r, 0.0);
            ctx.line_to(w - r, 0.0);
            ctx.quadratic_curve_to(w, 0.0, w, r);
            ctx.line_to(w, h - r);
            ctx.quadratic_curve_to(w, h, w - r, h);
            ctx.line_to(r, h);
            ctx.quadratic_curve_to(0.0, h, 0.0, h - r);
            ctx.line_to(0.0, r);
            ctx.quadratic_curve_to(0.0, 0.0, r, 0.0);
            ctx.close_path();
        }
        ClipShape::Circle { center, radius } => {
            ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        }
        ClipShape::Ellipse { center, radii } => {
            ctx.ellipse(center.x, center.y, radii.width, radii.height, 0.0, 0.0, 2.0 * PI)?;
        }
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_backing_store(canvas: &HtmlCanvasElement, plan: &SealPlan) {
    let raster = plan.raster_size();
    canvas.set_width(raster.width as u32);
    canvas.set_height(raster.height as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected context type"))
}

fn offscreen_canvas() -> Result<HtmlCanvasElement, ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Canvas("no document".to_owned()))?;
    document
        .create_element("canvas")
        .map_err(|e| ExportError::Canvas(js_error_message(&e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Canvas("canvas element expected".to_owned()))
}

/// Noise generator seeded from the browser's `Math.random`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_rng() -> SmallRng {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    SmallRng::seed_from_u64((hi << 32) | lo)
}
