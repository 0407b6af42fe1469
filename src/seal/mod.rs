//! Seal/watermark rendering: configuration in, draw plan out.
//!
//! Rendering is a pure function of [`SealConfig`] plus a random source for
//! the noise texture:
//!
//! 1. sanitize the config (clamp, never fail),
//! 2. resolve the style into a [`style::Plate`] (clip, background, border),
//! 3. segment and size the text ([`layout`]),
//! 4. scatter noise particles when the style is textured ([`noise`]).
//!
//! The result is a [`SealPlan`] that the rasterizer replays. Nothing is
//! cached between calls: glyph size and layout are recomputed every time.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod config;
pub mod layout;
pub mod noise;
pub mod plan;
pub mod presets;
pub mod style;

use rand::Rng;

pub use config::{Alignment, Direction, SealConfig, SealLayout, SealShape, SealStyle};
pub use plan::{DrawOp, SealPlan};

use crate::consts::SUPERSAMPLE;

/// Build the full draw plan for `config`.
pub fn render_plan<R: Rng + ?Sized>(config: &SealConfig, rng: &mut R) -> SealPlan {
    let config = config.sanitized();
    let plate = style::plate(&config);
    let block = layout::layout(&config);

    let mut ops = Vec::with_capacity(block.runs.len() + 4);

    // Clip first so the background respects the shape.
    if let Some(clip) = plate.clip {
        ops.push(DrawOp::Clip(clip));
    }
    if let Some(color) = &plate.background {
        ops.push(DrawOp::FillCanvas { color: color.clone() });
    }
    if let Some(border) = &plate.border {
        ops.push(DrawOp::StrokeShape {
            shape: border.shape,
            color: border.color.clone(),
            width: border.width,
        });
    }

    let font = plan::font_css(block.glyph_size, &config.font_family);
    ops.extend(block.runs.into_iter().map(|run| DrawOp::Text {
        run,
        font: font.clone(),
        color: plate.glyph_color.clone(),
    }));

    if plate.textured {
        ops.extend(
            noise::scatter(config.canvas_size, config.noise_intensity, rng)
                .into_iter()
                .map(DrawOp::Punch),
        );
    }

    log::debug!(
        "seal plan: {} lines, glyph {:.1}px, {} ops",
        block.lines.len(),
        block.glyph_size,
        ops.len()
    );

    SealPlan {
        size: config.canvas_size,
        supersample: SUPERSAMPLE,
        glyph_size: block.glyph_size,
        lines: block.lines,
        ops,
    }
}
