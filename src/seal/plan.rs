//! Backend-independent draw plan for one seal render.
//!
//! A [`SealPlan`] is an ordered list of [`DrawOp`]s in logical coordinates.
//! [`crate::render::draw`] replays it onto a browser canvas; tests inspect
//! it directly.

use crate::geom::Size;

use super::layout::GlyphRun;
use super::noise::Particle;
use super::style::ClipShape;

/// One drawing step.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Intersect the clip region with `shape` for all following ops.
    Clip(ClipShape),
    /// Fill the full canvas (inside the current clip).
    FillCanvas { color: String },
    /// Stroke an outline.
    StrokeShape { shape: ClipShape, color: String, width: f64 },
    /// Draw one text run with the given font and fill.
    Text { run: GlyphRun, font: String, color: String },
    /// Punch a transparent hole (destination-out).
    Punch(Particle),
}

/// Everything the rasterizer needs for one seal.
#[derive(Debug, Clone, PartialEq)]
pub struct SealPlan {
    /// Output size in logical px.
    pub size: Size,
    /// Backing-store pixels per logical pixel.
    pub supersample: f64,
    /// Glyph size used for every run.
    pub glyph_size: f64,
    /// Lines produced by segmentation.
    pub lines: Vec<String>,
    pub ops: Vec<DrawOp>,
}

impl SealPlan {
    /// Backing-store dimensions in device pixels.
    #[must_use]
    pub fn raster_size(&self) -> Size {
        Size::new(
            (self.size.width * self.supersample).round(),
            (self.size.height * self.supersample).round(),
        )
    }

    /// Active clip, if any.
    #[must_use]
    pub fn clip(&self) -> Option<ClipShape> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Clip(shape) => Some(*shape),
            _ => None,
        })
    }

    /// Background fill color, if any.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::FillCanvas { color } => Some(color.as_str()),
            _ => None,
        })
    }

    /// Iterate stroke ops.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::StrokeShape { .. }))
    }

    /// Iterate text runs with their fill color.
    pub fn text_runs(&self) -> impl Iterator<Item = (&GlyphRun, &str)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { run, color, .. } => Some((run, color.as_str())),
            _ => None,
        })
    }

    /// Number of noise particles.
    #[must_use]
    pub fn punch_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Punch(_))).count()
    }

    /// The plan with the noise texture removed; equal configs give equal geometry.
    #[must_use]
    pub fn geometry(&self) -> Self {
        Self {
            ops: self.ops.iter().filter(|op| !matches!(op, DrawOp::Punch(_))).cloned().collect(),
            ..self.clone()
        }
    }
}

/// CSS font shorthand for a glyph size and family.
#[must_use]
pub fn font_css(size: f64, family: &str) -> String {
    format!("{size}px {family}")
}
