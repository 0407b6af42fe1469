//! Seal text layout: segmentation into lines, glyph sizing, glyph placement.
//!
//! All coordinates are logical pixels with the origin at the top-left of the
//! seal canvas. Supersampling is applied later by the rasterizer as a single
//! global transform, so nothing here knows about device pixels.
//!
//! Lines are the unit of distribution: in vertical direction a line is one
//! column, drawn right-to-left; in horizontal direction a line is one row,
//! drawn top-to-bottom. Characters are counted as Unicode scalar values.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{BORDER_PADDING_EXTRA, FREEHAND_PADDING, MIN_GLYPH_SIZE, PLATE_PADDING};
use crate::geom::{Point, Size};

use super::config::{Alignment, Direction, SealConfig, SealLayout, SealStyle};

/// Horizontal anchor of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Value for `CanvasRenderingContext2d.textAlign`.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// A piece of text anchored at a point (vertical middle baseline).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub text: String,
    pub at: Point,
    pub align: TextAlign,
}

/// The fully laid-out text block for one seal.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Lines (columns or rows) after segmentation; never empty.
    pub lines: Vec<String>,
    /// Uniform glyph size in logical px.
    pub glyph_size: f64,
    /// Margin between canvas edge and safe area.
    pub padding: f64,
    /// Positioned text runs in draw order.
    pub runs: Vec<GlyphRun>,
}

/// Lay out `config` completely. Expects a sanitized config.
#[must_use]
pub fn layout(config: &SealConfig) -> TextBlock {
    let lines = segment(&config.text, config.layout, config.direction, config.canvas_size);
    let padding = padding(config);
    let glyph_size = glyph_size(&lines, config);
    let runs = place(&lines, glyph_size, padding, config);
    TextBlock { lines, glyph_size, padding, runs }
}

// =============================================================
// Segmentation
// =============================================================

/// Break `text` into lines according to layout and direction.
///
/// The result is never empty: text with nothing drawable yields a single
/// empty line.
#[must_use]
pub fn segment(text: &str, layout: SealLayout, direction: Direction, canvas: Size) -> Vec<String> {
    let trimmed = text.trim();

    let lines = match layout {
        SealLayout::Single => vec![trimmed.replace("\r\n", " ").replace('\n', " ")],
        SealLayout::Grid if trimmed.contains('\n') => trimmed
            .split('\n')
            .map(|l| l.trim_end_matches('\r').to_owned())
            .collect(),
        SealLayout::Grid => auto_distribute(trimmed, direction, canvas),
    };

    let mut lines: Vec<String> = lines.into_iter().filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Number of lines the auto layout uses for `total_chars` characters.
///
/// Chosen so the grid's cell aspect matches the canvas: `sqrt(n * ar)` columns
/// for vertical text, `sqrt(n / ar)` rows for horizontal text. Never zero and
/// never more lines than characters.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn auto_line_count(total_chars: usize, direction: Direction, canvas: Size) -> usize {
    if total_chars == 0 {
        return 1;
    }
    let n = total_chars as f64;
    let ar = if canvas.is_positive() { canvas.aspect_ratio() } else { 1.0 };
    let raw = match direction {
        Direction::Vertical => (n * ar).sqrt(),
        Direction::Horizontal => (n / ar).sqrt(),
    };
    (raw.round() as usize).clamp(1, total_chars)
}

fn auto_distribute(text: &str, direction: Direction, canvas: Size) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let count = auto_line_count(chars.len(), direction, canvas);
    balanced_chunks(&chars, count)
}

/// Split `chars` into `count` contiguous chunks whose lengths differ by at most one.
///
/// Longer chunks come first, so the first line always holds `ceil(n / count)`
/// characters.
fn balanced_chunks(chars: &[char], count: usize) -> Vec<String> {
    let base = chars.len() / count;
    let extra = chars.len() % count;
    let mut out = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let len = base + usize::from(i < extra);
        out.push(chars[start..start + len].iter().collect());
        start += len;
    }
    out
}

// =============================================================
// Sizing
// =============================================================

/// Margin between the canvas edge and the safe area.
#[must_use]
pub fn padding(config: &SealConfig) -> f64 {
    match config.style {
        SealStyle::Freehand => FREEHAND_PADDING,
        _ if config.show_border => config.border_thickness + BORDER_PADDING_EXTRA,
        _ => PLATE_PADDING,
    }
}

/// Drawable region after removing `padding` on every side.
#[must_use]
pub fn safe_area(canvas: Size, padding: f64) -> Size {
    Size::new(
        (canvas.width - padding * 2.0).max(0.0),
        (canvas.height - padding * 2.0).max(0.0),
    )
}

/// Largest uniform glyph size that fits every line in the safe area, scaled
/// by `font_size_percent` and floored at [`MIN_GLYPH_SIZE`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn glyph_size(lines: &[String], config: &SealConfig) -> f64 {
    let safe = safe_area(config.canvas_size, padding(config));
    let line_count = lines.len().max(1) as f64;
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(1) as f64;

    let fit = match config.direction {
        Direction::Vertical => (safe.width / line_count).min(safe.height / longest),
        Direction::Horizontal => (safe.height / line_count).min(safe.width / longest),
    };
    (fit * config.font_size_percent / 100.0).max(MIN_GLYPH_SIZE)
}

// =============================================================
// Placement
// =============================================================

/// Extent of `count` glyph cells of `size` separated by `spacing`.
#[allow(clippy::cast_precision_loss)]
fn run_extent(count: usize, size: f64, spacing: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * size + (count - 1) as f64 * spacing
}

/// Position every glyph (vertical) or line (horizontal).
#[must_use]
pub fn place(lines: &[String], size: f64, padding: f64, config: &SealConfig) -> Vec<GlyphRun> {
    match config.direction {
        Direction::Vertical => place_columns(lines, size, padding, config),
        Direction::Horizontal => place_rows(lines, size, padding, config),
    }
}

#[allow(clippy::cast_precision_loss)]
fn place_columns(lines: &[String], size: f64, padding: f64, config: &SealConfig) -> Vec<GlyphRun> {
    let canvas = config.canvas_size;
    let step = size + config.spacing;
    let block_w = run_extent(lines.len(), size, config.spacing);
    // Center of the rightmost column; the first line is drawn there.
    let first_x = (canvas.width + block_w) / 2.0 - size / 2.0;

    let mut runs = Vec::new();
    for (col, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let col_h = run_extent(chars.len(), size, config.spacing);
        let start_y = match config.alignment {
            Alignment::Start => padding + size / 2.0,
            Alignment::Center => (canvas.height - col_h) / 2.0 + size / 2.0,
            Alignment::End => canvas.height - padding - col_h + size / 2.0,
        };
        let x = first_x - col as f64 * step;
        for (row, ch) in chars.iter().enumerate() {
            runs.push(GlyphRun {
                text: ch.to_string(),
                at: Point::new(x, start_y + row as f64 * step),
                align: TextAlign::Center,
            });
        }
    }
    runs
}

#[allow(clippy::cast_precision_loss)]
fn place_rows(lines: &[String], size: f64, padding: f64, config: &SealConfig) -> Vec<GlyphRun> {
    let canvas = config.canvas_size;
    let step = size + config.spacing;
    let block_h = run_extent(lines.len(), size, config.spacing);
    let start_y = (canvas.height - block_h) / 2.0 + size / 2.0;

    let (x, align) = match config.alignment {
        Alignment::Start => (padding, TextAlign::Left),
        Alignment::Center => (canvas.width / 2.0, TextAlign::Center),
        Alignment::End => (canvas.width - padding, TextAlign::Right),
    };

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(row, line)| GlyphRun {
            text: line.clone(),
            at: Point::new(x, start_y + row as f64 * step),
            align,
        })
        .collect()
}
