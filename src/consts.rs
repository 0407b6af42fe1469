//! Shared numeric constants for the seal renderer and the viewport.

// ── Seal raster ─────────────────────────────────────────────────

/// Backing-store pixels per logical pixel for seal output.
pub const SUPERSAMPLE: f64 = 2.0;

/// Smallest canvas edge (logical px) the renderer accepts; smaller values are clamped.
pub const MIN_CANVAS_EDGE: f64 = 16.0;

/// Largest backing-store edge (device px) an export may allocate.
pub const MAX_EXPORT_EDGE_PX: f64 = 16_384.0;

/// Largest canvas edge (logical px) the renderer accepts; larger values are clamped.
pub const MAX_CANVAS_EDGE: f64 = MAX_EXPORT_EDGE_PX / SUPERSAMPLE;

/// Glyph size floor in logical px.
pub const MIN_GLYPH_SIZE: f64 = 10.0;

// ── Seal padding ────────────────────────────────────────────────

/// Extra margin added on top of the border thickness when a border is shown.
pub const BORDER_PADDING_EXTRA: f64 = 10.0;

/// Margin for clipped styles without a border.
pub const PLATE_PADDING: f64 = 20.0;

/// Margin for freehand (signature) marks.
pub const FREEHAND_PADDING: f64 = 10.0;

// ── Noise ───────────────────────────────────────────────────────

/// Particles per square logical px at 100 % noise intensity.
pub const NOISE_DENSITY: f64 = 0.05;

/// Smallest noise particle radius in logical px.
pub const NOISE_MIN_RADIUS: f64 = 0.5;

/// Largest noise particle radius in logical px (exclusive).
pub const NOISE_MAX_RADIUS: f64 = 6.0;

/// Upper bound on particles per plan, whatever the canvas size.
pub const MAX_NOISE_PARTICLES: usize = 200_000;

// ── Colors ──────────────────────────────────────────────────────

/// Glyph color for carved plates: the paper showing through.
pub const CARVED_GLYPH_COLOR: &str = "#ffffff";

/// Default ink color (vermilion).
pub const DEFAULT_INK: &str = "#D7261E";

// ── Viewport ────────────────────────────────────────────────────

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom change per zoom-in / zoom-out button press.
pub const ZOOM_STEP: f64 = 0.1;

/// Lower zoom bound before any image has been fitted.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

// ── Storage / credits ───────────────────────────────────────────

/// `localStorage` key for saved seal templates.
pub const TEMPLATE_STORAGE_KEY: &str = "ivan-watermark-templates";

/// Credit cost of one AI poem generation from the seal editor.
pub const POEM_GENERATION_COST: u32 = 3;
