#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::consts::{CARVED_GLYPH_COLOR, MAX_CANVAS_EDGE, MAX_NOISE_PARTICLES};
use crate::geom::Size;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EA1)
}

fn plan_for(config: &SealConfig) -> SealPlan {
    render_plan(config, &mut rng())
}

#[test]
fn carved_plan_clips_then_fills_then_draws_white_text() {
    let cfg = SealConfig { style: SealStyle::Carved, color: "#8B0000".into(), ..Default::default() };
    let plan = plan_for(&cfg);

    assert!(matches!(plan.ops[0], DrawOp::Clip(_)));
    assert_eq!(plan.ops[1], DrawOp::FillCanvas { color: "#8B0000".into() });
    assert_eq!(plan.background(), Some("#8B0000"));
    let runs: Vec<_> = plan.text_runs().collect();
    assert_eq!(runs.len(), 4);
    assert!(runs.iter().all(|(_, color)| *color == CARVED_GLYPH_COLOR));
}

#[test]
fn carved_background_covers_clip_shape() {
    for shape in [SealShape::Rect, SealShape::Circle, SealShape::Ellipse] {
        let cfg = SealConfig { style: SealStyle::Carved, shape, ..Default::default() };
        let plan = plan_for(&cfg);
        let fill_idx = plan.ops.iter().position(|op| matches!(op, DrawOp::FillCanvas { .. }));
        let clip_idx = plan.ops.iter().position(|op| matches!(op, DrawOp::Clip(_)));
        assert_eq!(clip_idx, Some(0));
        assert_eq!(fill_idx, Some(1));
    }
}

#[test]
fn raised_without_border_draws_no_stroke() {
    let cfg = SealConfig { style: SealStyle::Raised, show_border: false, ..Default::default() };
    let plan = plan_for(&cfg);
    assert_eq!(plan.strokes().count(), 0);
    assert_eq!(plan.background(), None);
}

#[test]
fn raised_with_border_draws_one_stroke_along_clip() {
    let cfg = SealConfig { style: SealStyle::Raised, show_border: true, border_thickness: 6.0, ..Default::default() };
    let plan = plan_for(&cfg);
    let strokes: Vec<_> = plan.strokes().collect();
    assert_eq!(strokes.len(), 1);
    match strokes[0] {
        DrawOp::StrokeShape { shape, width, .. } => {
            assert_eq!(Some(*shape), plan.clip());
            assert_eq!(*width, 6.0);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn freehand_has_no_clip_even_with_shape_set() {
    let cfg = SealConfig {
        style: SealStyle::Freehand,
        shape: SealShape::Circle,
        noise_intensity: 80.0,
        show_border: true,
        ..Default::default()
    };
    let plan = plan_for(&cfg);
    assert_eq!(plan.clip(), None);
    assert_eq!(plan.strokes().count(), 0);
    assert_eq!(plan.punch_count(), 0);
}

#[test]
fn noise_is_last_and_only_when_positive() {
    let quiet = plan_for(&SealConfig { noise_intensity: 0.0, ..Default::default() });
    assert_eq!(quiet.punch_count(), 0);

    let noisy = plan_for(&SealConfig { noise_intensity: 40.0, ..Default::default() });
    assert!(noisy.punch_count() > 0);
    let first_punch = noisy.ops.iter().position(|op| matches!(op, DrawOp::Punch(_)));
    let last_text = noisy.ops.iter().rposition(|op| matches!(op, DrawOp::Text { .. }));
    assert!(first_punch > last_text);
}

#[test]
fn same_config_same_geometry_across_renders() {
    let cfg = SealConfig { noise_intensity: 25.0, ..Default::default() };
    let a = render_plan(&cfg, &mut SmallRng::seed_from_u64(1));
    let b = render_plan(&cfg, &mut SmallRng::seed_from_u64(2));
    assert_eq!(a.geometry(), b.geometry());
    assert_eq!(a.punch_count(), b.punch_count());
}

#[test]
fn empty_text_renders_plate_only() {
    let cfg = SealConfig { text: "  \n ".into(), style: SealStyle::Raised, show_border: true, ..Default::default() };
    let plan = plan_for(&cfg);
    assert_eq!(plan.text_runs().count(), 0);
    assert_eq!(plan.strokes().count(), 1);
    assert_eq!(plan.lines, vec![String::new()]);
}

#[test]
fn invalid_canvas_is_clamped_not_rejected() {
    let cfg = SealConfig { canvas_size: Size::new(-10.0, 0.0), ..Default::default() };
    let plan = plan_for(&cfg);
    assert!(plan.size.is_positive());
    assert!(plan.glyph_size >= crate::consts::MIN_GLYPH_SIZE);
}

#[test]
fn raster_size_applies_supersampling() {
    let plan = plan_for(&SealConfig { canvas_size: Size::new(300.0, 350.0), ..Default::default() });
    assert_eq!(plan.raster_size(), Size::new(600.0, 700.0));
}

#[test]
fn text_ops_carry_font_shorthand() {
    let cfg = SealConfig { font_family: "serif".into(), ..Default::default() };
    let plan = plan_for(&cfg);
    let expected = plan::font_css(plan.glyph_size, "serif");
    for op in &plan.ops {
        if let DrawOp::Text { font, .. } = op {
            assert_eq!(font, &expected);
        }
    }
}

#[test]
fn oversized_noisy_canvas_stays_bounded() {
    let cfg = SealConfig { canvas_size: Size::new(40_000.0, 40_000.0), noise_intensity: 100.0, ..Default::default() };
    let plan = plan_for(&cfg);
    assert_eq!(plan.size, Size::new(MAX_CANVAS_EDGE, MAX_CANVAS_EDGE));
    assert_eq!(plan.punch_count(), MAX_NOISE_PARTICLES);
}
