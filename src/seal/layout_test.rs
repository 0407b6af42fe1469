#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn square() -> Size {
    Size::new(300.0, 300.0)
}

fn char_counts(lines: &[String]) -> Vec<usize> {
    lines.iter().map(|l| l.chars().count()).collect()
}

fn config(text: &str) -> SealConfig {
    SealConfig { text: text.to_owned(), ..Default::default() }.sanitized()
}

// =============================================================
// Segmentation
// =============================================================

#[test]
fn single_layout_is_one_line() {
    let lines = segment("伊凡\n水墨", SealLayout::Single, Direction::Vertical, square());
    assert_eq!(lines, vec!["伊凡 水墨".to_owned()]);
}

#[test]
fn single_layout_collapses_crlf() {
    let lines = segment("a\r\nb\nc", SealLayout::Single, Direction::Horizontal, square());
    assert_eq!(lines, vec!["a b c".to_owned()]);
}

#[test]
fn single_layout_empty_text_is_one_empty_line() {
    let lines = segment("   ", SealLayout::Single, Direction::Horizontal, square());
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn grid_with_newlines_keeps_user_lines() {
    let lines = segment("春眠\n不覺曉\n", SealLayout::Grid, Direction::Vertical, square());
    assert_eq!(lines, vec!["春眠".to_owned(), "不覺曉".to_owned()]);
}

#[test]
fn grid_with_newlines_drops_blank_lines() {
    let lines = segment("a\n\n\nb", SealLayout::Grid, Direction::Horizontal, square());
    assert_eq!(lines, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn grid_four_chars_square_canvas_is_two_by_two() {
    let lines = segment("伊凡水墨", SealLayout::Grid, Direction::Vertical, square());
    assert_eq!(lines, vec!["伊凡".to_owned(), "水墨".to_owned()]);
}

#[test]
fn grid_counts_code_points_not_bytes() {
    // Nine three-byte characters on a square canvas: three columns of three.
    let lines = segment("一二三四五六七八九", SealLayout::Grid, Direction::Vertical, square());
    assert_eq!(char_counts(&lines), vec![3, 3, 3]);
}

#[test]
fn grid_empty_text_is_one_empty_line() {
    let lines = segment("", SealLayout::Grid, Direction::Vertical, square());
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn grid_tall_canvas_prefers_fewer_columns() {
    let lines = segment("一二三四五六七八", SealLayout::Grid, Direction::Vertical, Size::new(120.0, 400.0));
    // sqrt(8 * 0.3) = 1.549 -> 2 columns of 4.
    assert_eq!(char_counts(&lines), vec![4, 4]);
}

#[test]
fn grid_wide_canvas_prefers_fewer_rows() {
    let lines = segment("一二三四五六七八", SealLayout::Grid, Direction::Horizontal, Size::new(400.0, 100.0));
    // sqrt(8 / 4) = 1.414 -> 1 row.
    assert_eq!(char_counts(&lines), vec![8]);
}

#[test]
fn grid_distribution_preserves_every_character() {
    let sizes = [Size::new(300.0, 300.0), Size::new(120.0, 400.0), Size::new(400.0, 90.0), Size::new(250.0, 300.0)];
    let alphabet: Vec<char> = "天地玄黃宇宙洪荒日月盈昃辰宿列張寒來暑往秋收冬藏閏餘成歲律呂調陽".chars().collect();
    for size in sizes {
        for direction in [Direction::Vertical, Direction::Horizontal] {
            for n in 1..=alphabet.len() {
                let text: String = alphabet[..n].iter().collect();
                let lines = segment(&text, SealLayout::Grid, direction, size);
                let rejoined: String = lines.concat();
                assert_eq!(rejoined, text, "n={n} size={size:?} dir={direction:?}");
            }
        }
    }
}

#[test]
fn grid_distribution_is_balanced() {
    let sizes = [Size::new(300.0, 300.0), Size::new(120.0, 400.0), Size::new(400.0, 90.0), Size::new(250.0, 300.0)];
    for size in sizes {
        for direction in [Direction::Vertical, Direction::Horizontal] {
            for n in 1..=40 {
                let text: String = std::iter::repeat_n('字', n).collect();
                let counts = char_counts(&segment(&text, SealLayout::Grid, direction, size));
                let max = counts.iter().max().copied().unwrap_or(0);
                let min = counts.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "n={n} size={size:?} dir={direction:?} counts={counts:?}");
                assert_eq!(counts.iter().sum::<usize>(), n);
            }
        }
    }
}

#[test]
fn grid_ten_chars_three_columns_longest_first() {
    // sqrt(10) = 3.16 -> 3 columns: 4, 3, 3.
    let lines = segment("0123456789", SealLayout::Grid, Direction::Vertical, square());
    assert_eq!(lines, vec!["0123".to_owned(), "456".to_owned(), "789".to_owned()]);
}

#[test]
fn auto_line_count_never_exceeds_chars() {
    // Very wide canvas with vertical text asks for many columns.
    assert_eq!(auto_line_count(3, Direction::Vertical, Size::new(1000.0, 16.0)), 3);
}

#[test]
fn auto_line_count_at_least_one() {
    assert_eq!(auto_line_count(1, Direction::Horizontal, Size::new(1000.0, 16.0)), 1);
    assert_eq!(auto_line_count(0, Direction::Vertical, square()), 1);
}

// =============================================================
// Sizing
// =============================================================

#[test]
fn padding_by_style_and_border() {
    let plain = config("印");
    assert_eq!(padding(&plain), PLATE_PADDING);

    let bordered = SealConfig { show_border: true, border_thickness: 8.0, ..plain.clone() };
    assert_eq!(padding(&bordered), 18.0);

    let freehand = SealConfig { style: SealStyle::Freehand, show_border: true, ..plain };
    assert_eq!(padding(&freehand), FREEHAND_PADDING);
}

#[test]
fn glyph_size_vertical_two_by_two() {
    // 300x300, padding 20 -> safe 260x260; 2 columns, 2 chars each -> 130 * 0.9.
    let cfg = SealConfig { canvas_size: square(), ..config("伊凡水墨") };
    let lines = segment(&cfg.text, cfg.layout, cfg.direction, cfg.canvas_size);
    assert!(approx_eq(glyph_size(&lines, &cfg), 117.0));
}

#[test]
fn glyph_size_horizontal_uses_rows_and_longest_row() {
    let cfg = SealConfig {
        canvas_size: Size::new(350.0, 100.0),
        direction: Direction::Horizontal,
        layout: SealLayout::Single,
        font_size_percent: 100.0,
        ..config("ABCDE")
    };
    let lines = segment(&cfg.text, cfg.layout, cfg.direction, cfg.canvas_size);
    // safe 310x60; 1 row -> 60; 5 chars -> 62; min = 60.
    assert!(approx_eq(glyph_size(&lines, &cfg), 60.0));
}

#[test]
fn glyph_size_floors_at_minimum() {
    let long: String = std::iter::repeat_n('長', 400).collect();
    let cfg = SealConfig { canvas_size: Size::new(40.0, 40.0), ..config(&long) };
    let lines = segment(&cfg.text, cfg.layout, cfg.direction, cfg.canvas_size);
    assert_eq!(glyph_size(&lines, &cfg), MIN_GLYPH_SIZE);
}

#[test]
fn glyph_size_monotonic_in_font_percent() {
    let base = config("伊凡水墨印");
    let lines = segment(&base.text, base.layout, base.direction, base.canvas_size);
    let mut prev = 0.0;
    for pct in (0..=200).step_by(5) {
        let cfg = SealConfig { font_size_percent: f64::from(pct), ..base.clone() };
        let size = glyph_size(&lines, &cfg);
        assert!(size >= prev, "pct={pct} size={size} prev={prev}");
        assert!(size >= MIN_GLYPH_SIZE);
        prev = size;
    }
}

#[test]
fn glyph_size_recomputed_per_text() {
    let short = config("印");
    let long = config("一二三四五六七八九十");
    let a = layout(&short).glyph_size;
    let b = layout(&long).glyph_size;
    assert!(a > b);
}

// =============================================================
// Placement
// =============================================================

#[test]
fn vertical_columns_run_right_to_left() {
    let block = layout(&SealConfig { canvas_size: square(), ..config("伊凡水墨") });
    let first_col_x = block.runs[0].at.x;
    let second_col_x = block.runs[2].at.x;
    assert_eq!(block.runs[0].text, "伊");
    assert_eq!(block.runs[2].text, "水");
    assert!(first_col_x > second_col_x);
}

#[test]
fn vertical_block_is_horizontally_centered() {
    let cfg = SealConfig { canvas_size: square(), spacing: 10.0, ..config("伊凡水墨") };
    let block = layout(&cfg);
    let right = block.runs[0].at.x + block.glyph_size / 2.0;
    let left = block.runs[2].at.x - block.glyph_size / 2.0;
    assert!(approx_eq((left + right) / 2.0, 150.0));
}

#[test]
fn vertical_step_is_size_plus_spacing() {
    let cfg = SealConfig { spacing: -4.0, ..config("伊凡水墨") };
    let block = layout(&cfg);
    let dy = block.runs[1].at.y - block.runs[0].at.y;
    assert!(approx_eq(dy, block.glyph_size - 4.0));
}

#[test]
fn vertical_alignment_start_anchors_top() {
    let cfg = SealConfig { alignment: Alignment::Start, ..config("伊凡水墨") };
    let block = layout(&cfg);
    assert!(approx_eq(block.runs[0].at.y, block.padding + block.glyph_size / 2.0));
}

#[test]
fn vertical_alignment_end_anchors_bottom() {
    let cfg = SealConfig { alignment: Alignment::End, spacing: 0.0, ..config("伊凡水墨") };
    let block = layout(&cfg);
    let last = &block.runs[1];
    let bottom = last.at.y + block.glyph_size / 2.0;
    assert!(approx_eq(bottom, cfg.canvas_size.height - block.padding));
}

#[test]
fn vertical_alignment_center_is_symmetric() {
    let cfg = SealConfig { alignment: Alignment::Center, ..config("伊凡水墨") };
    let block = layout(&cfg);
    let top = block.runs[0].at.y - block.glyph_size / 2.0;
    let bottom = block.runs[1].at.y + block.glyph_size / 2.0;
    assert!(approx_eq(top, cfg.canvas_size.height - bottom));
}

#[test]
fn vertical_uneven_columns_align_independently() {
    let cfg = SealConfig { text: "一二三\n四".into(), alignment: Alignment::End, spacing: 0.0, ..config("") };
    let block = layout(&cfg);
    let third = block.runs.iter().find(|r| r.text == "三").map_or(f64::NAN, |r| r.at.y);
    let fourth = block.runs.iter().find(|r| r.text == "四").map_or(f64::NAN, |r| r.at.y);
    assert!(approx_eq(third, fourth), "third={third} fourth={fourth}");
}

#[test]
fn horizontal_alignment_maps_to_text_align() {
    for (alignment, expected_align, expected_x) in [
        (Alignment::Start, TextAlign::Left, PLATE_PADDING),
        (Alignment::Center, TextAlign::Center, 175.0),
        (Alignment::End, TextAlign::Right, 350.0 - PLATE_PADDING),
    ] {
        let cfg = SealConfig {
            canvas_size: Size::new(350.0, 100.0),
            direction: Direction::Horizontal,
            layout: SealLayout::Single,
            alignment,
            ..config("modern")
        };
        let block = layout(&cfg);
        assert_eq!(block.runs.len(), 1);
        assert_eq!(block.runs[0].align, expected_align);
        assert!(approx_eq(block.runs[0].at.x, expected_x));
        assert!(approx_eq(block.runs[0].at.y, 50.0));
    }
}

#[test]
fn horizontal_rows_stack_top_to_bottom() {
    let cfg = SealConfig { direction: Direction::Horizontal, text: "上\n下".into(), ..config("") };
    let block = layout(&cfg);
    assert_eq!(block.runs[0].text, "上");
    assert!(block.runs[0].at.y < block.runs[1].at.y);
}

#[test]
fn empty_text_places_nothing() {
    let block = layout(&config(""));
    assert!(block.runs.is_empty());
    assert_eq!(block.lines, vec![String::new()]);
}

#[test]
fn text_align_css_values() {
    assert_eq!(TextAlign::Left.as_css(), "left");
    assert_eq!(TextAlign::Center.as_css(), "center");
    assert_eq!(TextAlign::Right.as_css(), "right");
}
