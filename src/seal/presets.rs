//! Built-in seal presets and partial templates.
//!
//! A [`SealTemplate`] carries any subset of the non-text settings. Applying
//! one overwrites only the fields it sets, so presets never touch the user's
//! text and saved templates restore exactly what was saved.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use serde::{Deserialize, Serialize};

use crate::geom::Size;

use super::config::{Alignment, Direction, SealConfig, SealLayout, SealShape, SealStyle};

/// Font stacks offered by the editor, in menu order.
pub const FONTS: &[(&str, &str)] = &[
    ("宋體", "\"Noto Serif SC\", serif"),
    ("黑體", "\"Noto Sans SC\", sans-serif"),
    ("馬善政", "\"Ma Shan Zheng\", cursive"),
    ("志莽行", "\"Zhi Mang Xing\", cursive"),
    ("龍藏體", "\"Long Cang\", cursive"),
    ("快樂體", "\"ZCOOL KuaiLe\", cursive"),
    ("流澗毛草", "\"Liu Jian Mao Cao\", cursive"),
    ("站酷小薇", "\"ZCOOL XiaoWei\", serif"),
    ("慶科黃油", "\"ZCOOL QingKe HuangYou\", sans-serif"),
    ("楷體", "KaiTi, \"KaiTi\", serif"),
    ("Lobster", "\"Lobster\", cursive"),
    ("Caveat", "\"Caveat\", cursive"),
    ("Pacifico", "\"Pacifico\", cursive"),
    ("Dancing", "\"Dancing Script\", cursive"),
    ("Vibes", "\"Great Vibes\", cursive"),
    ("Sacramento", "\"Sacramento\", cursive"),
    ("Indie", "\"Indie Flower\", cursive"),
    ("Shadows", "\"Shadows Into Light\", cursive"),
    ("Amatic", "\"Amatic SC\", cursive"),
    ("Courgette", "\"Courgette\", cursive"),
];

/// Swatches shown next to the color picker.
pub const PRESET_COLORS: &[&str] =
    &["#D7261E", "#000000", "#FFFFFF", "#D4AF37", "#1E3A8A", "#064E3B", "#5B21B6", "#B91C1C"];

/// Partial set of seal settings. `None` leaves the target field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SealTemplate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size_percent: Option<f64>,
    pub spacing: Option<f64>,
    pub noise: Option<f64>,
    pub border_radius: Option<f64>,
    pub border_thickness: Option<f64>,
    pub show_border: Option<bool>,
    pub color: Option<String>,
    pub font: Option<String>,
    pub style: Option<SealStyle>,
    pub shape: Option<SealShape>,
    pub layout: Option<SealLayout>,
    pub direction: Option<Direction>,
    pub alignment: Option<Alignment>,
}

impl SealTemplate {
    /// Capture every non-text setting of `config`.
    #[must_use]
    pub fn capture(config: &SealConfig) -> Self {
        Self {
            width: Some(config.canvas_size.width),
            height: Some(config.canvas_size.height),
            font_size_percent: Some(config.font_size_percent),
            spacing: Some(config.spacing),
            noise: Some(config.noise_intensity),
            border_radius: Some(config.border_radius),
            border_thickness: Some(config.border_thickness),
            show_border: Some(config.show_border),
            color: Some(config.color.clone()),
            font: Some(config.font_family.clone()),
            style: Some(config.style),
            shape: Some(config.shape),
            layout: Some(config.layout),
            direction: Some(config.direction),
            alignment: Some(config.alignment),
        }
    }

    /// Overwrite the fields this template sets.
    pub fn apply_to(&self, config: &mut SealConfig) {
        let size = config.canvas_size;
        config.canvas_size = Size::new(self.width.unwrap_or(size.width), self.height.unwrap_or(size.height));
        if let Some(v) = self.font_size_percent {
            config.font_size_percent = v;
        }
        if let Some(v) = self.spacing {
            config.spacing = v;
        }
        if let Some(v) = self.noise {
            config.noise_intensity = v;
        }
        if let Some(v) = self.border_radius {
            config.border_radius = v;
        }
        if let Some(v) = self.border_thickness {
            config.border_thickness = v;
        }
        if let Some(v) = self.show_border {
            config.show_border = v;
        }
        if let Some(v) = &self.color {
            config.color.clone_from(v);
        }
        if let Some(v) = &self.font {
            config.font_family.clone_from(v);
        }
        if let Some(v) = self.style {
            config.style = v;
        }
        if let Some(v) = self.shape {
            config.shape = v;
        }
        if let Some(v) = self.layout {
            config.layout = v;
        }
        if let Some(v) = self.direction {
            config.direction = v;
        }
        if let Some(v) = self.alignment {
            config.alignment = v;
        }
    }
}

/// Built-in looks offered as one-click presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Red carved square.
    YinSquare,
    /// Raised square with a border ring.
    SignSquare,
    /// Raised oval with a border ring.
    SignOval,
    /// Black single-line signature.
    SignSquare2,
    /// Bordered round seal with a touch of wear.
    ClassicRound,
    /// Blue single-line banner, left aligned.
    ModernTech,
    /// Tall borderless column.
    VerticalCalligraphy,
    /// Dark carved square with heavy wear.
    AgedSeal,
}

impl Preset {
    pub const ALL: [Self; 8] = [
        Self::YinSquare,
        Self::SignSquare,
        Self::SignOval,
        Self::SignSquare2,
        Self::ClassicRound,
        Self::ModernTech,
        Self::VerticalCalligraphy,
        Self::AgedSeal,
    ];

    /// The partial template this preset applies.
    #[must_use]
    pub fn template(self) -> SealTemplate {
        use Alignment::{Center, Start};
        use Direction::{Horizontal, Vertical};
        use SealLayout::{Grid, Single};
        use SealShape::{Circle, Ellipse, Rect};
        use SealStyle::{Carved, Freehand, Raised};

        let base = |style, shape, font: usize, layout, direction, alignment, color: &str| SealTemplate {
            style: Some(style),
            shape: Some(shape),
            font: Some(FONTS[font].1.to_owned()),
            layout: Some(layout),
            direction: Some(direction),
            alignment: Some(alignment),
            color: Some(color.to_owned()),
            noise: Some(0.0),
            ..SealTemplate::default()
        };

        match self {
            Self::YinSquare => SealTemplate {
                width: Some(250.0),
                height: Some(300.0),
                font_size_percent: Some(90.0),
                show_border: Some(false),
                border_radius: Some(4.0),
                ..base(Carved, Rect, 2, Grid, Vertical, Center, "#D7261E")
            },
            Self::SignSquare => SealTemplate {
                width: Some(250.0),
                height: Some(300.0),
                font_size_percent: Some(90.0),
                show_border: Some(true),
                border_thickness: Some(6.0),
                border_radius: Some(4.0),
                ..base(Raised, Rect, 3, Grid, Vertical, Center, "#D7261E")
            },
            Self::SignOval => SealTemplate {
                width: Some(200.0),
                height: Some(300.0),
                font_size_percent: Some(90.0),
                show_border: Some(true),
                border_thickness: Some(6.0),
                ..base(Raised, Ellipse, 4, Grid, Vertical, Center, "#D7261E")
            },
            Self::SignSquare2 => SealTemplate {
                width: Some(300.0),
                height: Some(100.0),
                font_size_percent: Some(90.0),
                ..base(Freehand, Rect, 6, Single, Horizontal, Center, "#000000")
            },
            Self::ClassicRound => SealTemplate {
                width: Some(300.0),
                height: Some(300.0),
                font_size_percent: Some(85.0),
                show_border: Some(true),
                border_thickness: Some(8.0),
                noise: Some(5.0),
                ..base(Raised, Circle, 0, Grid, Vertical, Center, "#B91C1C")
            },
            Self::ModernTech => SealTemplate {
                width: Some(350.0),
                height: Some(100.0),
                font_size_percent: Some(80.0),
                show_border: Some(true),
                border_thickness: Some(4.0),
                border_radius: Some(2.0),
                ..base(Raised, Rect, 1, Single, Horizontal, Start, "#1E3A8A")
            },
            Self::VerticalCalligraphy => SealTemplate {
                width: Some(120.0),
                height: Some(400.0),
                font_size_percent: Some(90.0),
                show_border: Some(false),
                border_radius: Some(0.0),
                ..base(Raised, Rect, 2, Grid, Vertical, Start, "#000000")
            },
            Self::AgedSeal => SealTemplate {
                width: Some(280.0),
                height: Some(280.0),
                font_size_percent: Some(95.0),
                show_border: Some(false),
                noise: Some(40.0),
                border_radius: Some(10.0),
                ..base(Carved, Rect, 5, Grid, Vertical, Center, "#8B0000")
            },
        }
    }

    /// Apply this preset onto `config`, keeping its text.
    pub fn apply_to(self, config: &mut SealConfig) {
        self.template().apply_to(config);
    }
}
