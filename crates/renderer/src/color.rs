//! Colors for the dot calendar and task encodings.
//!
//! Completion is encoded two ways:
//! - **Per-category ramp** (`color_for`): fixed hue per category, saturation
//!   and lightness interpolated from a dark "low" anchor to a bright "high" anchor.
//! - **Blended** (`blended_color`): the three category base colors mixed by
//!   each category's share of finished tasks, with intensity growing with the
//!   number of finished tasks.

use wallpaper_common::{Category, TrifectaCompletion};

/// Finished tasks at which blended intensity saturates.
pub const BLEND_INTENSITY_CAP: u32 = 10;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Same color with alpha given as a 0..=1 opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Opacity in 0..=1.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// `#rrggbb` without alpha; pair with [`Color::opacity`].
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn to_color(&self) -> Color {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0) / 60.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(r1), channel(g1), channel(b1))
    }
}

/// Fixed colors of the dark theme.
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0x1a, 0x1a, 0x1a);
    pub const TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const PAST: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const ACCENT: Color = Color::rgb(0xe7, 0x6f, 0x51);
    pub const FUTURE: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const RING_TRACK: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const MUTED_TEXT: Color = Color::rgb(0x99, 0x99, 0x99);
    pub const QUOTE_TEXT: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const CHECKBOX_IDLE: Color = Color::rgb(0x66, 0x66, 0x66);
    pub const ALERT: Color = Color::rgb(0xff, 0x3b, 0x30);

    /// rgba(255, 255, 255, 0.05): "nothing here" for completion encodings.
    pub const EMPTY_DOT: Color = Color::new(255, 255, 255, 13);
    /// rgba(255, 255, 255, 0.03)
    pub const CARD_FILL: Color = Color::new(255, 255, 255, 8);
    /// rgba(255, 255, 255, 0.1)
    pub const CARD_BORDER: Color = Color::new(255, 255, 255, 26);
    /// rgba(26, 26, 26, 0.85)
    pub const BADGE_FILL: Color = Color::new(26, 26, 26, 217);
}

/// Saturation/lightness anchors for one category.
struct Ramp {
    hue: f64,
    s_start: f64,
    s_end: f64,
    l_start: f64,
    l_end: f64,
}

fn ramp(category: Category) -> Ramp {
    match category {
        // #00ff87
        Category::Work => Ramp { hue: 152.0, s_start: 60.0, s_end: 100.0, l_start: 25.0, l_end: 50.0 },
        // #ff1b6b
        Category::Fitness => Ramp { hue: 339.0, s_start: 60.0, s_end: 100.0, l_start: 30.0, l_end: 55.0 },
        // #0061ff
        Category::Mind => Ramp { hue: 217.0, s_start: 60.0, s_end: 100.0, l_start: 25.0, l_end: 50.0 },
    }
}

/// Ramp position for a completion percentage; `None` for nothing done.
pub fn hsl_for(percentage: f64, category: Category) -> Option<Hsl> {
    // NaN fails this comparison too
    if !(percentage > 0.0) {
        return None;
    }
    let p = (percentage / 100.0).clamp(0.0, 1.0);
    let ramp = ramp(category);

    let s = (ramp.s_start + (ramp.s_end - ramp.s_start) * p).round();
    let l = (ramp.l_start - (ramp.l_start - ramp.l_end) * p).round();
    Some(Hsl { h: ramp.hue, s, l })
}

/// Category color for a completion percentage (0..=100).
pub fn color_for(percentage: f64, category: Category) -> Color {
    hsl_for(percentage, category)
        .map(|hsl| hsl.to_color())
        .unwrap_or(palette::EMPTY_DOT)
}

/// Full-intensity base color of a category.
pub fn base_color(category: Category) -> Color {
    match category {
        Category::Work => Color::rgb(0, 255, 135),
        Category::Fitness => Color::rgb(255, 27, 107),
        Category::Mind => Color::rgb(0, 97, 255),
    }
}

/// One ramp color per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrifectaColors {
    pub work: Color,
    pub fitness: Color,
    pub mind: Color,
}

impl TrifectaColors {
    pub fn get(&self, category: Category) -> Color {
        match category {
            Category::Work => self.work,
            Category::Fitness => self.fitness,
            Category::Mind => self.mind,
        }
    }
}

pub fn trifecta_colors(completion: Option<&TrifectaCompletion>) -> TrifectaColors {
    let pick = |category| {
        completion
            .map(|c| color_for(c.progress(category).percentage, category))
            .unwrap_or(palette::EMPTY_DOT)
    };
    TrifectaColors {
        work: pick(Category::Work),
        fitness: pick(Category::Fitness),
        mind: pick(Category::Mind),
    }
}

/// Result of mixing the category colors by finished-task share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedColor {
    pub color: Color,
    /// 0..=1, saturating at [`BLEND_INTENSITY_CAP`] finished tasks.
    pub intensity: f64,
    pub total_done: u32,
    pub is_empty: bool,
}

impl BlendedColor {
    fn empty() -> Self {
        Self {
            color: palette::EMPTY_DOT,
            intensity: 0.0,
            total_done: 0,
            is_empty: true,
        }
    }
}

pub fn blended_color(completion: Option<&TrifectaCompletion>) -> BlendedColor {
    let Some(completion) = completion else {
        return BlendedColor::empty();
    };
    let total_done = completion.total_done();
    if total_done == 0 {
        return BlendedColor::empty();
    }

    let (mut r, mut g, mut b) = (0.0, 0.0, 0.0);
    for category in Category::ALL {
        let share = (completion.progress(category).done as f64 / total_done as f64).clamp(0.0, 1.0);
        let base = base_color(category);
        r += base.r as f64 * share;
        g += base.g as f64 * share;
        b += base.b as f64 * share;
    }

    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    BlendedColor {
        color: Color::rgb(channel(r), channel(g), channel(b)),
        intensity: (total_done as f64 / BLEND_INTENSITY_CAP as f64).min(1.0),
        total_done,
        is_empty: false,
    }
}

/// Linear interpolation between two colors, `t` clamped to 0..=1.
pub fn interpolate_color(c1: Color, c2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::new(
        lerp(c1.r, c2.r),
        lerp(c1.g, c2.g),
        lerp(c1.b, c2.b),
        lerp(c1.a, c2.a),
    )
}
