//! Per-day dot glyphs shared by the year and month grids.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wallpaper_common::{Category, TodoCompletionMap, TrifectaCompletion};

use crate::color::{blended_color, color_for, palette};
use crate::scene::{Node, Sector, Stroke};

/// Opacity floor of a blended dot; intensity adds the rest.
const BLEND_MIN_OPACITY: f64 = 0.3;

/// How a day's completion is drawn inside its dot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotEncoding {
    /// Pie slices sized by each category's share of the day's tasks.
    #[default]
    Slices,
    /// One dot in the done-weighted mix of the category colors.
    Blended,
}

impl FromStr for DotEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slices" => Ok(DotEncoding::Slices),
            "blended" => Ok(DotEncoding::Blended),
            other => Err(format!("unknown dot encoding: {}", other)),
        }
    }
}

/// Plain past/today/future dots, or Trifecta dots from a completion map.
#[derive(Debug, Clone, Copy)]
pub enum DotStyle<'a> {
    Plain,
    Trifecta {
        completions: &'a TodoCompletionMap,
        encoding: DotEncoding,
    },
}

impl<'a> DotStyle<'a> {
    /// Trifecta when there is anything to show, plain otherwise.
    pub fn from_completions(completions: Option<&'a TodoCompletionMap>, encoding: DotEncoding) -> Self {
        match completions {
            Some(map) if !map.is_empty() => DotStyle::Trifecta {
                completions: map,
                encoding,
            },
            _ => DotStyle::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Past,
    Today,
    Future,
}

impl DayState {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => DayState::Past,
            std::cmp::Ordering::Equal => DayState::Today,
            std::cmp::Ordering::Greater => DayState::Future,
        }
    }

    fn plain_color(&self) -> crate::color::Color {
        match self {
            DayState::Past => palette::PAST,
            DayState::Today => palette::ACCENT,
            DayState::Future => palette::FUTURE,
        }
    }
}

/// Nodes for one day's dot centered at (`cx`, `cy`).
pub fn dot_nodes(style: &DotStyle<'_>, date: NaiveDate, today: NaiveDate, cx: f64, cy: f64, size: f64) -> Vec<Node> {
    let state = DayState::of(date, today);
    let r = size / 2.0;

    let (completions, encoding) = match style {
        DotStyle::Plain => return vec![Node::dot(cx, cy, r, state.plain_color())],
        DotStyle::Trifecta {
            completions,
            encoding,
        } => (*completions, *encoding),
    };

    let completion = completions.get(&date);
    let mut nodes = match completion {
        Some(c) if c.is_deadline => vec![Node::dot(cx, cy, r, palette::ALERT)],
        _ if state == DayState::Future => vec![Node::dot(cx, cy, r, palette::FUTURE)],
        Some(c) if c.total_tasks() > 0 => match encoding {
            DotEncoding::Slices => slice_nodes(c, cx, cy, r),
            DotEncoding::Blended => vec![blended_node(c, cx, cy, r)],
        },
        _ => vec![Node::dot(cx, cy, r, state.plain_color())],
    };

    if state == DayState::Today {
        let width = (size * 0.08).max(1.0);
        nodes.push(Node::ring(cx, cy, r + size * 0.1, Stroke::new(palette::ACCENT, width)));
    }
    nodes
}

fn slice_nodes(completion: &TrifectaCompletion, cx: f64, cy: f64, r: f64) -> Vec<Node> {
    let total = completion.total_tasks() as f64;
    let mut start = 0.0;
    let mut nodes = vec![Node::dot(cx, cy, r, palette::EMPTY_DOT)];

    for category in Category::ALL {
        let progress = completion.progress(category);
        if progress.total == 0 {
            continue;
        }
        let share = (progress.total as f64 / total).clamp(0.0, 1.0);
        let sweep = share * 360.0;
        nodes.push(Node::Sector(Sector {
            cx,
            cy,
            r,
            start_deg: start,
            sweep_deg: sweep,
            fill: color_for(progress.percentage, category),
        }));
        start += sweep;
    }
    nodes
}

fn blended_node(completion: &TrifectaCompletion, cx: f64, cy: f64, r: f64) -> Node {
    let blend = blended_color(Some(completion));
    if blend.is_empty {
        return Node::dot(cx, cy, r, palette::EMPTY_DOT);
    }
    let opacity = BLEND_MIN_OPACITY + (1.0 - BLEND_MIN_OPACITY) * blend.intensity;
    Node::dot(cx, cy, r, blend.color.with_opacity(opacity))
}
