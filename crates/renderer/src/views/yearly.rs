//! One dot per day of the year with a days-left badge.

use chrono::NaiveDateTime;

use super::dots::{dot_nodes, DotStyle};
use super::{footer, frame, ProgressView};
use crate::color::palette;
use crate::layout::{self, text_width, Canvas};
use crate::period::{year_dates, Period};
use crate::scene::{Node, Rect, Scene, Stroke, Text};

/// Baseline offset of a line box with line-height 1, as a fraction of the font size.
pub(crate) const ASCENT: f64 = 0.8;

pub struct YearlyView<'a> {
    dots: DotStyle<'a>,
}

impl<'a> YearlyView<'a> {
    pub fn new(dots: DotStyle<'a>) -> Self {
        Self { dots }
    }
}

impl ProgressView for YearlyView<'_> {
    fn period(&self) -> Period {
        Period::Year
    }

    fn compose(&self, now: NaiveDateTime, canvas: Canvas) -> Scene {
        let today = now.date();
        let progress = self.period().progress(now);
        let grid = layout::year_grid(canvas, progress.total);

        let origin_x = ((canvas.w() - grid.width() as f64) / 2.0).floor();
        let origin_y = layout::year_top_padding(canvas);

        let mut scene = frame(canvas);
        for (i, date) in year_dates(today).enumerate() {
            let (cx, cy) = grid.cell_center(i as u32);
            scene.extend(dot_nodes(
                &self.dots,
                date,
                today,
                origin_x + cx,
                origin_y + cy,
                grid.dot_size as f64,
            ));
        }

        let center = (
            origin_x + grid.width() as f64 / 2.0,
            origin_y + grid.height() as f64 / 2.0,
        );
        scene.extend(days_left_badge(canvas, center, progress.remaining()));
        scene.push(footer(canvas, self.period(), &progress));
        scene
    }
}

fn days_left_badge(canvas: Canvas, center: (f64, f64), days_left: u32) -> Vec<Node> {
    let portrait = canvas.orientation().is_portrait();
    let (number_size, label_size) = if portrait {
        (canvas.px(180.0), canvas.px(40.0))
    } else {
        (canvas.px(140.0), canvas.px(32.0))
    };
    let (pad_y, pad_x) = if portrait {
        (canvas.px(50.0), canvas.px(70.0))
    } else {
        (canvas.px(40.0), canvas.px(60.0))
    };
    let spacing = canvas.px(8.0);
    let label_gap = canvas.px(10.0);

    let number = days_left.to_string();
    let label = "DAYS LEFT";
    let label_width = text_width(label, label_size) + spacing * label.chars().count() as f64;
    let content_width = text_width(&number, number_size).max(label_width);

    let width = content_width + 2.0 * pad_x;
    let height = number_size + label_gap + label_size + 2.0 * pad_y;
    let top = center.1 - height / 2.0;

    let number_baseline = top + pad_y + number_size * ASCENT;
    let label_baseline = top + pad_y + number_size + label_gap + label_size * ASCENT;

    vec![
        Node::Rect(Rect {
            x: center.0 - width / 2.0,
            y: top,
            width,
            height,
            radius: canvas.px(50.0),
            fill: Some(palette::BADGE_FILL),
            stroke: Some(Stroke::new(palette::CARD_BORDER, 1.0)),
        }),
        Node::Text(Text::centered(center.0, number_baseline, number, number_size).bold()),
        Node::Text(
            Text::centered(center.0, label_baseline, label, label_size)
                .bold()
                .color(palette::ACCENT)
                .letter_spacing(spacing),
        ),
    ]
}
