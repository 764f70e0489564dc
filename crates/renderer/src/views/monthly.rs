//! Current month as a Monday-first week grid inside a card.

use chrono::{Datelike, NaiveDateTime};

use super::dots::{dot_nodes, DotStyle};
use super::yearly::ASCENT;
use super::{footer, frame, ProgressView};
use crate::color::palette;
use crate::layout::{self, Canvas};
use crate::period::{month_dates, Period};
use crate::scene::{Node, Rect, Scene, Stroke, Text};

pub const WEEKDAY_HEADERS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

pub struct MonthlyView<'a> {
    dots: DotStyle<'a>,
}

impl<'a> MonthlyView<'a> {
    pub fn new(dots: DotStyle<'a>) -> Self {
        Self { dots }
    }
}

impl ProgressView for MonthlyView<'_> {
    fn period(&self) -> Period {
        Period::Month
    }

    fn compose(&self, now: NaiveDateTime, canvas: Canvas) -> Scene {
        let today = now.date();
        let progress = self.period().progress(now);
        let first = today.with_day(1).unwrap_or(today);
        let padding = layout::month_padding(first);
        let grid = layout::month_grid(canvas, padding + progress.total);

        let pad_x = canvas.px(40.0);
        let pad_y = canvas.px(60.0);
        let title_size = canvas.px(48.0);
        let title_gap = canvas.px(50.0);
        let header_size = canvas.px(32.0);
        let header_gap = canvas.px(30.0);

        let card_width = grid.width() as f64 + 2.0 * pad_x;
        let card_height = 2.0 * pad_y
            + title_size
            + title_gap
            + header_size
            + header_gap
            + grid.height() as f64;

        // Centered between the clock area and the footer.
        let top_limit = layout::month_top_padding(canvas);
        let bottom_limit = canvas.footer_baseline() - canvas.px(32.0);
        let card_top = (top_limit + (bottom_limit - top_limit - card_height) / 2.0).max(top_limit);
        let card_left = (canvas.w() - card_width) / 2.0;

        let mut scene = frame(canvas);
        scene.push(Node::Rect(Rect {
            x: card_left,
            y: card_top,
            width: card_width,
            height: card_height,
            radius: canvas.px(60.0),
            fill: Some(palette::CARD_FILL),
            stroke: Some(Stroke::new(palette::CARD_BORDER, 1.0)),
        }));

        let mut cursor = card_top + pad_y;
        scene.push(Node::Text(
            Text::centered(
                canvas.center_x(),
                cursor + title_size * ASCENT,
                now.format("%B %Y").to_string().to_uppercase(),
                title_size,
            )
            .bold(),
        ));
        cursor += title_size + title_gap;

        let grid_left = card_left + pad_x;
        for (i, header) in WEEKDAY_HEADERS.iter().enumerate() {
            let (cx, _) = grid.cell_center(i as u32);
            scene.push(Node::Text(
                Text::centered(grid_left + cx, cursor + header_size * ASCENT, *header, header_size)
                    .bold()
                    .color(palette::ACCENT),
            ));
        }
        cursor += header_size + header_gap;

        for (i, date) in month_dates(today).enumerate() {
            let (cx, cy) = grid.cell_center(padding + i as u32);
            scene.extend(dot_nodes(
                &self.dots,
                date,
                today,
                grid_left + cx,
                cursor + cy,
                grid.dot_size as f64,
            ));
        }

        scene.push(footer(canvas, self.period(), &progress));
        scene
    }
}
