//! Day-progress ring with today's objectives and a quote.

use chrono::NaiveDateTime;
use wallpaper_common::{CategorizedTodos, Category, Quote, TodoTask};

use super::yearly::ASCENT;
use super::{footer, frame, ProgressView};
use crate::color::{base_color, palette};
use crate::layout::{self, card_width, truncate_lines, wrap_text, Canvas, RingGeometry};
use crate::period::Period;
use crate::scene::{Arc, Node, Polyline, Rect, Scene, Stroke, Text};

/// With more tasks than this the quote is dropped.
pub const QUOTE_TASK_LIMIT: usize = 3;

pub struct DailyView<'a> {
    tasks: Option<&'a CategorizedTodos>,
    quote: Option<&'a Quote>,
}

impl<'a> DailyView<'a> {
    /// An empty task list counts as no task list.
    pub fn new(tasks: Option<&'a CategorizedTodos>, quote: Option<&'a Quote>) -> Self {
        Self {
            tasks: tasks.filter(|t| !t.is_empty()),
            quote,
        }
    }

    fn shows_quote(&self) -> bool {
        self.quote.is_some() && self.tasks.map_or(true, |t| t.len() <= QUOTE_TASK_LIMIT)
    }
}

impl ProgressView for DailyView<'_> {
    fn period(&self) -> Period {
        Period::Day
    }

    fn compose(&self, now: NaiveDateTime, canvas: Canvas) -> Scene {
        let progress = self.period().progress(now);
        let with_tasks = self.tasks.is_some();
        let ring = RingGeometry::for_canvas(canvas, with_tasks);

        let mut scene = frame(canvas);
        let top = layout::day_top_padding(canvas);
        let (cx, cy) = (canvas.center_x(), top + ring.size as f64 / 2.0);

        scene.push(Node::ring(
            cx,
            cy,
            ring.radius,
            Stroke::new(palette::RING_TRACK, ring.stroke_width as f64),
        ));
        if progress.percentage > 0.0 {
            scene.push(Node::Arc(Arc {
                cx,
                cy,
                r: ring.radius,
                stroke: Stroke::new(palette::ACCENT, ring.stroke_width as f64),
                circumference: ring.circumference,
                dash_offset: ring.dash_offset(progress.percentage),
            }));
        }

        let label_size = ring.size as f64 * 0.25;
        scene.push(Node::Text(
            Text::centered(
                cx,
                cy + label_size * 0.35,
                format!("{}%", progress.whole_percent()),
                label_size,
            )
            .bold(),
        ));

        let mut cursor = top + ring.size as f64 + canvas.px(30.0);
        let time_size = canvas.px(24.0);
        scene.push(Node::Text(
            Text::centered(cx, cursor + time_size * ASCENT, now.format("%H:%M").to_string(), time_size)
                .bold()
                .color(palette::ACCENT)
                .letter_spacing(canvas.px(4.0)),
        ));
        cursor += time_size;

        // Everything below must clear the footer.
        let limit = canvas.footer_baseline() - canvas.px(32.0) - canvas.px(40.0);

        if let Some(tasks) = self.tasks {
            cursor += canvas.px(40.0);
            let (nodes, bottom) = task_card(canvas, tasks, cursor, limit);
            scene.extend(nodes);
            cursor = bottom;
        }

        if let Some(quote) = self.quote.filter(|_| self.shows_quote()) {
            cursor += canvas.px(if with_tasks { 40.0 } else { 60.0 });
            scene.extend(quote_block(canvas, quote, with_tasks, cursor, limit));
        }

        scene.push(footer(canvas, self.period(), &progress));
        scene
    }
}

enum Row<'t> {
    Heading(Category),
    Item(&'t TodoTask),
}

/// Card of grouped tasks starting at `top`; returns its nodes and bottom edge.
fn task_card(canvas: Canvas, tasks: &CategorizedTodos, top: f64, limit: f64) -> (Vec<Node>, f64) {
    let width = card_width(canvas);
    let left = (canvas.w() - width) / 2.0;
    let pad_x = canvas.px(60.0);
    let pad_y = canvas.px(40.0);

    let title_size = canvas.px(28.0);
    let heading_size = canvas.px(24.0);
    let item_size = canvas.px(36.0);
    let box_size = canvas.px(32.0);
    let box_gap = canvas.px(24.0);
    let row_gap = canvas.px(20.0);
    let item_height = item_size.max(box_size);
    let text_room = width - 2.0 * pad_x - box_size - box_gap;

    let mut rows = Vec::new();
    for (category, group) in tasks.groups() {
        rows.push(Row::Heading(category));
        rows.extend(group.iter().map(Row::Item));
    }

    let mut children = Vec::new();
    let mut cursor = top + pad_y;
    children.push(Node::Text(
        Text::new(left + pad_x, cursor + title_size * ASCENT, "DAILY OBJECTIVES", title_size)
            .bold()
            .color(palette::ACCENT.with_opacity(0.8))
            .letter_spacing(canvas.px(2.0)),
    ));
    cursor += title_size + canvas.px(30.0);

    let row_height = |row: &Row<'_>| match row {
        Row::Heading(_) => heading_size + canvas.px(16.0),
        Row::Item(_) => item_height + row_gap,
    };
    let more_height = item_size + row_gap;

    let mut drawn = 0;
    for (i, row) in rows.iter().enumerate() {
        let remaining_after = rows.len() - i - 1;
        let reserve = if remaining_after > 0 { more_height } else { 0.0 };
        if cursor + row_height(row) + reserve + pad_y > limit && i > 0 {
            break;
        }
        match row {
            Row::Heading(category) => {
                if i > 0 {
                    cursor += canvas.px(10.0);
                }
                children.push(Node::Text(
                    Text::new(left + pad_x, cursor + heading_size * ASCENT, category.label(), heading_size)
                        .bold()
                        .color(base_color(*category))
                        .letter_spacing(canvas.px(2.0)),
                ));
            }
            Row::Item(task) => {
                let line = truncate_lines(wrap_text(&task.description, item_size, text_room), 1)
                    .pop()
                    .unwrap_or_default();
                children.push(task_row(canvas, task, &line, left + pad_x, cursor, item_height));
            }
        }
        cursor += row_height(row);
        drawn = i + 1;
    }

    let hidden = rows[drawn..]
        .iter()
        .filter(|r| matches!(r, Row::Item(_)))
        .count();
    if hidden > 0 {
        children.push(Node::Text(
            Text::new(left + pad_x, cursor + item_size * ASCENT, format!("+{} MORE", hidden), item_size)
                .color(palette::MUTED_TEXT),
        ));
        cursor += more_height;
    }

    let bottom = cursor - row_gap + pad_y;
    let mut nodes = vec![Node::Rect(Rect {
        x: left,
        y: top,
        width,
        height: bottom - top,
        radius: canvas.px(40.0),
        fill: Some(palette::CARD_FILL),
        stroke: Some(Stroke::new(palette::CARD_BORDER, 1.0)),
    })];
    nodes.extend(children);
    (nodes, bottom)
}

fn task_row(canvas: Canvas, task: &TodoTask, line: &str, x: f64, top: f64, height: f64) -> Node {
    let box_size = canvas.px(32.0);
    let item_size = canvas.px(36.0);
    let box_top = top + (height - box_size) / 2.0;

    let mut children = vec![Node::Rect(Rect {
        x,
        y: box_top,
        width: box_size,
        height: box_size,
        radius: canvas.px(8.0),
        fill: task.done.then_some(palette::ACCENT),
        stroke: Some(Stroke::new(
            if task.done { palette::ACCENT } else { palette::CHECKBOX_IDLE },
            canvas.px(2.0),
        )),
    })];

    if task.done {
        // Check mark on a 24-unit box, 22 units wide.
        let unit = canvas.px(22.0) / 24.0;
        let ox = x + (box_size - canvas.px(22.0)) / 2.0;
        let oy = box_top + (box_size - canvas.px(22.0)) / 2.0;
        children.push(Node::Polyline(Polyline {
            points: [(20.0, 6.0), (9.0, 17.0), (4.0, 12.0)]
                .iter()
                .map(|(px, py)| (ox + px * unit, oy + py * unit))
                .collect(),
            stroke: Stroke::new(palette::TEXT, 4.0 * unit),
        }));
    }

    children.push(Node::Text(
        Text::new(
            x + box_size + canvas.px(24.0),
            top + height / 2.0 + item_size * 0.35,
            line,
            item_size,
        )
        .strikethrough(task.done),
    ));

    Node::Group {
        opacity: if task.done { 0.4 } else { 1.0 },
        children,
    }
}

fn quote_block(canvas: Canvas, quote: &Quote, with_tasks: bool, top: f64, limit: f64) -> Vec<Node> {
    let wide = canvas.w() / canvas.h() > 0.7;
    let side = canvas.px(if wide { 200.0 } else { 100.0 });
    let (size, author_size) = if with_tasks {
        (canvas.px(24.0), canvas.px(20.0))
    } else {
        (canvas.px(32.0), canvas.px(28.0))
    };
    let line_height = size * 1.5;
    let author_block = match quote.author {
        Some(_) => canvas.px(15.0) + author_size,
        None => 0.0,
    };

    let room = limit - top - author_block;
    let max_lines = (room / line_height).floor();
    if max_lines < 1.0 {
        return Vec::new();
    }

    let text = format!("\u{201c}{}\u{201d}", quote.text.trim());
    let lines = truncate_lines(
        wrap_text(&text, size, (canvas.w() - 2.0 * side).max(size)),
        max_lines as usize,
    );

    let mut nodes = Vec::new();
    let mut cursor = top;
    for line in lines {
        nodes.push(Node::Text(
            Text::centered(canvas.center_x(), cursor + (line_height + size) / 2.0 - size * 0.2, line, size)
                .italic()
                .color(palette::QUOTE_TEXT),
        ));
        cursor += line_height;
    }

    if let Some(author) = &quote.author {
        cursor += canvas.px(15.0);
        nodes.push(Node::Text(
            Text::centered(
                canvas.center_x(),
                cursor + author_size * ASCENT,
                format!("\u{2014} {}", author),
                author_size,
            )
            .bold()
            .color(palette::ACCENT.with_opacity(0.9)),
        ));
    }
    nodes
}
