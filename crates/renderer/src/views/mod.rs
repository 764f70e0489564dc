//! The three wallpaper views.
//!
//! Each view measures progress through one [`Period`] and decorates it: dot
//! grids for year and month, a ring plus tasks and quote for the day.

pub mod daily;
pub mod dots;
pub mod monthly;
pub mod yearly;

use chrono::NaiveDateTime;
use wallpaper_common::{CategorizedTodos, Quote, TodoCompletionMap, ViewKind};

use crate::color::palette;
use crate::layout::Canvas;
use crate::period::{Period, PeriodProgress};
use crate::scene::{Node, Scene, Text};

pub use daily::DailyView;
pub use dots::{DotEncoding, DotStyle};
pub use monthly::MonthlyView;
pub use yearly::YearlyView;

/// A calendar-progress view.
pub trait ProgressView {
    fn period(&self) -> Period;

    /// Build the frame for `now` on `canvas`. Pure in its inputs.
    fn compose(&self, now: NaiveDateTime, canvas: Canvas) -> Scene;
}

/// Optional data a view may draw with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewData<'a> {
    /// Year and month views switch to Trifecta dots when non-empty.
    pub completions: Option<&'a TodoCompletionMap>,
    pub encoding: DotEncoding,
    /// Today's tasks for the day view.
    pub tasks: Option<&'a CategorizedTodos>,
    pub quote: Option<&'a Quote>,
}

/// Compose the selected view.
pub fn compose_view(kind: ViewKind, data: &ViewData<'_>, now: NaiveDateTime, canvas: Canvas) -> Scene {
    match kind {
        ViewKind::Yearly => {
            YearlyView::new(DotStyle::from_completions(data.completions, data.encoding))
                .compose(now, canvas)
        }
        ViewKind::Monthly => {
            MonthlyView::new(DotStyle::from_completions(data.completions, data.encoding))
                .compose(now, canvas)
        }
        ViewKind::Daily => DailyView::new(data.tasks, data.quote).compose(now, canvas),
    }
}

/// Blank dark frame.
pub(crate) fn frame(canvas: Canvas) -> Scene {
    Scene::new(canvas.width, canvas.height, palette::BACKGROUND)
}

/// "45.63% OF YEAR PASSED" near the bottom edge.
pub(crate) fn footer(canvas: Canvas, period: Period, progress: &PeriodProgress) -> Node {
    Node::Text(
        Text::centered(
            canvas.center_x(),
            canvas.footer_baseline(),
            format!("{}% OF {} PASSED", progress.formatted(), period.label()),
            canvas.px(32.0),
        )
        .color(palette::MUTED_TEXT),
    )
}
