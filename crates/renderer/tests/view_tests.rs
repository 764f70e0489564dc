//! Tests for the view composers.
//!
//! Scenes are inspected structurally (text runs, dot fills) rather than
//! rasterized, so these run without fonts.

use renderer::color::palette;
use renderer::scene::{Node, Scene};
use renderer::views::{compose_view, DailyView, DotEncoding, ProgressView, ViewData};
use renderer::Canvas;
use test_utils::{datetime, size};
use wallpaper_common::{
    CategorizedTodos, Category, CategoryProgress, Quote, TodoCompletionMap, TodoTask,
    TrifectaCompletion, ViewKind,
};

fn phone() -> Canvas {
    Canvas::new(size::PHONE.0, size::PHONE.1)
}

fn texts(scene: &Scene) -> Vec<String> {
    scene.texts().into_iter().map(|t| t.content.clone()).collect()
}

fn filled_circles(scene: &Scene) -> Vec<renderer::color::Color> {
    let mut fills = Vec::new();
    for node in &scene.nodes {
        node.walk(&mut |n| {
            if let Node::Circle(c) = n {
                if let Some(fill) = c.fill {
                    fills.push(fill);
                }
            }
        });
    }
    fills
}

fn tasks(count: usize) -> CategorizedTodos {
    let mut todos = CategorizedTodos::default();
    for i in 0..count {
        let category = Category::ALL[i % 3];
        todos.push(category, TodoTask::new(format!("task {}", i), i % 2 == 0));
    }
    todos
}

// ============================================================================
// Yearly
// ============================================================================

#[test]
fn test_yearly_plain_scene() {
    let now = datetime(2024, 6, 15, 9, 0);
    let scene = compose_view(ViewKind::Yearly, &ViewData::default(), now, phone());

    let fills = filled_circles(&scene);
    assert_eq!(fills.len(), 366);
    assert_eq!(fills.iter().filter(|c| **c == palette::PAST).count(), 166);
    assert_eq!(fills.iter().filter(|c| **c == palette::ACCENT).count(), 1);
    assert_eq!(fills.iter().filter(|c| **c == palette::FUTURE).count(), 199);

    let labels = texts(&scene);
    assert!(labels.contains(&"199".to_string()));
    assert!(labels.contains(&"DAYS LEFT".to_string()));
    assert!(labels.contains(&"45.63% OF YEAR PASSED".to_string()));
    assert_eq!(scene.background, palette::BACKGROUND);
}

#[test]
fn test_yearly_trifecta_deadline_and_ring() {
    let mut map = TodoCompletionMap::new();
    map.insert(
        datetime(2024, 6, 20, 0, 0).date(),
        TrifectaCompletion {
            is_deadline: true,
            ..Default::default()
        },
    );
    map.insert(
        datetime(2024, 6, 10, 0, 0).date(),
        TrifectaCompletion {
            work: CategoryProgress::new(1, 2),
            ..Default::default()
        },
    );
    let data = ViewData {
        completions: Some(&map),
        encoding: DotEncoding::Slices,
        ..Default::default()
    };
    let scene = compose_view(ViewKind::Yearly, &data, datetime(2024, 6, 15, 9, 0), phone());

    let fills = filled_circles(&scene);
    assert_eq!(fills.iter().filter(|c| **c == palette::ALERT).count(), 1);

    let sectors = scene
        .nodes
        .iter()
        .filter(|n| matches!(n, Node::Sector(_)))
        .count();
    assert_eq!(sectors, 1);

    let rings = scene
        .nodes
        .iter()
        .filter(|n| matches!(n, Node::Circle(c) if c.fill.is_none()))
        .count();
    assert_eq!(rings, 1);
}

#[test]
fn test_yearly_landscape_uses_wide_grid() {
    let canvas = Canvas::new(size::TABLET_LANDSCAPE.0, size::TABLET_LANDSCAPE.1);
    let scene = compose_view(ViewKind::Yearly, &ViewData::default(), datetime(2023, 3, 1, 9, 0), canvas);
    assert_eq!(filled_circles(&scene).len(), 365);
}

// ============================================================================
// Monthly
// ============================================================================

#[test]
fn test_monthly_scene() {
    let scene = compose_view(ViewKind::Monthly, &ViewData::default(), datetime(2024, 6, 15, 18, 0), phone());
    let labels = texts(&scene);

    assert_eq!(labels[0], "JUNE 2024");
    assert_eq!(&labels[1..8], &["M", "T", "W", "T", "F", "S", "S"]);
    assert!(labels.contains(&"50.00% OF MONTH PASSED".to_string()));
    assert_eq!(filled_circles(&scene).len(), 30);
}

#[test]
fn test_monthly_first_dot_follows_padding() {
    // June 2024 starts on a Saturday: column 5
    let scene = compose_view(ViewKind::Monthly, &ViewData::default(), datetime(2024, 6, 15, 18, 0), phone());
    let first_dot = scene.nodes.iter().find_map(|n| match n {
        Node::Circle(c) => Some(c.cx),
        _ => None,
    });
    let saturday_header = scene.texts()[6].x;
    assert_eq!(first_dot, Some(saturday_header));
}

// ============================================================================
// Daily
// ============================================================================

#[test]
fn test_daily_ring_and_labels() {
    let scene = compose_view(ViewKind::Daily, &ViewData::default(), datetime(2024, 6, 15, 18, 0), phone());
    let labels = texts(&scene);

    assert!(labels.contains(&"75%".to_string()));
    assert!(labels.contains(&"18:00".to_string()));
    assert!(labels.contains(&"75.00% OF DAY PASSED".to_string()));
    assert!(scene.nodes.iter().any(|n| matches!(n, Node::Arc(_))));
}

#[test]
fn test_daily_midnight_has_no_arc() {
    let scene = compose_view(ViewKind::Daily, &ViewData::default(), datetime(2024, 6, 15, 0, 0), phone());
    assert!(!scene.nodes.iter().any(|n| matches!(n, Node::Arc(_))));
}

#[test]
fn test_daily_quote_shown_with_few_tasks() {
    let quote = Quote::new("Stay hungry, stay foolish.", "Steve Jobs");
    let todos = tasks(3);
    let data = ViewData {
        tasks: Some(&todos),
        quote: Some(&quote),
        ..Default::default()
    };
    let labels = texts(&compose_view(ViewKind::Daily, &data, datetime(2024, 6, 15, 18, 0), phone()));

    assert!(labels.contains(&"DAILY OBJECTIVES".to_string()));
    assert!(labels.iter().any(|l| l.contains("Stay hungry")));
    assert!(labels.iter().any(|l| l.contains("Steve Jobs")));
}

#[test]
fn test_daily_quote_suppressed_by_many_tasks() {
    let quote = Quote::new("Stay hungry, stay foolish.", "Steve Jobs");
    let todos = tasks(4);
    let data = ViewData {
        tasks: Some(&todos),
        quote: Some(&quote),
        ..Default::default()
    };
    let labels = texts(&compose_view(ViewKind::Daily, &data, datetime(2024, 6, 15, 18, 0), phone()));

    assert!(labels.contains(&"DAILY OBJECTIVES".to_string()));
    assert!(!labels.iter().any(|l| l.contains("Stay hungry")));
}

#[test]
fn test_daily_groups_tasks_by_category() {
    let todos = tasks(3);
    let view = DailyView::new(Some(&todos), None);
    let labels = texts(&view.compose(datetime(2024, 6, 15, 18, 0), phone()));

    let order: Vec<&str> = labels
        .iter()
        .map(String::as_str)
        .filter(|l| ["WORK", "FITNESS", "MIND"].contains(l))
        .collect();
    assert_eq!(order, vec!["WORK", "FITNESS", "MIND"]);
    assert!(labels.contains(&"task 0".to_string()));
}

#[test]
fn test_daily_done_tasks_are_struck_and_dimmed() {
    let todos = tasks(2);
    let view = DailyView::new(Some(&todos), None);
    let scene = view.compose(datetime(2024, 6, 15, 18, 0), phone());

    let groups: Vec<(f64, bool)> = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Group { opacity, children } => {
                let struck = children
                    .iter()
                    .any(|c| matches!(c, Node::Text(t) if t.strikethrough));
                Some((*opacity, struck))
            }
            _ => None,
        })
        .collect();
    assert_eq!(groups, vec![(0.4, true), (1.0, false)]);
}

#[test]
fn test_daily_overflow_collapses_into_more_line() {
    let todos = tasks(60);
    let data = ViewData {
        tasks: Some(&todos),
        ..Default::default()
    };
    let canvas = Canvas::new(size::SMALL_PORTRAIT.0, size::SMALL_PORTRAIT.1);
    let scene = compose_view(ViewKind::Daily, &data, datetime(2024, 6, 15, 18, 0), canvas);

    let more = texts(&scene).into_iter().find(|l| l.ends_with(" MORE"));
    assert!(more.is_some(), "expected an overflow line");

    let footer_y = scene
        .texts()
        .into_iter()
        .find(|t| t.content.ends_with("OF DAY PASSED"))
        .map(|t| t.y)
        .unwrap();
    for node in &scene.nodes {
        if let Node::Rect(r) = node {
            assert!(r.y + r.height < footer_y, "card overlaps footer");
        }
    }
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_composition_is_deterministic() {
    let todos = tasks(5);
    let quote = Quote::anonymous("Keep going.");
    let data = ViewData {
        tasks: Some(&todos),
        quote: Some(&quote),
        ..Default::default()
    };
    let now = datetime(2024, 2, 29, 23, 59);
    for kind in ViewKind::ROTATION {
        let a = compose_view(kind, &data, now, phone());
        let b = compose_view(kind, &data, now, phone());
        assert_eq!(a, b);
        assert_eq!(a.to_svg("Inter"), b.to_svg("Inter"));
    }
}
