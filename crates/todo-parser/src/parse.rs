//! Markdown checklist parser.
//!
//! Recognized lines, checked in this order:
//! - category header: `#`-prefixed line mentioning `fitness`, `mind` or `work`
//! - deadline header: `#`-prefixed line mentioning `deadline` (sticky for the file)
//! - task: `- [ ] text`, `- [x] text`, `* [ ] text`, `* [x] text`
//!
//! Everything else is ignored. Tasks land in the most recent category,
//! starting with work.

use wallpaper_common::{CategorizedTodos, Category, TodoTask, TrifectaCompletion};

/// Header keywords in match precedence order.
const HEADER_KEYWORDS: [(&str, Category); 3] = [
    ("fitness", Category::Fitness),
    ("mind", Category::Mind),
    ("work", Category::Work),
];

const DEADLINE_KEYWORD: &str = "deadline";

/// Result of parsing one day's file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDay {
    pub completion: TrifectaCompletion,
    pub tasks: CategorizedTodos,
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    CategoryHeader(Category),
    DeadlineHeader,
    Task(TodoTask),
    Other,
}

/// Parse a day's markdown into tasks and completion statistics.
pub fn parse_categorized(content: &str) -> ParsedDay {
    let mut tasks = CategorizedTodos::default();
    let mut current = Category::Work;
    let mut is_deadline = false;

    for raw in content.lines() {
        match classify(raw) {
            Line::CategoryHeader(category) => current = category,
            Line::DeadlineHeader => is_deadline = true,
            Line::Task(task) => tasks.push(current, task),
            Line::Other => {}
        }
    }

    ParsedDay {
        completion: tasks.completion(is_deadline),
        tasks,
    }
}

fn classify(raw: &str) -> Line {
    let trimmed = raw.trim();

    if let Some(category) = header_category(trimmed) {
        return Line::CategoryHeader(category);
    }
    if header_matches(trimmed, DEADLINE_KEYWORD) {
        return Line::DeadlineHeader;
    }
    if trimmed.starts_with("- [") || trimmed.starts_with("* [") {
        let done = trimmed.contains("[x]");
        let description = strip_checkbox(trimmed).trim();
        if !description.is_empty() {
            return Line::Task(TodoTask::new(description, done));
        }
    }
    Line::Other
}

fn header_category(trimmed: &str) -> Option<Category> {
    HEADER_KEYWORDS
        .iter()
        .find(|(keyword, _)| header_matches(trimmed, keyword))
        .map(|(_, category)| *category)
}

fn header_matches(trimmed: &str, keyword: &str) -> bool {
    let lower = trimmed.to_lowercase();
    lower.starts_with('#') && lower.contains(keyword)
}

/// Strip `- [x] ` / `* [ ] ` style prefixes. Lines that do not carry a
/// well-formed checkbox are returned unchanged.
fn strip_checkbox(line: &str) -> &str {
    let Some(rest) = line.strip_prefix(['-', '*']) else {
        return line;
    };
    let rest = rest.trim_start();
    rest.strip_prefix("[x]")
        .or_else(|| rest.strip_prefix("[ ]"))
        .map(str::trim_start)
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headers() {
        assert_eq!(classify("## Fitness"), Line::CategoryHeader(Category::Fitness));
        assert_eq!(classify("  # MIND stuff "), Line::CategoryHeader(Category::Mind));
        assert_eq!(classify("### work"), Line::CategoryHeader(Category::Work));
        assert_eq!(classify("## Deadline"), Line::DeadlineHeader);
        assert_eq!(classify("Work without hash"), Line::Other);
    }

    #[test]
    fn test_header_precedence() {
        // fitness is checked before work
        assert_eq!(
            classify("## Work / Fitness"),
            Line::CategoryHeader(Category::Fitness)
        );
        // a category header swallows a deadline mention
        assert_eq!(
            classify("## Mind deadline"),
            Line::CategoryHeader(Category::Mind)
        );
    }

    #[test]
    fn test_header_wins_over_task_shape() {
        assert_eq!(classify("# - [x] fitness"), Line::CategoryHeader(Category::Fitness));
    }

    #[test]
    fn test_strip_checkbox() {
        assert_eq!(strip_checkbox("- [x] Ship it"), "Ship it");
        assert_eq!(strip_checkbox("* [ ]   spaced"), "spaced");
        assert_eq!(strip_checkbox("-[x]tight"), "tight");
        // uppercase X is not a recognized checkbox
        assert_eq!(strip_checkbox("- [X] shout"), "- [X] shout");
    }

    #[test]
    fn test_empty_task_discarded() {
        assert_eq!(classify("- [x]"), Line::Other);
        assert_eq!(classify("- [ ]    "), Line::Other);
    }

    #[test]
    fn test_done_detection() {
        assert_eq!(classify("- [x] a"), Line::Task(TodoTask::new("a", true)));
        assert_eq!(classify("* [ ] b"), Line::Task(TodoTask::new("b", false)));
    }
}
