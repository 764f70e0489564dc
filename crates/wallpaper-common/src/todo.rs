//! Daily task tracking types.
//!
//! A day's markdown file is parsed into [`CategorizedTodos`]; its summary is a
//! [`TrifectaCompletion`], one per calendar date, collected into a
//! [`TodoCompletionMap`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three tracked life categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Fitness,
    Mind,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Work, Category::Fitness, Category::Mind];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Fitness => "fitness",
            Category::Mind => "mind",
        }
    }

    /// Uppercase label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "WORK",
            Category::Fitness => "FITNESS",
            Category::Mind => "MIND",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "fitness" => Ok(Category::Fitness),
            "mind" => Ok(Category::Mind),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    pub description: String,
    pub done: bool,
}

impl TodoTask {
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Self {
            description: description.into(),
            done,
        }
    }
}

/// Tasks grouped by category, in source order within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTodos {
    pub work: Vec<TodoTask>,
    pub fitness: Vec<TodoTask>,
    pub mind: Vec<TodoTask>,
}

impl CategorizedTodos {
    pub fn push(&mut self, category: Category, task: TodoTask) {
        self.tasks_mut(category).push(task);
    }

    pub fn tasks(&self, category: Category) -> &[TodoTask] {
        match category {
            Category::Work => &self.work,
            Category::Fitness => &self.fitness,
            Category::Mind => &self.mind,
        }
    }

    fn tasks_mut(&mut self, category: Category) -> &mut Vec<TodoTask> {
        match category {
            Category::Work => &mut self.work,
            Category::Fitness => &mut self.fitness,
            Category::Mind => &mut self.mind,
        }
    }

    /// Non-empty groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = (Category, &[TodoTask])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.tasks(c)))
            .filter(|(_, tasks)| !tasks.is_empty())
    }

    /// Total number of tasks across all categories.
    pub fn len(&self) -> usize {
        self.work.len() + self.fitness.len() + self.mind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Summarize every category.
    pub fn completion(&self, is_deadline: bool) -> TrifectaCompletion {
        TrifectaCompletion {
            work: CategoryProgress::from_tasks(&self.work),
            fitness: CategoryProgress::from_tasks(&self.fitness),
            mind: CategoryProgress::from_tasks(&self.mind),
            is_deadline,
        }
    }
}

/// Completion statistics for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub total: u32,
    pub done: u32,
    /// 0..=100; zero when there are no tasks.
    pub percentage: f64,
}

impl CategoryProgress {
    pub fn new(done: u32, total: u32) -> Self {
        let done = done.min(total);
        let percentage = if total > 0 {
            done as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            done,
            percentage,
        }
    }

    pub fn from_tasks(tasks: &[TodoTask]) -> Self {
        let done = tasks.iter().filter(|t| t.done).count() as u32;
        Self::new(done, tasks.len() as u32)
    }
}

/// Per-day summary of all three categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrifectaCompletion {
    pub work: CategoryProgress,
    pub fitness: CategoryProgress,
    pub mind: CategoryProgress,
    /// Hard commitment for the day; rendered ahead of any completion encoding.
    pub is_deadline: bool,
}

impl TrifectaCompletion {
    pub fn progress(&self, category: Category) -> &CategoryProgress {
        match category {
            Category::Work => &self.work,
            Category::Fitness => &self.fitness,
            Category::Mind => &self.mind,
        }
    }

    pub fn total_tasks(&self) -> u32 {
        self.work.total + self.fitness.total + self.mind.total
    }

    pub fn total_done(&self) -> u32 {
        self.work.done + self.fitness.done + self.mind.done
    }
}

/// Completion summaries keyed by calendar date.
pub type TodoCompletionMap = BTreeMap<NaiveDate, TrifectaCompletion>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_guards_empty() {
        let p = CategoryProgress::from_tasks(&[]);
        assert_eq!(p.total, 0);
        assert_eq!(p.done, 0);
        assert_eq!(p.percentage, 0.0);
    }

    #[test]
    fn test_progress_percentage() {
        let tasks = vec![
            TodoTask::new("a", true),
            TodoTask::new("b", false),
            TodoTask::new("c", true),
            TodoTask::new("d", false),
        ];
        let p = CategoryProgress::from_tasks(&tasks);
        assert_eq!(p.total, 4);
        assert_eq!(p.done, 2);
        assert!((p.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_done_never_exceeds_total() {
        let p = CategoryProgress::new(7, 3);
        assert_eq!(p.done, 3);
        assert!((p.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_groups_skip_empty_and_keep_order() {
        let mut todos = CategorizedTodos::default();
        todos.push(Category::Mind, TodoTask::new("read", false));
        todos.push(Category::Work, TodoTask::new("ship", true));
        todos.push(Category::Work, TodoTask::new("review", false));

        let groups: Vec<_> = todos.groups().map(|(c, t)| (c, t.len())).collect();
        assert_eq!(groups, vec![(Category::Work, 2), (Category::Mind, 1)]);
        assert_eq!(todos.tasks(Category::Work)[0].description, "ship");
        assert_eq!(todos.len(), 3);
    }

    #[test]
    fn test_completion_totals() {
        let mut todos = CategorizedTodos::default();
        todos.push(Category::Work, TodoTask::new("a", true));
        todos.push(Category::Fitness, TodoTask::new("b", true));
        todos.push(Category::Fitness, TodoTask::new("c", false));

        let c = todos.completion(true);
        assert_eq!(c.total_tasks(), 3);
        assert_eq!(c.total_done(), 2);
        assert!(c.is_deadline);
        assert_eq!(c.progress(Category::Mind).total, 0);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Fitness".parse::<Category>(), Ok(Category::Fitness));
        assert!("sleep".parse::<Category>().is_err());
    }
}
