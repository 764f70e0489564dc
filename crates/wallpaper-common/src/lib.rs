//! Common types shared by the wallpaper crates and services.

pub mod error;
pub mod quote;
pub mod todo;
pub mod view;

pub use error::{WallpaperError, WallpaperResult};
pub use quote::Quote;
pub use todo::{
    CategorizedTodos, Category, CategoryProgress, TodoCompletionMap, TodoTask, TrifectaCompletion,
};
pub use view::ViewKind;
