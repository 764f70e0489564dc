//! Inspirational quote shown on the day view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        let author = author.into();
        Self {
            text: text.into(),
            author: (!author.trim().is_empty()).then_some(author),
        }
    }

    pub fn anonymous(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
        }
    }
}
