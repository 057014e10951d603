//! Card Styles
//!
//! Pure lookup from task content to a style tag (a CSS class list).

use serde::{Deserialize, Serialize};

/// Style applied to cards whose content matches exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    pub content: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStyles {
    rules: Vec<StyleRule>,
    default_style: String,
}

impl TaskStyles {
    pub fn new(rules: Vec<StyleRule>, default_style: String) -> Self {
        Self { rules, default_style }
    }

    /// First matching rule wins; unknown content gets the default tag
    pub fn style_for(&self, content: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.content == content)
            .map(|rule| rule.style.as_str())
            .unwrap_or(&self.default_style)
    }
}
