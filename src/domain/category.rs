//! The closed set of spending and earning categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises ledger entries for breakdowns and pie charts.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Category {
    #[default]
    Food,
    Groceries,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Salary,
    Gift,
    Investment,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Food,
        Category::Groceries,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Salary,
        Category::Gift,
        Category::Investment,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Groceries => "Groceries",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Salary => "Salary",
            Category::Gift => "Gift",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }

    /// Fill color used when the category is drawn as a chart slice.
    pub fn color_key(self) -> &'static str {
        match self {
            Category::Food => "#6366f1",
            Category::Groceries => "#6366f2",
            Category::Transport => "#8b5cf6",
            Category::Housing => "#ec4899",
            Category::Utilities => "#f59e0b",
            Category::Entertainment => "#10b981",
            Category::Health => "#ef4444",
            Category::Shopping => "#06b6d4",
            Category::Salary => "#22c55e",
            Category::Gift => "#eab308",
            Category::Investment => "#84cc16",
            Category::Other => "#64748b",
        }
    }

    /// Parses a label case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_case_insensitively() {
        for category in Category::ALL {
            let upper = category.label().to_uppercase();
            assert_eq!(Category::from_label(&upper), Some(category));
        }
        assert_eq!(Category::from_label("rent"), None);
    }
}
