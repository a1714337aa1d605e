//! Category
//!
//! The two closed list partitions a to-do can belong to.

use serde::{Deserialize, Serialize};

/// Which list an item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Work, Category::Travel];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Travel => "travel",
        }
    }

    /// Lenient parse used at the IPC boundary; unknown values fall back to work
    pub fn from_str(s: &str) -> Self {
        match s {
            "travel" => Category::Travel,
            _ => Category::Work,
        }
    }

    /// Persisted form: `true` is work, `false` is travel
    pub fn is_working(&self) -> bool {
        matches!(self, Category::Work)
    }

    pub fn from_working(working: bool) -> Self {
        if working {
            Category::Work
        } else {
            Category::Travel
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_flag() {
        assert!(Category::Work.is_working());
        assert!(!Category::Travel.is_working());
        assert_eq!(Category::from_working(false), Category::Travel);
    }

    #[test]
    fn test_from_str_falls_back_to_work() {
        assert_eq!(Category::from_str("travel"), Category::Travel);
        assert_eq!(Category::from_str("groceries"), Category::Work);
    }
}
