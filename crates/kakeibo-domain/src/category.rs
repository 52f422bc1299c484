//! Category lookup table mapping names to display attributes.

use serde::{Deserialize, Serialize};

/// Label applied to entries recorded without a category.
pub const UNCATEGORIZED_LABEL: &str = "未分類";

const FALLBACK_COLOR: &str = "#ccc";

const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("食費", "#FF6384"),
    ("交通", "#FFCE56"),
    ("日用品", "#36A2EB"),
    ("交際費", "#4BC0C0"),
    ("趣味", "#9966FF"),
    ("医療", "#FF9F40"),
    ("給与", "#8BC34A"),
    ("その他", "#A9A9A9"),
];

/// Display attributes for a named category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryDescriptor {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Fixed, insertion-ordered lookup from category name to display attributes.
///
/// Static configuration data: lookups never mutate the registry, and adding
/// categories at runtime is out of scope. Misses resolve to a neutral
/// fallback descriptor instead of failing.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    descriptors: Vec<CategoryDescriptor>,
    fallback: CategoryDescriptor,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryRegistry {
    /// Registry seeded with the built-in category table.
    pub fn builtin() -> Self {
        let descriptors = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, color)| CategoryDescriptor::new(*name, *color))
            .collect();
        Self {
            descriptors,
            fallback: CategoryDescriptor::new(UNCATEGORIZED_LABEL, FALLBACK_COLOR),
        }
    }

    /// Resolves a category name to its descriptor.
    ///
    /// Absent or unknown names map to the uncategorized fallback. Matching
    /// is case-sensitive and exact.
    pub fn resolve(&self, name: Option<&str>) -> &CategoryDescriptor {
        match name {
            Some(name) => self
                .descriptors
                .iter()
                .find(|descriptor| descriptor.name == name)
                .unwrap_or(&self.fallback),
            None => &self.fallback,
        }
    }

    /// The registered descriptors in insertion order, for legend rendering.
    pub fn descriptors(&self) -> &[CategoryDescriptor] {
        &self.descriptors
    }

    pub fn fallback(&self) -> &CategoryDescriptor {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_resolves_to_registered_color() {
        let registry = CategoryRegistry::builtin();
        let descriptor = registry.resolve(Some("食費"));
        assert_eq!(descriptor.name, "食費");
        assert_eq!(descriptor.color, "#FF6384");
        assert!(descriptor.icon.is_none());
    }

    #[test]
    fn absent_and_unknown_names_fall_back() {
        let registry = CategoryRegistry::builtin();
        for miss in [None, Some("光熱費"), Some("食費 ")] {
            let descriptor = registry.resolve(miss);
            assert_eq!(descriptor.name, UNCATEGORIZED_LABEL);
            assert_eq!(descriptor.color, FALLBACK_COLOR);
        }
    }

    #[test]
    fn descriptors_keep_insertion_order() {
        let registry = CategoryRegistry::builtin();
        let names: Vec<&str> = registry
            .descriptors()
            .iter()
            .map(|descriptor| descriptor.name.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"食費"));
        assert_eq!(names.last(), Some(&"その他"));
        assert_eq!(names.len(), 8);
    }
}
