//! Highlight categories and the fixed catalog they are looked up in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorSpec;
use crate::theme::ThemeMode;

/// A named highlight category with one fill per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, also the catalog key
    pub name: String,
    /// Fill used in light mode
    pub light_color: ColorSpec,
    /// Fill used in dark mode
    pub dark_color: ColorSpec,
}

impl Category {
    /// Create a new category with the given name and per-theme colors.
    pub fn new(name: &str, light_color: ColorSpec, dark_color: ColorSpec) -> Self {
        Self {
            name: name.to_string(),
            light_color,
            dark_color,
        }
    }

    /// Fill color for the given theme.
    pub fn color_for(&self, theme: ThemeMode) -> ColorSpec {
        match theme {
            ThemeMode::Light => self.light_color,
            ThemeMode::Dark => self.dark_color,
        }
    }
}

/// Default categories for new sessions.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Important",
            ColorSpec::rgb(254, 240, 138),
            ColorSpec::rgb(133, 77, 14),
        ),
        Category::new(
            "Note",
            ColorSpec::rgb(191, 219, 254),
            ColorSpec::rgb(30, 58, 138),
        ),
        Category::new(
            "Question",
            ColorSpec::rgb(233, 213, 255),
            ColorSpec::rgb(88, 28, 135),
        ),
        Category::new(
            "Definition",
            ColorSpec::rgb(187, 247, 208),
            ColorSpec::rgb(20, 83, 45),
        ),
    ]
}

/// Errors raised while building a category registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The catalog needs at least one entry to serve as default
    #[error("Category registry must contain at least one category")]
    Empty,

    /// Two entries share a name
    #[error("Duplicate category name: {0}")]
    DuplicateName(String),

    /// Light and dark fills must differ
    #[error("Category '{0}' uses the same color for light and dark mode")]
    IndistinctColors(String),
}

/// Ordered, read-only catalog of categories.
///
/// The first entry is the default that unknown names fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry from an ordered list of categories.
    pub fn new(categories: Vec<Category>) -> Result<Self, RegistryError> {
        if categories.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(RegistryError::DuplicateName(category.name.clone()));
            }
            if category.light_color == category.dark_color {
                return Err(RegistryError::IndistinctColors(category.name.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// The fallback category (first entry).
    pub fn default_category(&self) -> &Category {
        // Construction guarantees at least one entry
        &self.categories[0]
    }

    /// Look up a category by exact name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a category by name, falling back to the default entry.
    pub fn resolve(&self, name: &str) -> &Category {
        match self.get(name) {
            Some(category) => category,
            None => {
                let fallback = self.default_category();
                log::warn!(
                    "Unknown category '{}', falling back to '{}'",
                    name,
                    fallback.name
                );
                fallback
            }
        }
    }

    /// Fill color for a category name under the given theme.
    ///
    /// Resolved on every call, never cached on the highlight.
    pub fn color_for(&self, name: &str, theme: ThemeMode) -> ColorSpec {
        self.resolve(name).color_for(theme)
    }

    /// Whether a category with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = CategoryRegistry::default();
        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Important", "Note", "Question", "Definition"]);
        assert_eq!(registry.default_category().name, "Important");
    }

    #[test]
    fn test_default_categories_pass_validation() {
        assert!(CategoryRegistry::new(default_categories()).is_ok());
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.resolve("Note").name, "Note");
        assert_eq!(registry.resolve("Nope").name, "Important");
        // Lookup is exact
        assert_eq!(registry.resolve("note").name, "Important");
    }

    #[test]
    fn test_color_for_follows_theme() {
        let registry = CategoryRegistry::default();
        let note = registry.resolve("Note");

        assert_eq!(registry.color_for("Note", ThemeMode::Light), note.light_color);
        assert_eq!(registry.color_for("Note", ThemeMode::Dark), note.dark_color);
        assert_ne!(
            registry.color_for("Note", ThemeMode::Light),
            registry.color_for("Note", ThemeMode::Dark)
        );
    }

    #[test]
    fn test_color_for_is_stable() {
        let registry = CategoryRegistry::default();
        let first = registry.color_for("Question", ThemeMode::Dark);
        for _ in 0..5 {
            assert_eq!(registry.color_for("Question", ThemeMode::Dark), first);
        }
    }

    #[test]
    fn test_registry_validation() {
        assert_eq!(CategoryRegistry::new(Vec::new()), Err(RegistryError::Empty));

        let red = ColorSpec::rgb(255, 0, 0);
        let blue = ColorSpec::rgb(0, 0, 255);
        let dup = vec![Category::new("A", red, blue), Category::new("A", blue, red)];
        assert_eq!(
            CategoryRegistry::new(dup),
            Err(RegistryError::DuplicateName("A".to_string()))
        );

        let same = vec![Category::new("B", red, red)];
        assert_eq!(
            CategoryRegistry::new(same),
            Err(RegistryError::IndistinctColors("B".to_string()))
        );
    }
}
