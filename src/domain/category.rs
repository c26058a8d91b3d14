//! Category domain model and id → name resolution

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::CategoryId;

#[derive(Debug, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category ID {id} is used by both '{first}' and '{second}'")]
    DuplicateCategory {
        id: CategoryId,
        first: String,
        second: String,
    },
}

/// A named bucket that tasks are filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier derived from the name
    pub category_id: CategoryId,

    /// Display name
    pub name: String,
}

impl Category {
    /// Creates a category, deriving its ID from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            category_id: CategoryId::from_name(&name),
            name,
        }
    }
}

/// Lookup from category ID to display name
///
/// Built once per listing. Duplicate IDs are accepted only when they carry
/// the same name; a conflicting pair is rejected rather than silently
/// picking one.
#[derive(Debug, Clone, Default)]
pub struct CategoryNameMap {
    names: HashMap<CategoryId, String>,
}

impl CategoryNameMap {
    /// Builds the map from a category collection
    pub fn resolve<'a, I>(categories: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let mut names: HashMap<CategoryId, String> = HashMap::new();

        for category in categories {
            match names.get(&category.category_id) {
                Some(existing) if existing != &category.name => {
                    return Err(CategoryError::DuplicateCategory {
                        id: category.category_id.clone(),
                        first: existing.clone(),
                        second: category.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    names.insert(category.category_id.clone(), category.name.clone());
                }
            }
        }

        Ok(Self { names })
    }

    /// Looks up the display name for an ID
    pub fn name(&self, id: &CategoryId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_derives_id_from_name() {
        let category = Category::new("Groceries");

        assert_eq!(category.category_id, CategoryId::from_name("Groceries"));
        assert_eq!(category.name, "Groceries");
    }

    #[test]
    fn new_category_trims_name() {
        let category = Category::new("  Bills  ");
        assert_eq!(category.name, "Bills");
        assert_eq!(category.category_id, CategoryId::from_name("Bills"));
    }

    #[test]
    fn resolve_covers_every_category() {
        let categories = vec![Category::new("Groceries"), Category::new("Bills")];
        let map = CategoryNameMap::resolve(&categories).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.name(&CategoryId::from_name("Groceries")), Some("Groceries"));
        assert_eq!(map.name(&CategoryId::from_name("Bills")), Some("Bills"));
        assert_eq!(map.name(&CategoryId::from_name("Work")), None);
    }

    #[test]
    fn resolve_collapses_exact_duplicates() {
        let categories = vec![Category::new("Work"), Category::new("Work")];
        let map = CategoryNameMap::resolve(&categories).unwrap();

        assert_eq!(map.len(), 1);
    }

    #[test]
    fn resolve_rejects_conflicting_duplicates() {
        let id = CategoryId::from_name("Work");
        let categories = vec![
            Category::new("Work"),
            Category {
                category_id: id.clone(),
                name: "Office".to_string(),
            },
        ];

        let err = CategoryNameMap::resolve(&categories).unwrap_err();
        assert_eq!(
            err,
            CategoryError::DuplicateCategory {
                id,
                first: "Work".to_string(),
                second: "Office".to_string(),
            }
        );
    }

    #[test]
    fn resolve_empty() {
        let map = CategoryNameMap::resolve(&Vec::<Category>::new()).unwrap();
        assert!(map.is_empty());
    }
}
