use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a product category.
///
/// Categories nest exactly one level deep: rows with `parent_id = None` are
/// roots, rows pointing at a root are subcategories.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Identifier of the parent category for subcategories.
    pub parent_id: Option<i32>,
    /// Human-readable name of the category.
    pub name: String,
    /// URL slug, unique per language.
    pub slug: String,
    /// Sort position within the parent.
    pub position: i32,
    /// Language this category row is written in.
    pub lang: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub position: i32,
    pub lang: String,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            parent_id: None,
            name: name.into(),
            slug: slug.into(),
            position: 0,
            lang: lang.into(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a parent identifier, turning the payload into a subcategory.
    pub fn with_parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Set the sort position within the parent.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Full replacement data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        parent_id: Option<i32>,
        position: i32,
    ) -> Self {
        Self {
            parent_id,
            name: name.into(),
            slug: slug.into(),
            position,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional language filter.
    pub lang: Option<String>,
    /// Optional restriction to roots (`Some(None)`) or to one parent's
    /// children (`Some(Some(id))`).
    pub parent_id: Option<Option<i32>>,
}

impl CategoryListQuery {
    /// Construct a query that targets every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to one language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Restrict the results to root categories.
    pub fn roots_only(mut self) -> Self {
        self.parent_id = Some(None);
        self
    }

    /// Restrict the results to children of `parent_id`.
    pub fn children_of(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(Some(parent_id));
        self
    }
}

/// Root category together with its children, as shown in the admin tree.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategoryTreeNode {
    pub category: Category,
    pub children: Vec<Category>,
}

impl CategoryTreeNode {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children;
        self
    }
}
