use std::collections::HashMap;

use crate::domain::category::{Category, CategoryListQuery, CategoryTreeNode};
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Load categories as a one-level tree: roots with their subcategories.
pub fn load_category_tree<R>(repo: &R, lang: Option<String>) -> ServiceResult<Vec<CategoryTreeNode>>
where
    R: CategoryReader + ?Sized,
{
    let mut query = CategoryListQuery::new();
    if let Some(lang) = lang {
        query = query.lang(lang);
    }

    let flat = repo.list_categories(query).map_err(ServiceError::from)?;

    Ok(build_category_tree(flat))
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Updates an existing category.
pub fn modify_category<R>(
    repo: &R,
    category_id: i32,
    form: EditCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let update = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a category.
///
/// The repository refuses while subcategories or products still reference
/// it; the refusal surfaces as a conflict with the guard's message.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id).map_err(ServiceError::from)
}

fn build_category_tree(flat: Vec<Category>) -> Vec<CategoryTreeNode> {
    let mut children_by_parent: HashMap<i32, Vec<Category>> = HashMap::new();
    let mut roots = Vec::new();

    for category in flat {
        match category.parent_id {
            Some(parent_id) => children_by_parent
                .entry(parent_id)
                .or_default()
                .push(category),
            None => roots.push(category),
        }
    }

    roots
        .into_iter()
        .map(|root| {
            let children = children_by_parent.remove(&root.id).unwrap_or_default();
            CategoryTreeNode::new(root).with_children(children)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};
    use crate::repository::RepositoryError;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, slug: &str, parent_id: Option<i32>, position: i32) -> Category {
        Category {
            id,
            parent_id,
            name: slug.to_string(),
            slug: slug.to_string(),
            position,
            lang: "ru".to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn load_category_tree_groups_children_under_roots() {
        let mut repo = MockCategoryReader::new();

        repo.expect_list_categories()
            .times(1)
            .returning(|query| {
                assert_eq!(query.lang.as_deref(), Some("ru"));

                Ok(vec![
                    sample_category(1, "footwear", None, 0),
                    sample_category(2, "boots", Some(1), 0),
                    sample_category(3, "sneakers", Some(1), 1),
                    sample_category(4, "workwear", None, 1),
                    sample_category(9, "orphan", Some(77), 0),
                ])
            });

        let tree = load_category_tree(&repo, Some("ru".to_string())).expect("expected success");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.slug, "footwear");
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].slug, "boots");
        assert_eq!(tree[1].category.slug, "workwear");
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn create_category_validates_form() {
        let repo = MockCategoryWriter::new();

        let form = AddCategoryForm {
            name: "   ".to_string(),
            slug: "boots".to_string(),
            lang: "ru".to_string(),
            parent_id: None,
            position: 0,
        };

        let result = create_category(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_category_persists_new_entry() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_create_category()
            .times(1)
            .withf(|new_category| {
                assert_eq!(new_category.name, "Boots");
                assert_eq!(new_category.slug, "boots");
                assert_eq!(new_category.parent_id, Some(1));
                true
            })
            .returning(|_| Ok(sample_category(2, "boots", Some(1), 0)));

        let form = AddCategoryForm {
            name: " Boots ".to_string(),
            slug: "Boots".to_string(),
            lang: "ru".to_string(),
            parent_id: Some(1),
            position: 0,
        };

        let created = create_category(&repo, form).expect("expected success");

        assert_eq!(created.id, 2);
    }

    #[test]
    fn remove_category_surfaces_guard_conflicts() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_delete_category()
            .times(1)
            .returning(|_| {
                Err(RepositoryError::Conflict(
                    "category still has products".to_string(),
                ))
            });

        let result = remove_category(&repo, 3);

        assert!(
            matches!(result, Err(ServiceError::Conflict(message)) if message.contains("products"))
        );
    }

    #[test]
    fn modify_category_updates_entry() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_update_category()
            .times(1)
            .withf(|category_id, updates| {
                assert_eq!(*category_id, 3);
                assert_eq!(updates.slug, "dry-goods");
                true
            })
            .returning(|_, _| Ok(sample_category(3, "dry-goods", None, 0)));

        let form = EditCategoryForm {
            name: "Dry Goods".to_string(),
            slug: "dry-goods".to_string(),
            parent_id: None,
            position: 0,
        };

        let updated = modify_category(&repo, 3, form).expect("expected success");

        assert_eq!(updated.id, 3);
    }
}
