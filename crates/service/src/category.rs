//! Category lifecycle service: paged query, create, update,
//! enable/disable, guarded delete, list by type.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use mesa_core::error::CategoryError;
use mesa_core::pagination::{PageQuery, PageResult};
use mesa_core::types::DbId;
use mesa_db::models::category::{Category, CategoryFilter, CategoryType, CreateCategory, UpdateCategory};
use mesa_db::models::Status;

use crate::gateway::{CategoryStore, DishStore, SetmealStore};
use crate::guard::ReferentialGuard;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Caller input for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub category_type: CategoryType,
    #[validate(range(min = 0, message = "sort_order must be non-negative"))]
    pub sort_order: i32,
}

/// Caller input for updating a category.
///
/// `name` and `sort_order` are always supplied; the type only when it
/// should change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "sort_order must be non-negative"))]
    pub sort_order: i32,
    pub category_type: Option<CategoryType>,
}

/// Paged category query: 1-based page plus optional filters.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPageQuery {
    pub page: i64,
    pub page_size: i64,
    /// Substring match on the category name.
    pub name: Option<String>,
    pub category_type: Option<CategoryType>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Composes the category store with the referential guard.
///
/// Every mutating operation takes the acting employee's id explicitly;
/// there is no ambient current-user context.
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
    guard: ReferentialGuard,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryStore>,
        dishes: Arc<dyn DishStore>,
        setmeals: Arc<dyn SetmealStore>,
    ) -> Self {
        Self {
            categories,
            guard: ReferentialGuard::new(dishes, setmeals),
        }
    }

    /// Fetch one page of categories plus the total match count.
    pub async fn page_query(
        &self,
        query: &CategoryPageQuery,
    ) -> Result<PageResult<Category>, CategoryError> {
        let page = PageQuery::new(query.page, query.page_size).map_err(CategoryError::Validation)?;
        let filter = CategoryFilter {
            name: query.name.clone(),
            category_type: query.category_type,
        };

        let (total, items) = self
            .categories
            .page_query(&filter, page.limit(), page.offset())
            .await?;

        tracing::debug!(total, page = query.page, "category page query");
        Ok(PageResult { total, items })
    }

    /// Create a category. The new record always starts disabled.
    pub async fn create(
        &self,
        input: &CreateCategoryInput,
        actor: DbId,
    ) -> Result<Category, CategoryError> {
        validate(input)?;
        require_non_blank(&input.name)?;

        let row = CreateCategory {
            name: input.name.clone(),
            category_type: input.category_type,
            sort_order: input.sort_order,
            status: Status::Disabled,
            created_by: actor,
            updated_by: actor,
        };

        let created = self.categories.insert(&row).await?;
        tracing::info!(id = created.id, name = %created.name, actor, "category created");
        Ok(created)
    }

    /// Delete a category, refusing while dishes or meal-sets reference it.
    ///
    /// The guard check and the delete are two separate store calls; making
    /// them atomic against a concurrent dependent insert is the storage
    /// adapter's transaction concern.
    pub async fn delete(&self, id: DbId) -> Result<(), CategoryError> {
        // A missing id is reported as NotFound, never as a blocked deletion.
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(CategoryError::NotFound { id });
        }

        self.guard.check(id).await?;

        if !self.categories.delete_by_id(id).await? {
            return Err(CategoryError::NotFound { id });
        }
        tracing::info!(id, "category deleted");
        Ok(())
    }

    /// Enable or disable a category. Does not cascade to dependents.
    pub async fn set_status(
        &self,
        id: DbId,
        status: Status,
        actor: DbId,
    ) -> Result<Category, CategoryError> {
        let changes = UpdateCategory {
            name: None,
            category_type: None,
            sort_order: None,
            status: Some(status),
            updated_by: actor,
        };

        let updated = self
            .categories
            .update(id, &changes)
            .await?
            .ok_or(CategoryError::NotFound { id })?;
        tracing::info!(id, ?status, actor, "category status changed");
        Ok(updated)
    }

    /// Update a category's name, sort key, and optionally its type.
    ///
    /// Rejected as [`CategoryError::NotModified`] only when BOTH the name
    /// and the sort key equal the stored values; changing either one alone
    /// goes through.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateCategoryInput,
        actor: DbId,
    ) -> Result<Category, CategoryError> {
        validate(input)?;
        require_non_blank(&input.name)?;

        let current = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound { id })?;

        if current.name == input.name && current.sort_order == input.sort_order {
            return Err(CategoryError::NotModified);
        }

        let changes = UpdateCategory {
            name: Some(input.name.clone()),
            category_type: input.category_type,
            sort_order: Some(input.sort_order),
            status: None,
            updated_by: actor,
        };

        // The row may vanish between the fetch and the update.
        let updated = self
            .categories
            .update(id, &changes)
            .await?
            .ok_or(CategoryError::NotFound { id })?;
        tracing::info!(id, actor, "category updated");
        Ok(updated)
    }

    /// List categories of the given type (or all) in display order.
    pub async fn list_by_type(
        &self,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<Category>, CategoryError> {
        Ok(self.categories.list_by_type(category_type).await?)
    }
}

fn validate<T: Validate>(input: &T) -> Result<(), CategoryError> {
    input
        .validate()
        .map_err(|e| CategoryError::Validation(e.to_string()))
}

/// Length checks admit whitespace-only names; reject those too.
fn require_non_blank(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::Validation(
            "name must not be blank".to_string(),
        ));
    }
    Ok(())
}
