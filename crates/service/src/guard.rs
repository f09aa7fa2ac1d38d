//! Referential guard: blocks category deletion while dependent records
//! exist.

use std::sync::Arc;

use mesa_core::error::{CategoryError, Dependent};
use mesa_core::types::DbId;

use crate::gateway::{DishStore, SetmealStore};

/// Pure read composition over the two dependent-record counters.
///
/// The dish check runs first; when both tables reference the category,
/// the dish dependency is the one reported.
pub struct ReferentialGuard {
    dishes: Arc<dyn DishStore>,
    setmeals: Arc<dyn SetmealStore>,
}

impl ReferentialGuard {
    pub fn new(dishes: Arc<dyn DishStore>, setmeals: Arc<dyn SetmealStore>) -> Self {
        Self { dishes, setmeals }
    }

    /// Fail with [`CategoryError::DeletionBlocked`] if any dish or
    /// meal-set still references the category.
    pub async fn check(&self, category_id: DbId) -> Result<(), CategoryError> {
        let dish_count = self.dishes.count_by_category(category_id).await?;
        if dish_count > 0 {
            tracing::warn!(category_id, dish_count, "deletion blocked by dishes");
            return Err(CategoryError::DeletionBlocked(Dependent::Dish));
        }

        let setmeal_count = self.setmeals.count_by_category(category_id).await?;
        if setmeal_count > 0 {
            tracing::warn!(category_id, setmeal_count, "deletion blocked by meal-sets");
            return Err(CategoryError::DeletionBlocked(Dependent::MealSet));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use mesa_core::error::StoreError;

    /// Counter fake returning a fixed count.
    struct FixedCount(i64);

    #[async_trait]
    impl DishStore for FixedCount {
        async fn count_by_category(&self, _category_id: DbId) -> Result<i64, StoreError> {
            Ok(self.0)
        }
    }

    #[async_trait]
    impl SetmealStore for FixedCount {
        async fn count_by_category(&self, _category_id: DbId) -> Result<i64, StoreError> {
            Ok(self.0)
        }
    }

    fn guard(dishes: i64, setmeals: i64) -> ReferentialGuard {
        ReferentialGuard::new(Arc::new(FixedCount(dishes)), Arc::new(FixedCount(setmeals)))
    }

    #[tokio::test]
    async fn test_unreferenced_category_passes() {
        assert!(guard(0, 0).check(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_dish_reference_blocks() {
        let err = guard(3, 0).check(7).await.unwrap_err();
        assert_matches!(err, CategoryError::DeletionBlocked(Dependent::Dish));
    }

    #[tokio::test]
    async fn test_setmeal_reference_blocks() {
        let err = guard(0, 1).check(7).await.unwrap_err();
        assert_matches!(err, CategoryError::DeletionBlocked(Dependent::MealSet));
    }

    #[tokio::test]
    async fn test_dish_reported_when_both_reference() {
        // Dish check runs first and wins even when meal-sets also match.
        let err = guard(2, 5).check(7).await.unwrap_err();
        assert_matches!(err, CategoryError::DeletionBlocked(Dependent::Dish));
    }
}
