//! Integration tests for the category repository against a real database:
//! insert defaults, partial updates, deletion, list ordering, and the
//! paged query pair.

use sqlx::PgPool;

use mesa_db::models::category::{CategoryFilter, CategoryType, CreateCategory, UpdateCategory};
use mesa_db::models::Status;
use mesa_db::repositories::CategoryRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str, sort_order: i32) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        category_type: CategoryType::Dish,
        sort_order,
        status: Status::Disabled,
        created_by: 1,
        updated_by: 1,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_insert_assigns_id_and_equal_timestamps(pool: PgPool) {
    let created = CategoryRepo::insert(&pool, &new_category("Soups", 3))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Soups");
    assert_eq!(created.status, Status::Disabled);
    assert_eq!(created.created_at, created.updated_at);

    let found = CategoryRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().name, "Soups");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_applies_only_set_fields(pool: PgPool) {
    let created = CategoryRepo::insert(&pool, &new_category("Soups", 3))
        .await
        .unwrap();

    let changes = UpdateCategory {
        name: None,
        category_type: None,
        sort_order: Some(7),
        status: None,
        updated_by: 2,
    };
    let updated = CategoryRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.sort_order, 7);
    assert_eq!(updated.name, "Soups");
    assert_eq!(updated.status, Status::Disabled);
    assert_eq!(updated.updated_by, 2);
    assert!(updated.updated_at > updated.created_at);

    // Unknown id yields None, not an error.
    let missing = CategoryRepo::update(&pool, 9999, &changes).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_by_id(pool: PgPool) {
    let created = CategoryRepo::insert(&pool, &new_category("Seasonal", 1))
        .await
        .unwrap();

    assert!(CategoryRepo::delete_by_id(&pool, created.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!CategoryRepo::delete_by_id(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_orders_by_sort_and_filters_by_type(pool: PgPool) {
    CategoryRepo::insert(&pool, &new_category("Third", 30)).await.unwrap();
    CategoryRepo::insert(&pool, &new_category("First", 10)).await.unwrap();
    let mut combo = new_category("Combos", 20);
    combo.category_type = CategoryType::MealSet;
    CategoryRepo::insert(&pool, &combo).await.unwrap();

    let dishes = CategoryRepo::list(&pool, Some(CategoryType::Dish)).await.unwrap();
    let names: Vec<&str> = dishes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Third"]);

    let all = CategoryRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].name, "Combos");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_page_and_count(pool: PgPool) {
    for i in 0..5 {
        CategoryRepo::insert(&pool, &new_category(&format!("Category {i}"), i))
            .await
            .unwrap();
    }

    let all = CategoryFilter::default();
    assert_eq!(CategoryRepo::count(&pool, &all).await.unwrap(), 5);

    let page = CategoryRepo::page(&pool, &all, 2, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].sort_order, 2);
    assert_eq!(page[1].sort_order, 3);

    // Substring name filter.
    let filtered = CategoryFilter {
        name: Some("gory 4".into()),
        category_type: None,
    };
    assert_eq!(CategoryRepo::count(&pool, &filtered).await.unwrap(), 1);
    let page = CategoryRepo::page(&pool, &filtered, 10, 0).await.unwrap();
    assert_eq!(page[0].name, "Category 4");

    // Name + type filter together.
    let both = CategoryFilter {
        name: Some("Category".into()),
        category_type: Some(CategoryType::MealSet),
    };
    assert_eq!(CategoryRepo::count(&pool, &both).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_name_rejected(pool: PgPool) {
    CategoryRepo::insert(&pool, &new_category("Soups", 1)).await.unwrap();
    let err = CategoryRepo::insert(&pool, &new_category("Soups", 2))
        .await
        .unwrap_err();
    // uq_categories_name unique violation.
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}
