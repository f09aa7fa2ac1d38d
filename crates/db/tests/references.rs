//! Integration tests for the reference counters and employee lookup.

use sqlx::PgPool;

use mesa_core::types::DbId;
use mesa_db::models::category::{CategoryType, CreateCategory};
use mesa_db::models::Status;
use mesa_db::repositories::{CategoryRepo, DishRepo, EmployeeRepo, SetmealRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_category(pool: &PgPool, name: &str, category_type: CategoryType) -> DbId {
    let created = CategoryRepo::insert(
        pool,
        &CreateCategory {
            name: name.to_string(),
            category_type,
            sort_order: 0,
            status: Status::Disabled,
            created_by: 1,
            updated_by: 1,
        },
    )
    .await
    .unwrap();
    created.id
}

async fn seed_dish(pool: &PgPool, category_id: DbId, name: &str) {
    sqlx::query(
        "INSERT INTO dishes (category_id, name, created_by, updated_by) VALUES ($1, $2, 1, 1)",
    )
    .bind(category_id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_setmeal(pool: &PgPool, category_id: DbId, name: &str) {
    sqlx::query(
        "INSERT INTO setmeals (category_id, name, created_by, updated_by) VALUES ($1, $2, 1, 1)",
    )
    .bind(category_id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_employee(pool: &PgPool, username: &str, password_hash: &str, status: i16) {
    sqlx::query(
        "INSERT INTO employees (name, username, password_hash, status) VALUES ($1, $1, $2, $3)",
    )
    .bind(username)
    .bind(password_hash)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_dish_count_by_category(pool: PgPool) {
    let soups = seed_category(&pool, "Soups", CategoryType::Dish).await;
    let grill = seed_category(&pool, "Grill", CategoryType::Dish).await;
    seed_dish(&pool, soups, "Tomato soup").await;
    seed_dish(&pool, soups, "Onion soup").await;

    assert_eq!(DishRepo::count_by_category(&pool, soups).await.unwrap(), 2);
    assert_eq!(DishRepo::count_by_category(&pool, grill).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_setmeal_count_by_category(pool: PgPool) {
    let combos = seed_category(&pool, "Combos", CategoryType::MealSet).await;
    seed_setmeal(&pool, combos, "Family pack").await;

    assert_eq!(
        SetmealRepo::count_by_category(&pool, combos).await.unwrap(),
        1
    );
    // Unknown category: zero, not an error.
    assert_eq!(
        SetmealRepo::count_by_category(&pool, 9999).await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_employee_by_username(pool: PgPool) {
    seed_employee(&pool, "alice", "$argon2id$fake-hash-for-lookup", 1).await;

    let alice = EmployeeRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.status, Status::Enabled);
    assert_eq!(alice.password_hash, "$argon2id$fake-hash-for-lookup");

    let found = EmployeeRepo::find_by_id(&pool, alice.id).await.unwrap();
    assert_eq!(found.unwrap().username, "alice");

    // Lookup is case-sensitive and exact.
    assert!(EmployeeRepo::find_by_username(&pool, "Alice")
        .await
        .unwrap()
        .is_none());
    assert!(EmployeeRepo::find_by_username(&pool, "ghost")
        .await
        .unwrap()
        .is_none());
}
