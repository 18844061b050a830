//! Repository-level tests against a fresh migrated SQLite database.

use assert_matches::assert_matches;
use dishes_db::repositories::{DishRepo, IngredientRepo};
use sqlx::SqlitePool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn create_then_find_by_id_roundtrips(pool: SqlitePool) {
    let created = DishRepo::create(&pool, "Pad Thai").await.unwrap();

    let found = DishRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created dish must be findable");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Pad Thai");
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_returns_none_for_unknown_id(pool: SqlitePool) {
    let found = DishRepo::find_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_name_is_exact_match_only(pool: SqlitePool) {
    DishRepo::create(&pool, "Ramen").await.unwrap();

    let found = DishRepo::find_by_name(&pool, "Ramen").await.unwrap();
    assert_eq!(found.unwrap().name, "Ramen");

    // A substring of an existing name is not a match.
    let found = DishRepo::find_by_name(&pool, "Ram").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_name_returns_oldest_on_duplicates(pool: SqlitePool) {
    let first = DishRepo::create(&pool, "House Curry").await.unwrap();
    let _second = DishRepo::create(&pool, "House Curry").await.unwrap();

    let found = DishRepo::find_by_name(&pool, "House Curry")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, first.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_name_substring(pool: SqlitePool) {
    DishRepo::create(&pool, "Zucchini Fritters").await.unwrap();
    DishRepo::create(&pool, "Zucchini Soup").await.unwrap();
    DishRepo::create(&pool, "Onion Soup").await.unwrap();

    let filtered = DishRepo::list(&pool, Some("Zucchini")).await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|d| d.name.contains("Zucchini")));

    // Absent and empty filters behave identically: everything comes back.
    let all = DishRepo::list(&pool, None).await.unwrap();
    let all_empty = DishRepo::list(&pool, Some("")).await.unwrap();
    assert_eq!(all.len(), all_empty.len());
    assert!(all.len() >= 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filter_wildcards_match_literally(pool: SqlitePool) {
    DishRepo::create(&pool, "Pizza_").await.unwrap();
    DishRepo::create(&pool, "PizzaX").await.unwrap();
    DishRepo::create(&pool, "100% Rye Bread").await.unwrap();
    DishRepo::create(&pool, "100 Rye Breads").await.unwrap();

    // `_` must not act as a single-character wildcard.
    let filtered = DishRepo::list(&pool, Some("Pizza_")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Pizza_");

    // `%` must not act as a multi-character wildcard.
    let filtered = DishRepo::list(&pool, Some("100%")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "100% Rye Bread");

    // A literal backslash in the filter is not an escape prefix.
    DishRepo::create(&pool, r"Fish \ Chips").await.unwrap();
    let filtered = DishRepo::list(&pool, Some(r"\ Chips")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, r"Fish \ Chips");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_name_overwrites_and_preserves_id(pool: SqlitePool) {
    let created = DishRepo::create(&pool, "Old Name").await.unwrap();

    let updated = DishRepo::update_name(&pool, created.id, "New Name")
        .await
        .unwrap()
        .expect("existing dish must be updatable");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_name_returns_none_for_unknown_id(pool: SqlitePool) {
    let updated = DishRepo::update_name(&pool, Uuid::new_v4(), "Whatever")
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_cascades_to_ingredients(pool: SqlitePool) {
    let dish = DishRepo::create(&pool, "Caesar Salad").await.unwrap();
    IngredientRepo::create(&pool, dish.id, "Romaine").await.unwrap();
    IngredientRepo::create(&pool, dish.id, "Croutons").await.unwrap();

    assert!(DishRepo::delete(&pool, dish.id).await.unwrap());

    assert!(DishRepo::find_by_id(&pool, dish.id).await.unwrap().is_none());
    let orphans = IngredientRepo::list_by_dish(&pool, dish.id).await.unwrap();
    assert!(orphans.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_returns_false_for_unknown_id(pool: SqlitePool) {
    assert!(!DishRepo::delete(&pool, Uuid::new_v4()).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn exists_tracks_row_presence(pool: SqlitePool) {
    let dish = DishRepo::create(&pool, "Gazpacho").await.unwrap();
    assert!(DishRepo::exists(&pool, dish.id).await.unwrap());

    DishRepo::delete(&pool, dish.id).await.unwrap();
    assert!(!DishRepo::exists(&pool, dish.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn seed_menu_is_present(pool: SqlitePool) {
    let pizza = DishRepo::find_by_name(&pool, "Margherita Pizza")
        .await
        .unwrap()
        .expect("seed migration must insert the sample pizza");

    let ingredients = IngredientRepo::list_by_dish(&pool, pizza.id).await.unwrap();
    assert_eq!(ingredients.len(), 3);
    assert!(ingredients.iter().any(|i| i.name == "Mozzarella"));
}

#[sqlx::test(migrations = "./migrations")]
async fn ingredient_for_unknown_dish_is_rejected(pool: SqlitePool) {
    let result = IngredientRepo::create(&pool, Uuid::new_v4(), "Ghost Pepper").await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn ingredients_list_alphabetically(pool: SqlitePool) {
    let dish = DishRepo::create(&pool, "Omelette").await.unwrap();
    IngredientRepo::create(&pool, dish.id, "Eggs").await.unwrap();
    IngredientRepo::create(&pool, dish.id, "Butter").await.unwrap();
    IngredientRepo::create(&pool, dish.id, "Chives").await.unwrap();

    let names: Vec<String> = IngredientRepo::list_by_dish(&pool, dish.id)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Butter", "Chives", "Eggs"]);
}
