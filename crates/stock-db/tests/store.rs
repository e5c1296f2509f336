//! Integration tests for the product store.
//!
//! Every test opens a fresh database file inside its own temporary
//! directory, so tests are isolated and can run in parallel.

use stock_core::{NewProduct, Product};
use stock_db::{DbError, Store};
use tempfile::TempDir;

/// Opens a store on a fresh path. The directory must outlive the store.
async fn fresh_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("stock.db")).await.unwrap();
    (dir, store)
}

#[tokio::test]
async fn pen_scenario() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    assert!(products.list().await.unwrap().is_empty());

    let id = products
        .create(&NewProduct::new("Pen", 10, 1.5))
        .await
        .unwrap();
    assert_eq!(id, 1);

    assert_eq!(
        products.list().await.unwrap(),
        vec![Product::new(1, "Pen", 10, 1.5)]
    );

    products.delete(1).await.unwrap();
    assert!(products.list().await.unwrap().is_empty());

    store.close().await;
}

#[tokio::test]
async fn create_assigns_new_id_and_list_contains_one_match() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    let first = products.create(&NewProduct::new("Chair", 4, 49.9)).await.unwrap();
    let second = products.create(&NewProduct::new("Desk", 1, 120.0)).await.unwrap();
    assert!(second > first);

    let listed = products.list().await.unwrap();
    let matches: Vec<_> = listed
        .iter()
        .filter(|p| p.name == "Desk" && p.quantity == 1 && p.price == 120.0)
        .collect();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, second);

    store.close().await;
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    for name in ["A", "C", "B"] {
        products.create(&NewProduct::new(name, 0, 0.0)).await.unwrap();
    }

    let names: Vec<String> = products
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["A", "C", "B"]);

    store.close().await;
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    let first = products.create(&NewProduct::new("Pen", 10, 1.5)).await.unwrap();
    products.delete(first).await.unwrap();

    let second = products.create(&NewProduct::new("Pen", 10, 1.5)).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    store.close().await;
}

#[tokio::test]
async fn missing_id_does_not_exist_and_delete_is_a_no_op() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    let id = products.create(&NewProduct::new("Lamp", 2, 15.0)).await.unwrap();
    let before = products.list().await.unwrap();

    assert!(!products.exists_by_id(999).await.unwrap());
    products.delete(999).await.unwrap();

    assert!(products.exists_by_id(id).await.unwrap());
    assert_eq!(products.list().await.unwrap(), before);

    store.close().await;
}

#[tokio::test]
async fn update_changes_only_the_target_row() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    let keep = products.create(&NewProduct::new("Mug", 6, 3.0)).await.unwrap();
    let target = products.create(&NewProduct::new("Cup", 8, 2.0)).await.unwrap();

    products
        .update(&Product::new(target, "Teacup", 12, 2.75))
        .await
        .unwrap();

    assert_eq!(products.count().await.unwrap(), 2);
    assert_eq!(
        products.get_by_id(target).await.unwrap(),
        Some(Product::new(target, "Teacup", 12, 2.75))
    );
    assert_eq!(
        products.get_by_id(keep).await.unwrap(),
        Some(Product::new(keep, "Mug", 6, 3.0))
    );

    store.close().await;
}

#[tokio::test]
async fn update_of_missing_id_is_a_no_op() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    products.create(&NewProduct::new("Mug", 6, 3.0)).await.unwrap();
    let before = products.list().await.unwrap();

    products
        .update(&Product::new(42, "Ghost", 1, 1.0))
        .await
        .unwrap();

    assert_eq!(products.list().await.unwrap(), before);
    assert!(!products.exists_by_id(42).await.unwrap());

    store.close().await;
}

#[tokio::test]
async fn exists_by_name_is_exact_and_case_sensitive() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    products.create(&NewProduct::new("Chair", 1, 10.0)).await.unwrap();

    assert!(products.exists_by_name("Chair").await.unwrap());
    assert!(!products.exists_by_name("chair").await.unwrap());
    assert!(!products.exists_by_name("Chair ").await.unwrap());
    assert!(!products.exists_by_name("Chai").await.unwrap());

    store.close().await;
}

#[tokio::test]
async fn duplicate_names_are_allowed_by_storage() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    products.create(&NewProduct::new("Pen", 1, 1.0)).await.unwrap();
    products.create(&NewProduct::new("Pen", 2, 1.0)).await.unwrap();

    assert_eq!(products.count().await.unwrap(), 2);

    store.close().await;
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.db");

    let store = Store::open(&path).await.unwrap();
    store
        .products()
        .create(&NewProduct::new("Pen", 10, 1.5))
        .await
        .unwrap();
    store.close().await;

    let store = Store::open(&path).await.unwrap();
    assert_eq!(
        store.products().list().await.unwrap(),
        vec![Product::new(1, "Pen", 10, 1.5)]
    );
    store.close().await;
}

#[tokio::test]
async fn operations_after_close_fail_with_not_initialized() {
    let (_dir, store) = fresh_store().await;
    let products = store.products();

    store.close().await;

    assert!(matches!(
        products.create(&NewProduct::new("Pen", 1, 1.0)).await,
        Err(DbError::NotInitialized)
    ));
    assert!(matches!(products.list().await, Err(DbError::NotInitialized)));
    assert!(matches!(products.delete(1).await, Err(DbError::NotInitialized)));
    assert!(matches!(
        products.update(&Product::new(1, "Pen", 1, 1.0)).await,
        Err(DbError::NotInitialized)
    ));
    assert!(matches!(
        products.exists_by_id(1).await,
        Err(DbError::NotInitialized)
    ));
    assert!(matches!(
        products.exists_by_name("Pen").await,
        Err(DbError::NotInitialized)
    ));
}

#[tokio::test]
async fn open_fails_when_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("stock.db");

    let result = Store::open(&path).await;
    assert!(matches!(result, Err(DbError::ConnectionFailed(_))));
}

#[tokio::test]
async fn open_fails_on_a_file_that_is_not_a_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.db");
    std::fs::write(&path, vec![b'x'; 4096]).unwrap();

    assert!(Store::open(&path).await.is_err());
}

#[tokio::test]
async fn open_fails_with_schema_error_when_the_table_name_is_taken() {
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{Connection, SqliteConnection};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.db");

    // An index already owns the name the product table needs
    let mut conn = SqliteConnection::connect_with(
        &SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true),
    )
    .await
    .unwrap();
    sqlx::query("CREATE TABLE t(x)")
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query("CREATE INDEX produits ON t(x)")
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();

    let result = Store::open(&path).await;
    assert!(matches!(result, Err(DbError::SchemaFailed(_))));
}
