//! Create the restaurants, pizzas and restaurant_pizzas tables.
//! Order follows foreign-key dependencies; every statement is idempotent.

use crate::error::AppError;
use crate::store::begin_write;
use sqlx::SqlitePool;

const DDL: &[(&str, &str)] = &[
    (
        "restaurants",
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    ),
    (
        "pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
    ),
    (
        "restaurant_pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
            restaurant_id INTEGER NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
            pizza_id INTEGER NOT NULL REFERENCES pizzas(id) ON DELETE RESTRICT
        )
        "#,
    ),
    (
        "restaurant_pizzas_restaurant_id_idx",
        "CREATE INDEX IF NOT EXISTS restaurant_pizzas_restaurant_id_idx \
         ON restaurant_pizzas (restaurant_id)",
    ),
    (
        "restaurant_pizzas_pizza_id_idx",
        "CREATE INDEX IF NOT EXISTS restaurant_pizzas_pizza_id_idx ON restaurant_pizzas (pizza_id)",
    ),
];

/// Apply the schema in one transaction. Safe to call on every startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = begin_write(pool).await?;
    for &(name, sql) in DDL {
        tracing::debug!(object = name, "apply ddl");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(objects = DDL.len(), "schema up to date");
    Ok(())
}
