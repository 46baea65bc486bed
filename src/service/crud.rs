//! Queries for restaurants, pizzas and their associations.
//!
//! Read helpers take any SQLite executor so they run on the pool or inside an
//! open transaction. Mutations open a write transaction and commit only after
//! every check has passed; an early return drops it and rolls back.

use crate::error::AppError;
use crate::models::{
    CreatedRestaurantPizza, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetail,
    RestaurantPizza, RestaurantPizzaEntry, RestaurantPizzaJoinRow,
};
use crate::service::validation::{field, validate_id, validate_price, RequestValidator};
use crate::store::begin_write;
use serde_json::Value;
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct CrudService;

impl CrudService {
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_restaurant<'e, E>(conn: E, id: i64) -> Result<Option<Restaurant>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        tracing::debug!(id, "select restaurant");
        let row = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(row)
    }

    /// Associations of one restaurant, each joined with its pizza, in id order.
    pub async fn restaurant_pizzas_for<'e, E>(
        conn: E,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantPizzaEntry>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, RestaurantPizzaJoinRow>(
            r#"
            SELECT rp.id, rp.pizza_id, rp.restaurant_id, rp.price,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(conn)
        .await?;
        Ok(rows.into_iter().map(RestaurantPizzaEntry::from).collect())
    }

    /// Restaurant with its associations, read in one transaction so both
    /// queries see the same state.
    pub async fn restaurant_detail(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<RestaurantDetail, AppError> {
        let mut tx = pool.begin().await?;
        let restaurant = Self::find_restaurant(&mut *tx, id)
            .await?
            .ok_or(AppError::NotFound("Restaurant"))?;
        let entries = Self::restaurant_pizzas_for(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(RestaurantDetail::new(restaurant, entries))
    }

    /// Deletes the restaurant's associations, then the restaurant.
    /// Returns the number of associations removed.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let mut tx = begin_write(pool).await?;
        if Self::find_restaurant(&mut *tx, id).await?.is_none() {
            return Err(AppError::NotFound("Restaurant"));
        }
        let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, associations = removed, "restaurant deleted");
        Ok(removed)
    }

    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_pizza<'e, E>(conn: E, id: i64) -> Result<Option<Pizza>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        tracing::debug!(id, "select pizza");
        let row = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(row)
    }

    /// Validates a raw JSON payload and inserts the association.
    ///
    /// Every check runs, including the existence lookups, before anything is
    /// written. Any failure yields `AppError::Validation` with all reasons.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        body: &Value,
    ) -> Result<CreatedRestaurantPizza, AppError> {
        let mut validator = RequestValidator::new();
        let price = validator.check(validate_price(field(body, "price")));
        let pizza_id = validator.check(validate_id("pizza_id", field(body, "pizza_id")));
        let restaurant_id =
            validator.check(validate_id("restaurant_id", field(body, "restaurant_id")));

        let mut tx = begin_write(pool).await?;

        let pizza = match pizza_id {
            Some(id) => {
                let found = Self::find_pizza(&mut *tx, id).await?;
                if found.is_none() {
                    validator.reject(format!("pizza {} does not exist", id));
                }
                found
            }
            None => None,
        };
        let restaurant = match restaurant_id {
            Some(id) => {
                let found = Self::find_restaurant(&mut *tx, id).await?;
                if found.is_none() {
                    validator.reject(format!("restaurant {} does not exist", id));
                }
                found
            }
            None => None,
        };

        let (price, pizza, restaurant) = match (price, pizza, restaurant) {
            (Some(price), Some(pizza), Some(restaurant)) if validator.is_valid() => {
                (price, pizza, restaurant)
            }
            _ => return Err(validator.into_error()),
        };

        let new = NewRestaurantPizza {
            price,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        };
        let row = Self::insert_restaurant_pizza(&mut *tx, new).await?;
        tx.commit().await?;
        tracing::info!(
            id = row.id,
            pizza_id = row.pizza_id,
            restaurant_id = row.restaurant_id,
            price = row.price,
            "restaurant_pizza created"
        );
        Ok(CreatedRestaurantPizza::new(row, pizza, restaurant))
    }

    pub async fn insert_restaurant<'e, E>(
        conn: E,
        name: &str,
        address: &str,
    ) -> Result<Restaurant, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(name)
        .bind(address)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    pub async fn insert_pizza<'e, E>(
        conn: E,
        name: &str,
        ingredients: &str,
    ) -> Result<Pizza, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(name)
        .bind(ingredients)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    /// Raw insert with no existence checks; callers validate first.
    pub async fn insert_restaurant_pizza<'e, E>(
        conn: E,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizza, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (restaurant_id, pizza_id, price)
            VALUES (?, ?, ?)
            RETURNING id, restaurant_id, pizza_id, price
            "#,
        )
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .bind(new.price)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    pub async fn count_restaurant_pizzas(pool: &SqlitePool) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
