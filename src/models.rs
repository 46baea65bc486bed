//! Row structs and response shapes. Rows map one table each; responses nest them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free text, e.g. "Dough, Tomato Sauce, Cheese".
    pub ingredients: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct RestaurantPizza {
    pub id: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
    pub price: i64,
}

/// A validated association ready for insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Request body for `POST /restaurant_pizzas`. Documentation only: the handler
/// reads the raw JSON so that malformed bodies fail validation like any other.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct CreateRestaurantPizzaRequest {
    /// Whole number in 1..=30.
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Association as listed under a restaurant, with its pizza inlined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub price: i64,
    pub pizza: Pizza,
}

/// Flat join row behind [`RestaurantPizzaEntry`].
#[derive(sqlx::FromRow)]
pub(crate) struct RestaurantPizzaJoinRow {
    pub id: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub price: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

impl From<RestaurantPizzaJoinRow> for RestaurantPizzaEntry {
    fn from(row: RestaurantPizzaJoinRow) -> Self {
        RestaurantPizzaEntry {
            id: row.id,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            price: row.price,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaEntry>) -> Self {
        RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        }
    }
}

/// Response for a created association: both ends inlined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedRestaurantPizza {
    pub id: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub price: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

impl CreatedRestaurantPizza {
    pub fn new(row: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        CreatedRestaurantPizza {
            id: row.id,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            price: row.price,
            pizza,
            restaurant,
        }
    }
}
