//! Sample data: three restaurants, three pizzas, one priced pizza per restaurant.

use crate::error::AppError;
use crate::models::NewRestaurantPizza;
use crate::service::CrudService;
use crate::store::begin_write;
use sqlx::SqlitePool;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Price for the pizza at the same index, offered by the restaurant at the same index.
const PRICES: [i64; 3] = [1, 4, 5];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Wipe all three tables and insert the sample rows, in one transaction.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    let mut tx = begin_write(pool).await?;

    tracing::info!("deleting data");
    for table in ["restaurant_pizzas", "pizzas", "restaurants"] {
        sqlx::query(&format!("DELETE FROM {}", table)).execute(&mut *tx).await?;
    }

    tracing::info!("creating restaurants");
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(CrudService::insert_restaurant(&mut *tx, name, address).await?);
    }

    tracing::info!("creating pizzas");
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(CrudService::insert_pizza(&mut *tx, name, ingredients).await?);
    }

    tracing::info!("creating restaurant_pizzas");
    let mut summary = SeedSummary {
        restaurants: restaurants.len(),
        pizzas: pizzas.len(),
        restaurant_pizzas: 0,
    };
    for ((restaurant, pizza), price) in restaurants.iter().zip(&pizzas).zip(PRICES) {
        let new = NewRestaurantPizza {
            price,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        };
        CrudService::insert_restaurant_pizza(&mut *tx, new).await?;
        summary.restaurant_pizzas += 1;
    }

    tx.commit().await?;
    tracing::info!(?summary, "seeding done");
    Ok(summary)
}
