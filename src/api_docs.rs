//! OpenAPI document for the resource endpoints.

use crate::error::{ErrorBody, ValidationErrorBody};
use crate::handlers;
use crate::models::{
    CreateRestaurantPizzaRequest, CreatedRestaurantPizza, Pizza, Restaurant, RestaurantDetail,
    RestaurantPizzaEntry,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::pizza::list_pizzas,
        handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            Restaurant,
            Pizza,
            RestaurantDetail,
            RestaurantPizzaEntry,
            CreateRestaurantPizzaRequest,
            CreatedRestaurantPizza,
            ErrorBody,
            ValidationErrorBody
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurants and their menus"),
        (name = "pizzas", description = "Pizza catalogue"),
        (name = "restaurant_pizzas", description = "Priced restaurant/pizza associations")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and the prices linking them",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
