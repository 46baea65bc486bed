use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pizzeria_api::models::{Pizza, Restaurant};
use pizzeria_api::{app, apply_migrations, connect, AppState, CrudService};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::task::JoinSet;
use tower::util::ServiceExt; // for `oneshot`

const BODY_LIMIT: usize = 64 * 1024;
const WRITERS: usize = 40;

// File-backed database shared by several pooled connections. The TempDir
// must outlive the pool.
async fn setup() -> (Router, SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("pizzeria.db").display());
    let pool = connect(&url, 5).await.expect("Failed to open DB");
    apply_migrations(&pool).await.expect("Failed to apply schema");
    let router = app(AppState::new(pool.clone()), BODY_LIMIT);
    (router, pool, dir)
}

async fn post_association(app: Router, payload: Value) -> StatusCode {
    let req = Request::builder()
        .method("POST")
        .uri("/restaurant_pizzas")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    app.oneshot(req).await.unwrap().status()
}

async fn delete_restaurant(app: Router, id: i64) -> StatusCode {
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/restaurants/{}", id))
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap().status()
}

async fn associations_of(pool: &SqlitePool, restaurant: &Restaurant) -> usize {
    CrudService::restaurant_pizzas_for(pool, restaurant.id)
        .await
        .unwrap()
        .len()
}

fn payload(restaurant: &Restaurant, pizza: &Pizza, price: usize) -> Value {
    json!({"price": price % 30 + 1, "pizza_id": pizza.id, "restaurant_id": restaurant.id})
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_all_succeed() {
    let (app, pool, _dir) = setup().await;
    let restaurant = CrudService::insert_restaurant(&pool, "Shack", "addr").await.unwrap();
    let pizza = CrudService::insert_pizza(&pool, "Emma", "Dough").await.unwrap();

    let mut set = JoinSet::new();
    for i in 0..WRITERS {
        set.spawn(post_association(app.clone(), payload(&restaurant, &pizza, i)));
    }
    while let Some(status) = set.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::CREATED);
    }

    assert_eq!(CrudService::count_restaurant_pizzas(&pool).await.unwrap(), WRITERS as i64);
    assert_eq!(associations_of(&pool, &restaurant).await, WRITERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_delete_races_with_creates() {
    let (app, pool, _dir) = setup().await;
    let doomed = CrudService::insert_restaurant(&pool, "Doomed", "addr").await.unwrap();
    let kept = CrudService::insert_restaurant(&pool, "Kept", "addr").await.unwrap();
    let pizza = CrudService::insert_pizza(&pool, "Emma", "Dough").await.unwrap();

    let mut doomed_creates = JoinSet::new();
    let mut kept_creates = JoinSet::new();
    for i in 0..WRITERS {
        doomed_creates.spawn(post_association(app.clone(), payload(&doomed, &pizza, i)));
        kept_creates.spawn(post_association(app.clone(), payload(&kept, &pizza, i)));
        if i == WRITERS / 2 {
            let deleted = tokio::spawn(delete_restaurant(app.clone(), doomed.id));
            doomed_creates.spawn(async move { deleted.await.unwrap() });
        }
    }

    // Creates that lose the race see a missing restaurant, which is a 400
    let mut deletes = 0;
    while let Some(status) = doomed_creates.join_next().await {
        match status.unwrap() {
            StatusCode::NO_CONTENT => deletes += 1,
            status => assert!(
                status == StatusCode::CREATED || status == StatusCode::BAD_REQUEST,
                "unexpected status {}",
                status
            ),
        }
    }
    assert_eq!(deletes, 1);
    while let Some(status) = kept_creates.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::CREATED);
    }

    assert!(CrudService::find_restaurant(&pool, doomed.id).await.unwrap().is_none());
    assert_eq!(associations_of(&pool, &doomed).await, 0);
    assert_eq!(associations_of(&pool, &kept).await, WRITERS);
    assert_eq!(CrudService::count_restaurant_pizzas(&pool).await.unwrap(), WRITERS as i64);
}
