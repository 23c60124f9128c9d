use crate::handlers::{create_item, list_items, read_item, update_item};
use axum::{routing::get, Router};

/// Create item routes
pub fn create_item_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::<S>::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items", get(list_items).post(create_item))
        .route("/items/:item_id", get(read_item).put(update_item))
}
