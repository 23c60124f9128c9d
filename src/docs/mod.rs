use utoipa::OpenApi;
use crate::models::*;

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Read an item by id
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(ItemPath),
    responses(
        (status = 200, description = "Item id echoed back", body = ItemIdResponse),
        (status = 422, description = "Item id is not an integer", body = ErrorResponse)
    ),
    tag = "items"
)]
#[allow(dead_code)]
pub async fn read_item_doc() {}

/// List items
#[utoipa::path(
    get,
    path = "/items/",
    params(
        ("q" = Option<Vec<String>>, Query, description = "Repeatable; defaults to [\"default\", \"list\"]")
    ),
    responses(
        (status = 200, description = "Collected query values", body = ItemListResponse)
    ),
    tag = "items"
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Create an item
#[utoipa::path(
    post,
    path = "/items/",
    request_body = Item,
    responses(
        (status = 200, description = "Item echoed back", body = Item),
        (status = 422, description = "Invalid item", body = ErrorResponse)
    ),
    tag = "items"
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Update an item
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    params(ItemPath, UpdateItemQuery),
    request_body = Item,
    responses(
        (status = 200, description = "Item id merged with the item fields", body = UpdateItemResponse),
        (status = 422, description = "Invalid item id or item", body = ErrorResponse)
    ),
    tag = "items"
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        read_item_doc,
        list_items_doc,
        create_item_doc,
        update_item_doc,
    ),
    components(
        schemas(MessageResponse, Item, ItemIdResponse, ItemListResponse, UpdateItemResponse, ErrorResponse, FieldError)
    ),
    tags(
        (name = "items", description = "Item endpoints")
    )
)]
pub struct ApiDoc;
