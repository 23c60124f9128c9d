use axum::{http::StatusCode, Json};
use tracing::debug;

use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::models::{Item, ItemIdResponse, ItemListResponse, ItemPath, UpdateItemQuery, UpdateItemResponse};

/// Values returned by the list endpoint when no `q` is given
pub const DEFAULT_QUERY: [&str; 2] = ["default", "list"];

/// Read an item by id
pub async fn read_item(ValidPath(path): ValidPath<ItemPath>) -> Json<ItemIdResponse> {
    debug!("Reading item {}", path.item_id);
    Json(ItemIdResponse { item_id: path.item_id })
}

/// List items, echoing every `q` value in request order
pub async fn list_items(ValidQuery(params): ValidQuery<Vec<(String, String)>>) -> Json<ItemListResponse> {
    let mut q: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .collect();
    if q.is_empty() {
        q = DEFAULT_QUERY.iter().map(|v| v.to_string()).collect();
    }
    debug!("Listing items for {} query value(s)", q.len());
    Json(ItemListResponse { q })
}

/// Create an item.
///
/// The tax-inclusive mapping is built but the caller gets the item exactly
/// as it was received.
pub async fn create_item(ValidJson(item): ValidJson<Item>) -> (StatusCode, Json<Item>) {
    if let Some(taxed) = item.with_tax() {
        debug!("Item '{}' priced {} with tax", taxed.item.name, taxed.price_with_tax);
    }
    (StatusCode::OK, Json(item))
}

/// Update an item, merging the id, the item fields and `queryParam1`
pub async fn update_item(
    ValidPath(path): ValidPath<ItemPath>,
    ValidQuery(params): ValidQuery<Vec<(String, String)>>,
    ValidJson(item): ValidJson<Item>,
) -> Json<UpdateItemResponse> {
    debug!("Updating item {}", path.item_id);
    let query = UpdateItemQuery::from_pairs(params);
    Json(UpdateItemResponse {
        item_id: path.item_id,
        item,
        query_param1: query.query_param1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tax: Option<f64>) -> Item {
        Item { name: "widget".into(), description: Some("blue".into()), price: 4.0, tax }
    }

    #[tokio::test]
    async fn read_echoes_id() {
        for id in [0, -3, i64::MAX] {
            let Json(body) = read_item(ValidPath(ItemPath { item_id: id })).await;
            assert_eq!(body.item_id, id);
        }
    }

    #[tokio::test]
    async fn list_defaults_when_no_q() {
        let Json(body) = list_items(ValidQuery(vec![("other".into(), "x".into())])).await;
        assert_eq!(body.q, vec!["default", "list"]);
    }

    #[tokio::test]
    async fn list_keeps_request_order() {
        let params = vec![
            ("q".to_string(), "foo".to_string()),
            ("skip".to_string(), "1".to_string()),
            ("q".to_string(), "bar".to_string()),
        ];
        let Json(body) = list_items(ValidQuery(params)).await;
        assert_eq!(body.q, vec!["foo", "bar"]);
    }

    #[tokio::test]
    async fn create_returns_item_without_tax_total() {
        let (status, Json(body)) = create_item(ValidJson(item(Some(1.0)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, item(Some(1.0)));
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("price_with_tax").is_none());
    }

    #[tokio::test]
    async fn update_drops_empty_query_param() {
        let Json(body) = update_item(
            ValidPath(ItemPath { item_id: 5 }),
            ValidQuery(vec![("queryParam1".to_string(), String::new())]),
            ValidJson(item(None)),
        )
        .await;
        assert_eq!(body.item_id, 5);
        assert!(body.query_param1.is_none());

        let Json(body) = update_item(
            ValidPath(ItemPath { item_id: 5 }),
            ValidQuery(vec![("queryParam1".to_string(), "foo".to_string())]),
            ValidJson(item(None)),
        )
        .await;
        assert_eq!(body.query_param1.as_deref(), Some("foo"));
    }
}
