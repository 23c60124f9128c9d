use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::extract::FromJsonBody;
use crate::models::FieldError;

/// Item exchanged with the item routes. Never stored.
///
/// Request bodies are built through [`FromJsonBody`], not serde.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Item together with its tax-inclusive price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxedItem {
    #[serde(flatten)]
    pub item: Item,
    pub price_with_tax: f64,
}

impl Item {
    /// Derived mapping with `price_with_tax`, only when a tax is set.
    pub fn with_tax(&self) -> Option<TaxedItem> {
        self.tax.map(|tax| TaxedItem {
            item: self.clone(),
            price_with_tax: self.price + tax,
        })
    }
}

impl FromJsonBody for Item {
    fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(fields) = body.as_object() else {
            return Err(vec![FieldError::new(
                ["body"],
                "Input should be a valid dictionary or object to extract fields from",
                "model_type",
            )]);
        };

        let mut errors = Vec::new();
        let name = required_string(fields, "name", &mut errors);
        let description = optional_string(fields, "description", &mut errors);
        let price = required_number(fields, "price", &mut errors);
        let tax = optional_number(fields, "tax", &mut errors);

        match (name, description, price, tax) {
            (Some(name), Some(description), Some(price), Some(tax)) if errors.is_empty() => Ok(Item {
                name,
                description,
                price,
                tax,
            }),
            _ => Err(errors),
        }
    }
}

fn string_type(field: &str) -> FieldError {
    FieldError::new(["body", field], "Input should be a valid string", "string_type")
}

fn float_type(field: &str) -> FieldError {
    FieldError::new(["body", field], "Input should be a valid number", "float_type")
}

fn required_string(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match fields.get(field) {
        None => {
            errors.push(FieldError::missing(&["body", field]));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(string_type(field));
            None
        }
    }
}

fn required_number(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    match fields.get(field) {
        None => {
            errors.push(FieldError::missing(&["body", field]));
            None
        }
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                errors.push(float_type(field));
                None
            }
        },
    }
}

// The outer Option is `None` when the field failed validation.
fn optional_string(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            errors.push(string_type(field));
            None
        }
    }
}

fn optional_number(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<Option<f64>> {
    match fields.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(v) => match v.as_f64() {
            Some(n) => Some(Some(n)),
            None => {
                errors.push(float_type(field));
                None
            }
        },
    }
}

/// Path parameters of `/items/{item_id}`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ItemPath {
    /// Item identifier, a signed 64-bit integer
    pub item_id: i64,
}

/// Response for reading an item by id
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemIdResponse {
    pub item_id: i64,
}

/// Response for listing items
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemListResponse {
    pub q: Vec<String>,
}

/// Query parameters of `PUT /items/{item_id}`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateItemQuery {
    #[serde(rename = "queryParam1")]
    pub query_param1: Option<String>,
}

impl UpdateItemQuery {
    /// Build from raw query pairs. A repeated `queryParam1` keeps its last
    /// value; an empty value counts as not provided.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query_param1 = pairs
            .into_iter()
            .filter(|(key, _)| key == "queryParam1")
            .map(|(_, value)| value)
            .last()
            .filter(|value| !value.is_empty());
        Self { query_param1 }
    }
}

/// Response for updating an item: the id merged with every item field
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateItemResponse {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "queryParam1", skip_serializing_if = "Option::is_none")]
    pub query_param1: Option<String>,
}
