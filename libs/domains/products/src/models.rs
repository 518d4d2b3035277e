use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A product as stored and served.
///
/// Only `id` is guaranteed; the store accepts rows with any of the other
/// fields absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

/// Request body for creating and updating products.
///
/// Carries an optional `id` so create requests that wrongly set one can be
/// rejected; the field is never written to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl ProductInput {
    /// Strip the id, keeping only the mutable fields.
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// The mutable fields of a product, as written by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    Name,
    Price,
}

/// Query parameters for the stock check endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct StockQuery {
    /// Threshold the stocked quantity must exceed; when absent the
    /// comparison matches nothing, like a SQL comparison against null
    pub count: Option<i32>,
}
