use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductFields};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

// Conversion from domain ProductFields to Sea-ORM ActiveModel for inserts;
// the id stays unset so the store assigns it
impl From<ProductFields> for ActiveModel {
    fn from(fields: ProductFields) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            description: Set(fields.description),
            price: Set(fields.price),
            quantity: Set(fields.quantity),
        }
    }
}
