use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::domain::model::entities::product::Product;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductResource {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub price: String,
    pub quantity: i32,
    pub departament_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl ProductResource {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id().value(),
            title: product.title().value().to_string(),
            short_description: product.short_description().value().to_string(),
            price: product.price().value().to_string(),
            quantity: product.quantity(),
            departament_id: product.departament_id().value(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}
