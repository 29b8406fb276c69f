use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::catalog::interfaces::rest::resources::update_product_request_resource::{
    greater_than_zero, not_empty,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProductRequestResource {
    #[validate(
        custom(function = "not_empty", message = "title must not be empty"),
        length(min = 3, max = 50, message = "title length must be between 3 and 50")
    )]
    pub title: String,

    #[validate(
        custom(function = "not_empty", message = "short description must not be empty"),
        length(
            min = 3,
            max = 100,
            message = "short description length must be between 3 and 100"
        )
    )]
    pub short_description: String,

    #[schema(value_type = f64)]
    #[validate(custom(function = "greater_than_zero", message = "price must be greater than 0"))]
    pub price: Decimal,

    pub quantity: i32,

    #[validate(range(
        min = 1,
        code = "greater_than",
        message = "departament id must be greater than 0"
    ))]
    pub departament_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListProductsQueryResource {
    pub departament_id: Option<i32>,
}
