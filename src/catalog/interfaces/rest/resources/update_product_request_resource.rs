use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateProductRequestResource {
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

pub fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_empty"));
    }

    Ok(())
}

pub fn greater_than_zero(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("greater_than"));
    }

    Ok(())
}
