use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FieldViolationResource {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResultResource {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolationResource>,
}

impl ErrorResultResource {
    pub fn from_validation_errors(validation_errors: &ValidationErrors) -> Self {
        let mut errors: Vec<FieldViolationResource> = Vec::new();
        for (field, field_errors) in validation_errors.field_errors() {
            for error in field_errors {
                errors.push(FieldViolationResource {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                });
            }
        }
        errors.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then_with(|| left.code.cmp(&right.code))
        });

        Self {
            message: "validation failed".to_string(),
            errors,
        }
    }
}
