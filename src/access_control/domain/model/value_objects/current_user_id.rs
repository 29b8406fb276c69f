use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CurrentUserId(String);

impl CurrentUserId {
    pub fn new(value: String) -> Result<Self, AccessControlDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AccessControlDomainError::InvalidUserId);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_USER.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
