use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortDescription(String);

impl ShortDescription {
    pub fn new(value: String) -> Result<Self, CatalogDomainError> {
        if value.trim().is_empty() {
            return Err(CatalogDomainError::InvalidShortDescription);
        }

        let length = value.chars().count();
        if !(3..=100).contains(&length) {
            return Err(CatalogDomainError::InvalidShortDescription);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
