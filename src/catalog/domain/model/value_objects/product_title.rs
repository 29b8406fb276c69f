use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductTitle(String);

impl ProductTitle {
    pub fn new(value: String) -> Result<Self, CatalogDomainError> {
        if value.trim().is_empty() {
            return Err(CatalogDomainError::InvalidTitle);
        }

        let length = value.chars().count();
        if !(3..=50).contains(&length) {
            return Err(CatalogDomainError::InvalidTitle);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
