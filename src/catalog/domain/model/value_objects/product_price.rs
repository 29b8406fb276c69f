use rust_decimal::Decimal;

use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProductPrice(Decimal);

impl ProductPrice {
    pub fn new(value: Decimal) -> Result<Self, CatalogDomainError> {
        if value <= Decimal::ZERO {
            return Err(CatalogDomainError::InvalidPrice);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}
