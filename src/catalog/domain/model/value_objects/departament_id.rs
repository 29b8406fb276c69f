use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DepartamentId(i32);

impl DepartamentId {
    pub fn new(value: i32) -> Result<Self, CatalogDomainError> {
        if value <= 0 {
            return Err(CatalogDomainError::InvalidDepartament);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
