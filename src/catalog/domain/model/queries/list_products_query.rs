use crate::catalog::domain::model::{
    enums::catalog_domain_error::CatalogDomainError, value_objects::departament_id::DepartamentId,
};

#[derive(Clone, Debug)]
pub struct ListProductsQuery {
    departament_id: Option<DepartamentId>,
}

impl ListProductsQuery {
    pub fn new(departament_id: Option<i32>) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            departament_id: departament_id.map(DepartamentId::new).transpose()?,
        })
    }

    pub fn departament_id(&self) -> Option<DepartamentId> {
        self.departament_id
    }
}
