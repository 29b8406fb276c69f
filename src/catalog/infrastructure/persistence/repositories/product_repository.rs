use async_trait::async_trait;

use crate::catalog::domain::model::{
    entities::product::Product,
    enums::catalog_domain_error::CatalogDomainError,
    value_objects::{
        departament_id::DepartamentId, product_id::ProductId, product_price::ProductPrice,
        product_title::ProductTitle, short_description::ShortDescription,
    },
};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(
        &self,
        title: &ProductTitle,
        short_description: &ShortDescription,
        price: ProductPrice,
        quantity: i32,
        departament_id: DepartamentId,
    ) -> Result<Product, CatalogDomainError>;

    async fn update(&self, product: &Product) -> Result<(), CatalogDomainError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogDomainError>;

    async fn list(
        &self,
        departament_id: Option<DepartamentId>,
    ) -> Result<Vec<Product>, CatalogDomainError>;
}
