use async_trait::async_trait;

use crate::catalog::domain::model::{
    entities::product::Product,
    enums::catalog_domain_error::CatalogDomainError,
    queries::{get_product_query::GetProductQuery, list_products_query::ListProductsQuery},
};

#[async_trait]
pub trait CatalogQueryService: Send + Sync {
    async fn handle_get(&self, query: GetProductQuery) -> Result<Product, CatalogDomainError>;

    async fn handle_list(
        &self,
        query: ListProductsQuery,
    ) -> Result<Vec<Product>, CatalogDomainError>;
}
