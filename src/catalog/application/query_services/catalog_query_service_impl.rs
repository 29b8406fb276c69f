use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    domain::{
        model::{
            entities::product::Product,
            enums::catalog_domain_error::CatalogDomainError,
            queries::{get_product_query::GetProductQuery, list_products_query::ListProductsQuery},
        },
        services::catalog_query_service::CatalogQueryService,
    },
    infrastructure::persistence::repositories::product_repository::ProductRepository,
};

pub struct CatalogQueryServiceImpl {
    product_repository: Arc<dyn ProductRepository>,
}

impl CatalogQueryServiceImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }
}

#[async_trait]
impl CatalogQueryService for CatalogQueryServiceImpl {
    async fn handle_get(&self, query: GetProductQuery) -> Result<Product, CatalogDomainError> {
        self.product_repository
            .find_by_id(query.product_id())
            .await?
            .ok_or(CatalogDomainError::ProductNotFound)
    }

    async fn handle_list(
        &self,
        query: ListProductsQuery,
    ) -> Result<Vec<Product>, CatalogDomainError> {
        self.product_repository.list(query.departament_id()).await
    }
}
