use async_trait::async_trait;

use crate::access_control::domain::model::value_objects::current_user_id::CurrentUserId;
use crate::catalog::domain::model::{
    commands::{
        create_product_command::CreateProductCommand,
        update_product_command::UpdateProductCommand,
    },
    entities::product::Product,
    enums::catalog_domain_error::CatalogDomainError,
};

#[async_trait]
pub trait CatalogCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateProductCommand,
        actor: &CurrentUserId,
    ) -> Result<Product, CatalogDomainError>;

    async fn handle_update(
        &self,
        command: UpdateProductCommand,
        actor: &CurrentUserId,
    ) -> Result<Product, CatalogDomainError>;
}
