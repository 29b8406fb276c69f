use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::catalog::{
    domain::model::{
        entities::product::Product,
        enums::catalog_domain_error::CatalogDomainError,
        value_objects::{
            departament_id::DepartamentId, product_id::ProductId, product_price::ProductPrice,
            product_title::ProductTitle, short_description::ShortDescription,
        },
    },
    infrastructure::persistence::repositories::product_repository::ProductRepository,
};

pub struct SqlxProductRepositoryImpl {
    pool: PgPool,
}

impl SqlxProductRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Product, CatalogDomainError> {
        let id: i32 = row.try_get("id").map_err(map_infra_error)?;
        let title_raw: String = row.try_get("title").map_err(map_infra_error)?;
        let short_description_raw: String =
            row.try_get("short_description").map_err(map_infra_error)?;
        let price_raw: Decimal = row.try_get("price").map_err(map_infra_error)?;
        let quantity: i32 = row.try_get("quantity").map_err(map_infra_error)?;
        let departament_id_raw: i32 = row.try_get("departament_id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        Ok(Product::restore(
            ProductId::new(id),
            ProductTitle::new(title_raw)?,
            ShortDescription::new(short_description_raw)?,
            ProductPrice::new(price_raw)?,
            quantity,
            DepartamentId::new(departament_id_raw)?,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepositoryImpl {
    async fn insert(
        &self,
        title: &ProductTitle,
        short_description: &ShortDescription,
        price: ProductPrice,
        quantity: i32,
        departament_id: DepartamentId,
    ) -> Result<Product, CatalogDomainError> {
        let statement = r#"
            INSERT INTO products (title, short_description, price, quantity, departament_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, short_description, price, quantity, departament_id, created_at, updated_at
        "#;

        let row = sqlx::query(statement)
            .bind(title.value())
            .bind(short_description.value())
            .bind(price.value())
            .bind(quantity)
            .bind(departament_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Self::row_to_entity(row)
    }

    async fn update(&self, product: &Product) -> Result<(), CatalogDomainError> {
        let statement = r#"
            UPDATE products
            SET title = $2,
                short_description = $3,
                price = $4,
                quantity = $5,
                departament_id = $6,
                updated_at = $7
            WHERE id = $1
        "#;

        let result = sqlx::query(statement)
            .bind(product.id().value())
            .bind(product.title().value())
            .bind(product.short_description().value())
            .bind(product.price().value())
            .bind(product.quantity())
            .bind(product.departament_id().value())
            .bind(product.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogDomainError::ProductNotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogDomainError> {
        let statement = r#"
            SELECT id, title, short_description, price, quantity, departament_id, created_at, updated_at
            FROM products
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list(
        &self,
        departament_id: Option<DepartamentId>,
    ) -> Result<Vec<Product>, CatalogDomainError> {
        let rows = match departament_id {
            Some(departament_id) => {
                let statement = r#"
                    SELECT id, title, short_description, price, quantity, departament_id, created_at, updated_at
                    FROM products
                    WHERE departament_id = $1
                    ORDER BY id
                "#;

                sqlx::query(statement)
                    .bind(departament_id.value())
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_infra_error)?
            }
            None => {
                let statement = r#"
                    SELECT id, title, short_description, price, quantity, departament_id, created_at, updated_at
                    FROM products
                    ORDER BY id
                "#;

                sqlx::query(statement)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_infra_error)?
            }
        };

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> CatalogDomainError {
    CatalogDomainError::InfrastructureError(error.to_string())
}
