use rust_decimal::Decimal;

use crate::catalog::domain::model::{
    enums::catalog_domain_error::CatalogDomainError,
    value_objects::{
        departament_id::DepartamentId, product_id::ProductId, product_price::ProductPrice,
        product_title::ProductTitle, short_description::ShortDescription,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateProductCommand {
    product_id: ProductId,
    title: ProductTitle,
    short_description: ShortDescription,
    price: ProductPrice,
    quantity: i32,
    departament_id: DepartamentId,
}

impl UpdateProductCommand {
    pub fn new(
        product_id: i32,
        title: String,
        short_description: String,
        price: Decimal,
        quantity: i32,
        departament_id: i32,
    ) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            product_id: ProductId::new(product_id),
            title: ProductTitle::new(title)?,
            short_description: ShortDescription::new(short_description)?,
            price: ProductPrice::new(price)?,
            quantity,
            departament_id: DepartamentId::new(departament_id)?,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn title(&self) -> &ProductTitle {
        &self.title
    }

    pub fn short_description(&self) -> &ShortDescription {
        &self.short_description
    }

    pub fn price(&self) -> ProductPrice {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn departament_id(&self) -> DepartamentId {
        self.departament_id
    }
}
