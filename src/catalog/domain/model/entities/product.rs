use chrono::{DateTime, Utc};

use crate::catalog::domain::model::{
    commands::update_product_command::UpdateProductCommand,
    value_objects::{
        departament_id::DepartamentId, product_id::ProductId, product_price::ProductPrice,
        product_title::ProductTitle, short_description::ShortDescription,
    },
};

#[derive(Clone, Debug)]
pub struct Product {
    id: ProductId,
    title: ProductTitle,
    short_description: ShortDescription,
    price: ProductPrice,
    quantity: i32,
    departament_id: DepartamentId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn restore(
        id: ProductId,
        title: ProductTitle,
        short_description: ShortDescription,
        price: ProductPrice,
        quantity: i32,
        departament_id: DepartamentId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            short_description,
            price,
            quantity,
            departament_id,
            created_at,
            updated_at,
        }
    }

    pub fn apply_update(&mut self, command: &UpdateProductCommand, updated_at: DateTime<Utc>) {
        self.title = command.title().clone();
        self.short_description = command.short_description().clone();
        self.price = command.price();
        self.quantity = command.quantity();
        self.departament_id = command.departament_id();
        self.updated_at = updated_at;
    }

    pub fn id(&self) -> ProductId {
        self.id
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

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
