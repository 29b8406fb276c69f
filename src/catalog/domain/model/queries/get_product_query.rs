use crate::catalog::domain::model::value_objects::product_id::ProductId;

#[derive(Clone, Debug)]
pub struct GetProductQuery {
    product_id: ProductId,
}

impl GetProductQuery {
    pub fn new(product_id: i32) -> Self {
        Self {
            product_id: ProductId::new(product_id),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }
}
