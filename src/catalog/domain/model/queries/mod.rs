pub mod get_product_query;
pub mod list_products_query;
