pub mod sqlx_product_repository_impl;
