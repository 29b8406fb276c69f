pub mod create_product_request_resource;
pub mod error_result_resource;
pub mod product_resource;
pub mod update_product_request_resource;
