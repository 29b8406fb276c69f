pub mod create_product_command;
pub mod update_product_command;
