pub mod departament_id;
pub mod product_id;
pub mod product_price;
pub mod product_title;
pub mod short_description;
