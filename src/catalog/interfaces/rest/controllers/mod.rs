pub mod catalog_rest_controller;
