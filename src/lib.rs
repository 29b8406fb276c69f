pub mod access_control;
pub mod catalog;
pub mod config;
