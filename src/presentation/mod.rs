pub mod components;
pub mod fetch;
pub mod pages;
pub mod table_model;
