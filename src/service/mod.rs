pub mod build_store;
pub mod catalog;
pub mod data_manager;
pub mod filter;
pub mod lookup;
pub mod schema;
pub mod settings;
