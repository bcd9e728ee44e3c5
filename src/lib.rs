pub mod actions;
pub mod client;
pub mod component;
pub mod config;
pub mod data_models;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod reducer;
pub mod render;
pub mod selectors;
pub mod store;
