pub mod api;
pub mod api_model;
pub mod config;
pub mod error;
pub mod model;
pub mod story;
pub mod terminal;
