pub mod core;
pub mod mapping;
pub mod models;
pub mod stores;
pub mod services;
pub mod validation;
pub mod handlers;
