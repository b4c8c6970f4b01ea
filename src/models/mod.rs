pub mod response;
pub mod user;
pub mod user_model;
pub mod view;
