pub mod auth;
pub mod health;
pub mod images;
pub mod models;
pub mod submissions;
