pub mod auth;
pub mod booking;
pub mod catalog;
pub mod health;
pub mod quote;
pub mod space;
pub mod user;
pub mod v1;
