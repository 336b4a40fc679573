pub mod auth;
pub mod availability;
pub mod beo;
pub mod booking;
pub mod catalog;
pub mod quote;
pub mod slot;
pub mod space;
pub mod user;
