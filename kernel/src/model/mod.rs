pub mod auth;
pub mod booking;
pub mod catalog;
pub mod id;
pub mod role;
pub mod slot;
pub mod space;
pub mod time;
pub mod user;
