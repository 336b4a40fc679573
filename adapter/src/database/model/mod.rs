pub mod booking;
pub mod catalog;
pub mod space;
pub mod user;
