pub mod availability;
pub mod model;
pub mod pricing;
pub mod repository;
