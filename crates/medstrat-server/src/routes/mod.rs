pub mod brand;
pub mod catalog;
pub mod health;
pub mod sessions;
