pub mod audit;
pub mod auth;
pub mod catalog;
pub mod consumption;
pub mod fleet;
pub mod inventory;
pub mod orders;
pub mod purchases;
