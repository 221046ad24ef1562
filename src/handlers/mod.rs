// src/handlers/mod.rs

pub mod audit;
pub mod auth;
pub mod catalog;
pub mod consumption;
pub mod fleet;
pub mod inventory;
pub mod orders;
pub mod purchases;

use rust_decimal::Decimal;
use validator::ValidationError;

// Validação compartilhada: quantidades e preços precisam ser positivos
pub(crate) fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}
