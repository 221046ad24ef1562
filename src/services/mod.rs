// src/services/mod.rs

pub mod catalog_service;
pub mod consumption_service;
pub mod fleet_service;
pub mod inventory_service;
pub mod order_service;
pub mod purchase_service;

use uuid::Uuid;

use crate::{common::error::AppError, models::auth::User};

// Escopo de visão das listagens: a Central enxerga tudo (None), o
// operador enxerga apenas a própria filial.
pub(crate) fn visibility_scope(user: &User) -> Result<Option<Uuid>, AppError> {
    if user.is_admin() {
        Ok(None)
    } else {
        user.branch_id.map(Some).ok_or(AppError::BranchOnly)
    }
}
