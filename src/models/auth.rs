// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// O perfil define o escopo de visão: a Central (admin) enxerga todas as
// filiais; o operador de filial enxerga apenas a sua.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    BranchOperator,
}

// Representa um usuário do conjunto de dados em memória
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: UserRole,
    // Operadores sempre têm filial; o admin da Central não tem
    pub branch_id: Option<Uuid>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// Uma unidade física que consome/solicita suprimentos à Central
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: Uuid,
    #[schema(example = "Filial Belém")]
    pub name: String,
    #[schema(example = "FIL-01")]
    pub code: String,
    pub address: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

// Homologação: produto pré-aprovado para os pedidos de uma filial
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchAuthorization {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub product_id: Uuid,
    pub authorized: bool,
    pub authorized_by: Uuid,
    pub authorized_at: DateTime<Utc>,
}
