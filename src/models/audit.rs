// src/models/audit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Trilha de auditoria das mutações (quem fez o quê, onde e quando)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Uuid,
    #[schema(example = "order.approved")]
    pub action: String,
    #[schema(example = "order")]
    pub entity: String,
    pub entity_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_cpf: String,
    pub branch_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
