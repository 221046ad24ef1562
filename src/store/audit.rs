// src/store/audit.rs

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{audit::AuditLog, auth::User};

// Trilha de auditoria em memória. Todas as mutações dos services passam
// por aqui.
#[derive(Clone)]
pub struct AuditStore {
    entries: Arc<RwLock<Vec<AuditLog>>>,
}

impl AuditStore {
    pub fn new(entries: Vec<AuditLog>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub async fn record(
        &self,
        action: &str,
        entity: &str,
        entity_id: Uuid,
        user: &User,
        branch_id: Option<Uuid>,
        details: serde_json::Value,
    ) {
        let entry = AuditLog {
            id: Uuid::new_v4(),
            action: action.to_string(),
            entity: entity.to_string(),
            entity_id,
            user_id: user.id,
            user_name: user.name.clone(),
            user_cpf: user.cpf.clone(),
            branch_id,
            details,
            timestamp: Utc::now(),
        };
        tracing::debug!(action, entity, %entity_id, "registro de auditoria");
        self.entries.write().await.insert(0, entry);
    }

    pub async fn list(&self) -> Vec<AuditLog> {
        self.entries.read().await.clone()
    }
}
