// src/store/org.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::auth::{Branch, BranchAuthorization, User};

// Dados organizacionais (usuários, filiais, homologações). São coleções
// de referência: nenhuma operação da API os altera.
#[derive(Clone)]
pub struct OrgStore {
    users: Arc<RwLock<Vec<User>>>,
    branches: Arc<RwLock<Vec<Branch>>>,
    authorizations: Arc<RwLock<Vec<BranchAuthorization>>>,
}

impl OrgStore {
    pub fn new(
        users: Vec<User>,
        branches: Vec<Branch>,
        authorizations: Vec<BranchAuthorization>,
    ) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            branches: Arc::new(RwLock::new(branches)),
            authorizations: Arc::new(RwLock::new(authorizations)),
        }
    }

    pub async fn find_user(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn find_branch(&self, id: Uuid) -> Option<Branch> {
        self.branches
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub async fn list_active_branches(&self) -> Vec<Branch> {
        self.branches
            .read()
            .await
            .iter()
            .filter(|b| b.active)
            .cloned()
            .collect()
    }

    // Homologação: o produto está pré-aprovado para pedidos desta filial?
    pub async fn is_authorized(&self, branch_id: Uuid, product_id: Uuid) -> bool {
        self.authorizations
            .read()
            .await
            .iter()
            .any(|a| a.branch_id == branch_id && a.product_id == product_id && a.authorized)
    }
}
