// src/services/order_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        orders::{DirectShipment, Order, OrderCreated, OrderStatus, OrdersSummary, ShipmentStatus},
    },
    services::visibility_scope,
    store::{
        audit::AuditStore,
        catalog::ProductStore,
        inventory::InventoryStore,
        orders::{OrderStore, ShipmentStore},
        org::OrgStore,
    },
};

// Núcleo do rastreador de pedidos e envios: pedidos de reposição das
// filiais (pendente -> aprovado|rejeitado) e envios diretos da Central.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderStore,
    shipments: ShipmentStore,
    products: ProductStore,
    inventory: InventoryStore,
    org: OrgStore,
    audit: AuditStore,
}

impl OrderService {
    pub fn new(
        orders: OrderStore,
        shipments: ShipmentStore,
        products: ProductStore,
        inventory: InventoryStore,
        org: OrgStore,
        audit: AuditStore,
    ) -> Self {
        Self {
            orders,
            shipments,
            products,
            inventory,
            org,
            audit,
        }
    }

    // --- PEDIDOS ---

    // Cria um pedido de reposição para a filial do solicitante, sempre
    // `pendente`. Item não homologado exige justificativa; quando ela
    // existe o pedido é criado mesmo assim (aviso não bloqueante vira a
    // flag `homologated` da resposta).
    pub async fn create_order(
        &self,
        user: &User,
        product_id: Uuid,
        quantity: Decimal,
        justification: Option<String>,
    ) -> Result<OrderCreated, AppError> {
        let branch_id = user.branch_id.ok_or(AppError::BranchOnly)?;

        let product = self
            .products
            .find(product_id)
            .await
            .ok_or_else(|| AppError::ResourceNotFound(format!("Produto {product_id}")))?;

        let homologated = self.org.is_authorized(branch_id, product_id).await;
        let justification = justification.filter(|j| !j.trim().is_empty());
        if !homologated && justification.is_none() {
            return Err(AppError::JustificationRequired);
        }

        let order = Order {
            id: Uuid::new_v4(),
            branch_id,
            product_id,
            quantity,
            requested_by: user.id,
            status: OrderStatus::Pendente,
            justification,
            created_at: Utc::now(),
            approved_by: None,
            approved_at: None,
        };
        self.orders.prepend(order.clone()).await;

        self.audit
            .record(
                "order.created",
                "order",
                order.id,
                user,
                Some(branch_id),
                json!({ "product": product.name, "quantity": quantity, "homologated": homologated }),
            )
            .await;

        Ok(OrderCreated { order, homologated })
    }

    // Aprova um pedido `pendente`, carimbando aprovador e horário.
    // Qualquer outro status é um erro de transição (no dashboard original
    // o comportamento era indefinido; aqui é explícito).
    pub async fn approve_order(&self, admin: &User, order_id: Uuid) -> Result<Order, AppError> {
        let approved = self
            .orders
            .update(order_id, |order| {
                if order.status != OrderStatus::Pendente {
                    return Err(AppError::InvalidStatusTransition(order.status));
                }
                order.status = OrderStatus::Aprovado;
                order.approved_by = Some(admin.id);
                order.approved_at = Some(Utc::now());
                Ok(())
            })
            .await?;

        self.audit
            .record(
                "order.approved",
                "order",
                approved.id,
                admin,
                Some(approved.branch_id),
                json!({ "product_id": approved.product_id }),
            )
            .await;

        Ok(approved)
    }

    // Rejeita um pedido `pendente`; o motivo fica no campo de
    // justificativa, como a tela exibe.
    pub async fn reject_order(
        &self,
        admin: &User,
        order_id: Uuid,
        reason: String,
    ) -> Result<Order, AppError> {
        let rejected = self
            .orders
            .update(order_id, |order| {
                if order.status != OrderStatus::Pendente {
                    return Err(AppError::InvalidStatusTransition(order.status));
                }
                order.status = OrderStatus::Rejeitado;
                order.justification = Some(reason.clone());
                Ok(())
            })
            .await?;

        self.audit
            .record(
                "order.rejected",
                "order",
                rejected.id,
                admin,
                Some(rejected.branch_id),
                json!({ "reason": reason }),
            )
            .await;

        Ok(rejected)
    }

    pub async fn list_orders(&self, user: &User) -> Result<Vec<Order>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.orders.list(scope).await)
    }

    // --- ENVIOS DIRETOS ---

    // Estoque empurrado pela Central sem pedido prévio. Produto sem saldo
    // registrado na Central exige a confirmação explícita do operador.
    // Não há baixa de estoque da Central (checagem apenas informativa).
    pub async fn create_shipment(
        &self,
        admin: &User,
        branch_id: Uuid,
        product_id: Uuid,
        quantity: Decimal,
        notes: Option<String>,
        confirm_without_stock: bool,
    ) -> Result<DirectShipment, AppError> {
        let branch = self
            .org
            .find_branch(branch_id)
            .await
            .ok_or_else(|| AppError::ResourceNotFound(format!("Filial {branch_id}")))?;
        if !branch.active {
            return Err(AppError::InactiveBranch(branch.name));
        }

        let product = self
            .products
            .find(product_id)
            .await
            .ok_or_else(|| AppError::ResourceNotFound(format!("Produto {product_id}")))?;

        let in_central = self.inventory.central_entry(product_id).await.is_some();
        if !in_central && !confirm_without_stock {
            return Err(AppError::StockNotRegistered(product.name));
        }

        let shipment = DirectShipment {
            id: Uuid::new_v4(),
            branch_id,
            product_id,
            quantity,
            sent_by: admin.id,
            status: ShipmentStatus::EmTransito,
            sent_at: Utc::now(),
            notes: notes.filter(|n| !n.trim().is_empty()),
            received_at: None,
        };
        self.shipments.prepend(shipment.clone()).await;

        self.audit
            .record(
                "shipment.created",
                "shipment",
                shipment.id,
                admin,
                Some(branch_id),
                json!({ "product": product.name, "quantity": quantity, "inCentralStock": in_central }),
            )
            .await;

        Ok(shipment)
    }

    pub async fn list_shipments(&self, user: &User) -> Result<Vec<DirectShipment>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.shipments.list(scope).await)
    }

    // Cartões de resumo: contagens derivadas sobre o conjunto visível
    pub async fn summary(&self, user: &User) -> Result<OrdersSummary, AppError> {
        let scope = visibility_scope(user)?;
        let orders = self.orders.list(scope).await;
        let shipments = self.shipments.list(scope).await;

        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        Ok(OrdersSummary {
            pending: count(OrderStatus::Pendente),
            approved: count(OrderStatus::Aprovado),
            rejected: count(OrderStatus::Rejeitado),
            shipments: shipments.len(),
            in_transit: shipments
                .iter()
                .filter(|s| s.status == ShipmentStatus::EmTransito)
                .count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{
        ADMIN_USER_ID, ARROZ_PRODUCT_ID, BELEM_BRANCH_ID, BELEM_OPERATOR_ID, MARABA_BRANCH_ID,
        PILHA_PRODUCT_ID, SANTAREM_BRANCH_ID, mock_data,
    };

    fn service_from_seed() -> (OrderService, crate::models::auth::User, crate::models::auth::User)
    {
        let data = mock_data();
        let admin = data
            .users
            .iter()
            .find(|u| u.id == ADMIN_USER_ID)
            .cloned()
            .unwrap();
        let operator = data
            .users
            .iter()
            .find(|u| u.id == BELEM_OPERATOR_ID)
            .cloned()
            .unwrap();

        let service = OrderService::new(
            OrderStore::new(data.orders),
            ShipmentStore::new(data.shipments),
            ProductStore::new(data.products),
            InventoryStore::new(data.inventory),
            OrgStore::new(data.users, data.branches, data.authorizations),
            AuditStore::new(Vec::new()),
        );
        (service, admin, operator)
    }

    #[tokio::test]
    async fn new_order_is_pending_and_listed_first() {
        let (service, _, operator) = service_from_seed();

        let created = service
            .create_order(&operator, ARROZ_PRODUCT_ID, Decimal::from(10), None)
            .await
            .unwrap();

        assert_eq!(created.order.status, OrderStatus::Pendente);
        assert!(created.homologated);
        assert!(created.order.approved_at.is_none());

        let listed = service.list_orders(&operator).await.unwrap();
        assert_eq!(listed.first().unwrap().id, created.order.id);
    }

    #[tokio::test]
    async fn approving_pending_order_stamps_approver_and_time() {
        let (service, admin, operator) = service_from_seed();
        let created = service
            .create_order(&operator, ARROZ_PRODUCT_ID, Decimal::from(10), None)
            .await
            .unwrap();

        let approved = service.approve_order(&admin, created.order.id).await.unwrap();

        assert_eq!(approved.status, OrderStatus::Aprovado);
        assert_eq!(approved.approved_by, Some(admin.id));
        assert!(approved.approved_at.is_some());
    }

    #[tokio::test]
    async fn approving_non_pending_order_is_rejected() {
        let (service, admin, operator) = service_from_seed();
        let created = service
            .create_order(&operator, ARROZ_PRODUCT_ID, Decimal::from(3), None)
            .await
            .unwrap();

        service.approve_order(&admin, created.order.id).await.unwrap();
        let err = service
            .approve_order(&admin, created.order.id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::InvalidStatusTransition(OrderStatus::Aprovado)
        ));
    }

    #[tokio::test]
    async fn rejecting_stores_reason() {
        let (service, admin, operator) = service_from_seed();
        let created = service
            .create_order(&operator, ARROZ_PRODUCT_ID, Decimal::from(3), None)
            .await
            .unwrap();

        let rejected = service
            .reject_order(&admin, created.order.id, "Sem saldo na Central".into())
            .await
            .unwrap();

        assert_eq!(rejected.status, OrderStatus::Rejeitado);
        assert_eq!(
            rejected.justification.as_deref(),
            Some("Sem saldo na Central")
        );
    }

    #[tokio::test]
    async fn unauthorized_product_requires_justification() {
        let (service, _, operator) = service_from_seed();

        let err = service
            .create_order(&operator, PILHA_PRODUCT_ID, Decimal::from(2), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::JustificationRequired));

        // Com justificativa o pedido é criado, sinalizando a falta de
        // homologação.
        let created = service
            .create_order(
                &operator,
                PILHA_PRODUCT_ID,
                Decimal::from(2),
                Some("Necessário para os rádios da lancha".into()),
            )
            .await
            .unwrap();
        assert!(!created.homologated);
        assert_eq!(created.order.status, OrderStatus::Pendente);
    }

    #[tokio::test]
    async fn branch_sees_only_its_orders_admin_sees_all() {
        let (service, admin, operator) = service_from_seed();

        let all = service.list_orders(&admin).await.unwrap();
        let belem = service.list_orders(&operator).await.unwrap();

        assert!(belem.iter().all(|o| o.branch_id == BELEM_BRANCH_ID));
        assert!(all.len() > belem.len());
    }

    #[tokio::test]
    async fn shipment_without_central_stock_needs_confirmation() {
        let (service, admin, _) = service_from_seed();

        // A pilha alcalina não tem saldo na Central
        let err = service
            .create_shipment(
                &admin,
                BELEM_BRANCH_ID,
                PILHA_PRODUCT_ID,
                Decimal::from(5),
                None,
                false,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StockNotRegistered(_)));

        let shipment = service
            .create_shipment(
                &admin,
                BELEM_BRANCH_ID,
                PILHA_PRODUCT_ID,
                Decimal::from(5),
                None,
                true,
            )
            .await
            .unwrap();
        assert_eq!(shipment.status, ShipmentStatus::EmTransito);
    }

    #[tokio::test]
    async fn shipment_never_deducts_central_stock() {
        let (service, admin, _) = service_from_seed();
        let before = service
            .inventory
            .central_entry(ARROZ_PRODUCT_ID)
            .await
            .unwrap();

        service
            .create_shipment(
                &admin,
                SANTAREM_BRANCH_ID,
                ARROZ_PRODUCT_ID,
                Decimal::from(40),
                Some("Envio urgente".into()),
                false,
            )
            .await
            .unwrap();

        let after = service
            .inventory
            .central_entry(ARROZ_PRODUCT_ID)
            .await
            .unwrap();
        assert_eq!(before.quantity, after.quantity);
    }

    #[tokio::test]
    async fn shipment_to_inactive_branch_fails() {
        let (service, admin, _) = service_from_seed();

        let err = service
            .create_shipment(
                &admin,
                MARABA_BRANCH_ID,
                ARROZ_PRODUCT_ID,
                Decimal::from(10),
                None,
                false,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InactiveBranch(_)));
    }

    #[tokio::test]
    async fn summary_counts_follow_transitions() {
        let (service, admin, operator) = service_from_seed();
        let baseline = service.summary(&admin).await.unwrap();

        let created = service
            .create_order(&operator, ARROZ_PRODUCT_ID, Decimal::from(1), None)
            .await
            .unwrap();
        let mid = service.summary(&admin).await.unwrap();
        assert_eq!(mid.pending, baseline.pending + 1);

        service.approve_order(&admin, created.order.id).await.unwrap();
        let after = service.summary(&admin).await.unwrap();
        assert_eq!(after.pending, baseline.pending);
        assert_eq!(after.approved, baseline.approved + 1);
    }
}
