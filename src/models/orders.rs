// src/models/orders.rs

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

// As transições implementadas são apenas `pendente -> aprovado|rejeitado`.
// `enviado` e `recebido` fazem parte do contrato do tipo mas nenhuma
// operação os produz hoje (ver logística de expedição, ainda não migrada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pendente,
    Aprovado,
    Rejeitado,
    Enviado,
    Recebido,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pendente => "pendente",
            OrderStatus::Aprovado => "aprovado",
            OrderStatus::Rejeitado => "rejeitado",
            OrderStatus::Enviado => "enviado",
            OrderStatus::Recebido => "recebido",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    EmTransito,
    Recebido,
}

// --- Structs de Operação ---

// Pedido de reposição feito por uma filial à Central
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub product_id: Uuid,
    #[schema(example = "10.0")]
    pub quantity: Decimal,
    pub requested_by: Uuid,
    pub status: OrderStatus,
    // Obrigatória quando o produto não é homologado para a filial;
    // na rejeição guarda o motivo informado pela Central.
    pub justification: Option<String>,
    pub created_at: DateTime<Utc>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
}

// Envio direto: estoque empurrado pela Central sem pedido prévio da filial
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectShipment {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub product_id: Uuid,
    pub quantity: Decimal,
    pub sent_by: Uuid,
    pub status: ShipmentStatus,
    pub sent_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub received_at: Option<DateTime<Utc>>,
}

// Resposta da criação de pedido. `homologated = false` reproduz o aviso
// não bloqueante da tela de pedidos.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order: Order,
    pub homologated: bool,
}

// Cartões de resumo exibidos acima das tabelas de pedidos/envios
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdersSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub shipments: usize,
    pub in_transit: usize,
}
