// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

use crate::models::orders::OrderStatus;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// No original, todos estes casos viravam `alert()` bloqueante no navegador;
// aqui cada um tem um status HTTP e uma mensagem estável.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário não identificado")]
    UnknownUser,

    #[error("Operação restrita à Central")]
    AdminOnly,

    #[error("Operação disponível apenas para operadores de filial")]
    BranchOnly,

    #[error("{0} não encontrado(a)")]
    ResourceNotFound(String),

    #[error("Filial inativa: {0}")]
    InactiveBranch(String),

    // Pedido fora de `pendente` não aceita aprovação/rejeição
    #[error("Pedido não está pendente (status atual: {0})")]
    InvalidStatusTransition(OrderStatus),

    // Envio de produto sem saldo registrado na Central exige confirmação
    #[error("Produto sem estoque registrado na Central: {0}")]
    StockNotRegistered(String),

    #[error("Item não homologado para a filial: justificativa obrigatória")]
    JustificationRequired,

    #[error("Estoque insuficiente (disponível: {available})")]
    InsufficientStock { available: Decimal },

    // Odômetro/horímetro informado menor que o acumulado do veículo
    #[error("Leitura do medidor menor que a registrada ({registered})")]
    MeterRegression { registered: String },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::UnknownUser => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::AdminOnly | AppError::BranchOnly => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::ResourceNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidStatusTransition(_) | AppError::StockNotRegistered(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::InactiveBranch(_)
            | AppError::JustificationRequired
            | AppError::InsufficientStock { .. }
            | AppError::MeterRegression { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }

            // Erros inesperados viram 500; o `tracing` loga a mensagem
            // detalhada que o `thiserror` nos deu.
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
