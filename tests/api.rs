// tests/api.rs
//
// Testes de ponta a ponta: a pilha inteira (router, middleware de
// identidade, handlers e services) exercitada via `tower::oneshot`,
// sempre sobre a massa de dados semeada.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use suprimentos_backend::{
    app,
    config::AppState,
    store::seed::{
        ADMIN_USER_ID, BELEM_BRANCH_ID, BELEM_OPERATOR_ID, DIPIRONA_PRODUCT_ID,
        PILHA_PRODUCT_ID, SANTAREM_OPERATOR_ID,
    },
};

fn test_app() -> Router {
    app(AppState::new())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user {
        builder = builder.header("x-user-id", user_id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, json)
}

#[tokio::test]
async fn health_check_is_public() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_or_unknown_user_is_unauthorized() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/orders", Some(Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn order_lifecycle_create_then_approve() {
    let app = test_app();

    // Operador de Belém pede um item homologado
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": DIPIRONA_PRODUCT_ID, "quantity": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["status"], "pendente");
    assert_eq!(body["homologated"], true);
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    // A Central aprova
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/approve"),
        Some(ADMIN_USER_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "aprovado");
    assert!(body["approvedAt"].is_string());

    // Aprovar de novo não é permitido
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/approve"),
        Some(ADMIN_USER_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn operator_cannot_approve_orders() {
    let app = test_app();

    let (_, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": DIPIRONA_PRODUCT_ID, "quantity": 5.0 })),
    )
    .await;
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/approve"),
        Some(BELEM_OPERATOR_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unhomologated_item_requires_justification() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": PILHA_PRODUCT_ID, "quantity": 2.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({
            "productId": PILHA_PRODUCT_ID,
            "quantity": 2.0,
            "justification": "Reposição dos controles do almoxarifado"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["homologated"], false);
}

#[tokio::test]
async fn operators_only_see_their_own_orders() {
    let app = test_app();

    let (_, belem) = send(&app, "GET", "/api/orders", Some(BELEM_OPERATOR_ID), None).await;
    let (_, santarem) = send(&app, "GET", "/api/orders", Some(SANTAREM_OPERATOR_ID), None).await;
    let (_, central) = send(&app, "GET", "/api/orders", Some(ADMIN_USER_ID), None).await;

    let belem = belem.as_array().unwrap();
    let santarem = santarem.as_array().unwrap();
    let central = central.as_array().unwrap();

    let belem_branch = json!(BELEM_BRANCH_ID);
    assert!(!belem.is_empty());
    assert!(belem.iter().all(|o| o["branchId"] == belem_branch));
    assert!(santarem.iter().all(|o| o["branchId"] != belem_branch));
    assert_eq!(central.len(), belem.len() + santarem.len());
}

#[tokio::test]
async fn shipment_without_central_stock_needs_confirmation() {
    let app = test_app();

    let (_, branches) = send(&app, "GET", "/api/branches", Some(ADMIN_USER_ID), None).await;
    let branch_id = branches[0]["id"].as_str().unwrap().to_string();

    // Pilha não tem saldo na Central
    let payload = json!({
        "branchId": branch_id,
        "productId": PILHA_PRODUCT_ID,
        "quantity": 4.0
    });
    let (status, _) = send(
        &app,
        "POST",
        "/api/shipments",
        Some(ADMIN_USER_ID),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let mut confirmed = payload;
    confirmed["confirmWithoutStock"] = json!(true);
    let (status, body) = send(
        &app,
        "POST",
        "/api/shipments",
        Some(ADMIN_USER_ID),
        Some(confirmed),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "em_transito");
}

#[tokio::test]
async fn orders_summary_tracks_new_orders() {
    let app = test_app();

    let (_, before) = send(&app, "GET", "/api/orders/summary", Some(ADMIN_USER_ID), None).await;
    let pending_before = before["pending"].as_u64().unwrap();

    send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": DIPIRONA_PRODUCT_ID, "quantity": 1.0 })),
    )
    .await;

    let (_, after) = send(&app, "GET", "/api/orders/summary", Some(ADMIN_USER_ID), None).await;
    assert_eq!(after["pending"].as_u64().unwrap(), pending_before + 1);
}

#[tokio::test]
async fn audit_trail_is_admin_only_and_records_actions() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": DIPIRONA_PRODUCT_ID, "quantity": 3.0 })),
    )
    .await;

    let (status, _) = send(&app, "GET", "/api/audit", Some(BELEM_OPERATOR_ID), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, entries) = send(&app, "GET", "/api/audit", Some(ADMIN_USER_ID), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries[0]["action"], "order.created");
}

#[tokio::test]
async fn barcode_lookup_reports_missing_products() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "GET",
        "/api/catalog/barcode/0000000000000",
        Some(ADMIN_USER_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert!(body["product"].is_null());
}

#[tokio::test]
async fn validation_errors_return_details() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(BELEM_OPERATOR_ID),
        Some(json!({ "productId": DIPIRONA_PRODUCT_ID, "quantity": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["quantity"].is_array());
}
