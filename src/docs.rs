// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::me,
        handlers::auth::list_users,
        handlers::auth::list_branches,

        // --- Orders ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::approve_order,
        handlers::orders::reject_order,
        handlers::orders::orders_summary,
        handlers::orders::create_shipment,
        handlers::orders::list_shipments,

        // --- Catalog ---
        handlers::catalog::list_products,
        handlers::catalog::create_product,
        handlers::catalog::lookup_barcode,

        // --- Inventory ---
        handlers::inventory::central_report,
        handlers::inventory::branch_report,
        handlers::inventory::branches_summary,
        handlers::inventory::confirm_receipt,

        // --- Purchases ---
        handlers::purchases::register_purchase,
        handlers::purchases::list_purchases,
        handlers::purchases::purchases_summary,

        // --- Consumption ---
        handlers::consumption::register_consumption,
        handlers::consumption::list_consumptions,
        handlers::consumption::consumption_summary,

        // --- Fleet ---
        handlers::fleet::list_vehicles,
        handlers::fleet::list_boats,
        handlers::fleet::register_refueling,
        handlers::fleet::list_refuelings,
        handlers::fleet::register_boat_refueling,
        handlers::fleet::list_boat_refuelings,
        handlers::fleet::fleet_summary,

        // --- Audit ---
        handlers::audit::list_audit,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::Branch,
            models::auth::BranchAuthorization,

            // --- Orders ---
            models::orders::OrderStatus,
            models::orders::ShipmentStatus,
            models::orders::Order,
            models::orders::DirectShipment,
            models::orders::OrderCreated,
            models::orders::OrdersSummary,

            // --- Catalog ---
            models::catalog::ProductCategory,
            models::catalog::Product,
            models::catalog::BarcodeLookup,

            // --- Inventory ---
            models::inventory::ItemStatus,
            models::inventory::InventoryItem,
            models::inventory::InventoryEntryView,
            models::inventory::InventoryReport,
            models::inventory::BranchStockSummary,

            // --- Purchases ---
            models::purchases::Purchase,
            models::purchases::PurchasesSummary,

            // --- Consumption ---
            models::consumption::Consumption,
            models::consumption::ConsumptionSummary,

            // --- Fleet ---
            models::fleet::Vehicle,
            models::fleet::Refueling,
            models::fleet::Boat,
            models::fleet::BoatRefueling,
            models::fleet::FleetSummary,

            // --- Audit ---
            models::audit::AuditLog,

            // --- Payloads ---
            handlers::orders::CreateOrderPayload,
            handlers::orders::RejectOrderPayload,
            handlers::orders::CreateShipmentPayload,
            handlers::catalog::CreateProductPayload,
            handlers::inventory::ReceivingPayload,
            handlers::purchases::CreatePurchasePayload,
            handlers::consumption::CreateConsumptionPayload,
            handlers::fleet::CreateRefuelingPayload,
            handlers::fleet::CreateBoatRefuelingPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Identificação do usuário e filiais"),
        (name = "Orders", description = "Pedidos de reposição e envios diretos"),
        (name = "Catalog", description = "Catálogo de produtos e leitura de código de barras"),
        (name = "Inventory", description = "Estoque da Central e das filiais"),
        (name = "Purchases", description = "Compras da Central"),
        (name = "Consumption", description = "Consumo interno das filiais"),
        (name = "Fleet", description = "Abastecimento de veículos e embarcações"),
        (name = "Audit", description = "Trilha de auditoria")
    )
)]
pub struct ApiDoc;
