// src/store/seed.rs
//
// Massa de dados inicial, equivalente ao módulo de mock do dashboard.
// IDs fixos para que as requisições (e os testes) possam referenciar
// usuários e produtos conhecidos sem consultar a API antes.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::{Uuid, uuid};

use crate::models::{
    audit::AuditLog,
    auth::{Branch, BranchAuthorization, User, UserRole},
    catalog::{Product, ProductCategory},
    consumption::Consumption,
    fleet::{Boat, BoatRefueling, Refueling, Vehicle},
    inventory::{InventoryItem, ItemStatus},
    orders::{DirectShipment, Order, OrderStatus, ShipmentStatus},
    purchases::Purchase,
};

// --- Usuários ---
pub const ADMIN_USER_ID: Uuid = uuid!("11111111-1111-4111-8111-111111111111");
pub const BELEM_OPERATOR_ID: Uuid = uuid!("22222222-2222-4222-8222-222222222222");
pub const SANTAREM_OPERATOR_ID: Uuid = uuid!("33333333-3333-4333-8333-333333333333");

// --- Filiais ---
pub const BELEM_BRANCH_ID: Uuid = uuid!("a1a1a1a1-a1a1-4a1a-8a1a-a1a1a1a1a1a1");
pub const SANTAREM_BRANCH_ID: Uuid = uuid!("b2b2b2b2-b2b2-4b2b-8b2b-b2b2b2b2b2b2");
pub const MARABA_BRANCH_ID: Uuid = uuid!("c3c3c3c3-c3c3-4c3c-8c3c-c3c3c3c3c3c3");

// --- Produtos ---
pub const ARROZ_PRODUCT_ID: Uuid = uuid!("10000000-0000-4000-8000-000000000001");
pub const DIPIRONA_PRODUCT_ID: Uuid = uuid!("10000000-0000-4000-8000-000000000002");
pub const LENCOL_PRODUCT_ID: Uuid = uuid!("10000000-0000-4000-8000-000000000003");
// Sem estoque na Central e sem homologação: exercita os dois avisos
pub const PILHA_PRODUCT_ID: Uuid = uuid!("10000000-0000-4000-8000-000000000004");

// --- Frota ---
pub const BELEM_VEHICLE_ID: Uuid = uuid!("20000000-0000-4000-8000-000000000001");
pub const SANTAREM_VEHICLE_ID: Uuid = uuid!("20000000-0000-4000-8000-000000000002");
pub const BELEM_BOAT_ID: Uuid = uuid!("20000000-0000-4000-8000-000000000003");

pub struct SeedData {
    pub users: Vec<User>,
    pub branches: Vec<Branch>,
    pub authorizations: Vec<BranchAuthorization>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub shipments: Vec<DirectShipment>,
    pub purchases: Vec<Purchase>,
    pub consumptions: Vec<Consumption>,
    pub vehicles: Vec<Vehicle>,
    pub boats: Vec<Boat>,
    pub refuelings: Vec<Refueling>,
    pub boat_refuelings: Vec<BoatRefueling>,
    pub audit: Vec<AuditLog>,
}

pub fn mock_data() -> SeedData {
    let now = Utc::now();

    let users = vec![
        User {
            id: ADMIN_USER_ID,
            name: "Maria Andrade".into(),
            email: "maria.andrade@central.org".into(),
            cpf: "11122233344".into(),
            role: UserRole::Admin,
            branch_id: None,
            active: true,
            created_at: now - Duration::days(400),
        },
        User {
            id: BELEM_OPERATOR_ID,
            name: "João Ferreira".into(),
            email: "joao.ferreira@central.org".into(),
            cpf: "55566677788".into(),
            role: UserRole::BranchOperator,
            branch_id: Some(BELEM_BRANCH_ID),
            active: true,
            created_at: now - Duration::days(300),
        },
        User {
            id: SANTAREM_OPERATOR_ID,
            name: "Ana Souza".into(),
            email: "ana.souza@central.org".into(),
            cpf: "99900011122".into(),
            role: UserRole::BranchOperator,
            branch_id: Some(SANTAREM_BRANCH_ID),
            active: true,
            created_at: now - Duration::days(250),
        },
    ];

    let branches = vec![
        Branch {
            id: BELEM_BRANCH_ID,
            name: "Filial Belém".into(),
            code: "FIL-01".into(),
            address: "Av. Presidente Vargas, 800 — Belém/PA".into(),
            active: true,
            created_at: now - Duration::days(500),
        },
        Branch {
            id: SANTAREM_BRANCH_ID,
            name: "Filial Santarém".into(),
            code: "FIL-02".into(),
            address: "Av. Tapajós, 152 — Santarém/PA".into(),
            active: true,
            created_at: now - Duration::days(500),
        },
        Branch {
            id: MARABA_BRANCH_ID,
            name: "Filial Marabá".into(),
            code: "FIL-03".into(),
            address: "Folha 26, Quadra 7 — Marabá/PA".into(),
            active: false,
            created_at: now - Duration::days(500),
        },
    ];

    let products = vec![
        Product {
            id: ARROZ_PRODUCT_ID,
            barcode: "7891234560011".into(),
            name: "Arroz Branco 5kg".into(),
            description: "Arroz tipo 1, pacote de 5kg".into(),
            category: ProductCategory::Alimento,
            unit: "pacote".into(),
            requires_barcode: true,
            created_at: now - Duration::days(200),
        },
        Product {
            id: DIPIRONA_PRODUCT_ID,
            barcode: "7891234560028".into(),
            name: "Dipirona 500mg".into(),
            description: "Caixa com 20 comprimidos".into(),
            category: ProductCategory::Medicamento,
            unit: "caixa".into(),
            requires_barcode: true,
            created_at: now - Duration::days(180),
        },
        Product {
            id: LENCOL_PRODUCT_ID,
            barcode: "7891234560035".into(),
            name: "Lençol de Solteiro".into(),
            description: "Lençol 100% algodão, branco".into(),
            category: ProductCategory::Enxoval,
            unit: "unidade".into(),
            requires_barcode: false,
            created_at: now - Duration::days(150),
        },
        Product {
            id: PILHA_PRODUCT_ID,
            barcode: "7891234560042".into(),
            name: "Pilha Alcalina AA".into(),
            description: "Cartela com 4 unidades".into(),
            category: ProductCategory::Outro,
            unit: "cartela".into(),
            requires_barcode: true,
            created_at: now - Duration::days(90),
        },
    ];

    let inventory = vec![
        // Central
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: ARROZ_PRODUCT_ID,
            branch_id: None,
            quantity: Decimal::from(120),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(1250, 2),
            last_updated: now - Duration::days(2),
        },
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: DIPIRONA_PRODUCT_ID,
            branch_id: None,
            quantity: Decimal::from(80),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(890, 2),
            last_updated: now - Duration::days(5),
        },
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: LENCOL_PRODUCT_ID,
            branch_id: None,
            quantity: Decimal::from(45),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(3500, 2),
            last_updated: now - Duration::days(10),
        },
        // Filiais
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: ARROZ_PRODUCT_ID,
            branch_id: Some(BELEM_BRANCH_ID),
            quantity: Decimal::from(30),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(1250, 2),
            last_updated: now - Duration::days(1),
        },
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: DIPIRONA_PRODUCT_ID,
            branch_id: Some(BELEM_BRANCH_ID),
            quantity: Decimal::from(12),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(890, 2),
            last_updated: now - Duration::days(1),
        },
        // Saldo baixo (< 20) para o alerta de estoque mínimo
        InventoryItem {
            id: Uuid::new_v4(),
            product_id: ARROZ_PRODUCT_ID,
            branch_id: Some(SANTAREM_BRANCH_ID),
            quantity: Decimal::from(8),
            status: ItemStatus::Disponivel,
            unit_price: Decimal::new(1250, 2),
            last_updated: now - Duration::days(3),
        },
    ];

    // Homologações: Belém tem arroz, dipirona e lençol; Santarém só arroz.
    // A pilha alcalina não é homologada para ninguém.
    let authorizations = vec![
        BranchAuthorization {
            id: Uuid::new_v4(),
            branch_id: BELEM_BRANCH_ID,
            product_id: ARROZ_PRODUCT_ID,
            authorized: true,
            authorized_by: ADMIN_USER_ID,
            authorized_at: now - Duration::days(100),
        },
        BranchAuthorization {
            id: Uuid::new_v4(),
            branch_id: BELEM_BRANCH_ID,
            product_id: DIPIRONA_PRODUCT_ID,
            authorized: true,
            authorized_by: ADMIN_USER_ID,
            authorized_at: now - Duration::days(100),
        },
        BranchAuthorization {
            id: Uuid::new_v4(),
            branch_id: BELEM_BRANCH_ID,
            product_id: LENCOL_PRODUCT_ID,
            authorized: true,
            authorized_by: ADMIN_USER_ID,
            authorized_at: now - Duration::days(100),
        },
        BranchAuthorization {
            id: Uuid::new_v4(),
            branch_id: SANTAREM_BRANCH_ID,
            product_id: ARROZ_PRODUCT_ID,
            authorized: true,
            authorized_by: ADMIN_USER_ID,
            authorized_at: now - Duration::days(100),
        },
    ];

    let orders = vec![
        Order {
            id: Uuid::new_v4(),
            branch_id: BELEM_BRANCH_ID,
            product_id: DIPIRONA_PRODUCT_ID,
            quantity: Decimal::from(10),
            requested_by: BELEM_OPERATOR_ID,
            status: OrderStatus::Pendente,
            justification: None,
            created_at: now - Duration::hours(6),
            approved_by: None,
            approved_at: None,
        },
        Order {
            id: Uuid::new_v4(),
            branch_id: SANTAREM_BRANCH_ID,
            product_id: ARROZ_PRODUCT_ID,
            quantity: Decimal::from(20),
            requested_by: SANTAREM_OPERATOR_ID,
            status: OrderStatus::Aprovado,
            justification: None,
            created_at: now - Duration::days(2),
            approved_by: Some(ADMIN_USER_ID),
            approved_at: Some(now - Duration::days(1)),
        },
        Order {
            id: Uuid::new_v4(),
            branch_id: SANTAREM_BRANCH_ID,
            product_id: LENCOL_PRODUCT_ID,
            quantity: Decimal::from(5),
            requested_by: SANTAREM_OPERATOR_ID,
            status: OrderStatus::Rejeitado,
            justification: Some("Item não homologado para a filial".into()),
            created_at: now - Duration::days(4),
            approved_by: None,
            approved_at: None,
        },
    ];

    let shipments = vec![
        DirectShipment {
            id: Uuid::new_v4(),
            branch_id: BELEM_BRANCH_ID,
            product_id: ARROZ_PRODUCT_ID,
            quantity: Decimal::from(50),
            sent_by: ADMIN_USER_ID,
            status: ShipmentStatus::EmTransito,
            sent_at: now - Duration::hours(12),
            notes: Some("Reposição programada".into()),
            received_at: None,
        },
        DirectShipment {
            id: Uuid::new_v4(),
            branch_id: SANTAREM_BRANCH_ID,
            product_id: DIPIRONA_PRODUCT_ID,
            quantity: Decimal::from(30),
            sent_by: ADMIN_USER_ID,
            status: ShipmentStatus::Recebido,
            sent_at: now - Duration::days(6),
            notes: None,
            received_at: Some(now - Duration::days(4)),
        },
    ];

    let purchases = vec![
        Purchase {
            id: Uuid::new_v4(),
            product_id: ARROZ_PRODUCT_ID,
            quantity: Decimal::from(200),
            unit_price: Decimal::new(1190, 2),
            total_price: Decimal::new(238_000, 2),
            supplier_id: "supplier-1".into(),
            purchase_date: now - Duration::days(15),
            received_by: ADMIN_USER_ID,
            created_at: now - Duration::days(15),
        },
        Purchase {
            id: Uuid::new_v4(),
            product_id: LENCOL_PRODUCT_ID,
            quantity: Decimal::from(60),
            unit_price: Decimal::new(3200, 2),
            total_price: Decimal::new(192_000, 2),
            supplier_id: "supplier-2".into(),
            purchase_date: now - Duration::days(8),
            received_by: ADMIN_USER_ID,
            created_at: now - Duration::days(8),
        },
    ];

    let consumptions = vec![Consumption {
        id: Uuid::new_v4(),
        product_id: ARROZ_PRODUCT_ID,
        branch_id: BELEM_BRANCH_ID,
        quantity: Decimal::from(2),
        consumed_by: "Carlos Lima".into(),
        consumed_by_cpf: "12312312300".into(),
        consumed_at: now - Duration::days(1),
        unit_price: Decimal::new(1250, 2),
        total_price: Decimal::new(2500, 2),
    }];

    let vehicles = vec![
        Vehicle {
            id: BELEM_VEHICLE_ID,
            plate: "QEA-1B23".into(),
            model: "Fiorino Furgão".into(),
            branch_id: BELEM_BRANCH_ID,
            odometer: 45_230,
            active: true,
        },
        Vehicle {
            id: SANTAREM_VEHICLE_ID,
            plate: "QVB-7C89".into(),
            model: "Saveiro Robust".into(),
            branch_id: SANTAREM_BRANCH_ID,
            odometer: 88_410,
            active: true,
        },
    ];

    let boats = vec![Boat {
        id: BELEM_BOAT_ID,
        name: "Rio Guamá".into(),
        registration: "PA-1234-5678".into(),
        model: "Voadeira 6m".into(),
        branch_id: BELEM_BRANCH_ID,
        engine_hours: Decimal::new(13_205, 1),
        active: true,
    }];

    let refuelings = vec![Refueling {
        id: Uuid::new_v4(),
        vehicle_id: BELEM_VEHICLE_ID,
        branch_id: BELEM_BRANCH_ID,
        liters: Decimal::new(420, 1),
        price_per_liter: Decimal::new(589, 2),
        total_price: Decimal::new(24_738, 2),
        odometer: 45_230,
        fueled_by: BELEM_OPERATOR_ID,
        fueled_at: now - Duration::days(2),
    }];

    let boat_refuelings = vec![BoatRefueling {
        id: Uuid::new_v4(),
        boat_id: BELEM_BOAT_ID,
        branch_id: BELEM_BRANCH_ID,
        liters: Decimal::from(120),
        price_per_liter: Decimal::new(612, 2),
        total_price: Decimal::new(73_440, 2),
        engine_hours: Decimal::new(13_205, 1),
        fueled_by: BELEM_OPERATOR_ID,
        fueled_at: now - Duration::days(3),
        notes: Some("Diesel S10".into()),
    }];

    SeedData {
        users,
        branches,
        authorizations,
        products,
        inventory,
        orders,
        shipments,
        purchases,
        consumptions,
        vehicles,
        boats,
        refuelings,
        boat_refuelings,
        audit: Vec::new(),
    }
}
