// src/main.rs

use tokio::net::TcpListener;

use suprimentos_backend::{app, config};

#[tokio::main]
async fn main() {
    // Carrega o .env (se existir) e inicializa o logger
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Sem banco de dados: o estado nasce semeado com a massa de
    // demonstração e vive apenas em memória.
    let app_state = config::AppState::new();
    let app = app(app_state);

    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or(addr)
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
