// src/main.rs

// --- Imports (módulos vêm da lib) ---
use classcraft::services::{
    assignment_service::AssignmentService, attendance_service::AttendanceService,
    student_service::StudentService, test_service::TestService,
};
use classcraft::state::AppState;
use classcraft::{fixtures, web};
use axum::serve;
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                env::var("RUST_LOG")
                    .unwrap_or_else(|_| "classcraft=debug,tower_http=info".into())
                    .into()
            }),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor ClassCraft...");

    // --- Carregamento das Fixtures ---
    let seed = match fixtures::carregar() {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao carregar as fixtures: {}", e);
            return Err(anyhow::anyhow!("Falha ao carregar fixtures: {}", e));
        }
    };

    // --- Criação do Estado da Aplicação ---
    // Cada serviço é dono da sua lista em memória, semeada das fixtures
    let app_state = AppState {
        students: StudentService::new(seed.students),
        attendance: AttendanceService::new(seed.attendance),
        tests: TestService::new(seed.tests),
        assignments: AssignmentService::new(seed.assignments),
    };
    tracing::info!("📚 Serviços de entidade inicializados.");

    // --- Configuração do Endereço e Listener ---
    // PORT opcional via ambiente (default 3000)
    let porta: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], porta));
    tracing::info!("📡 Servidor escutando em http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener na porta {}: {}", porta, e);
            return Err(e.into());
        }
    };

    // --- Criação do Router e Aplicação das Camadas (Middlewares) ---
    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    tracing::info!("✅ Router e middlewares configurados.");

    // --- Início do Servidor ---
    tracing::info!("👂 Servidor pronto para aceitar conexões...");
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
