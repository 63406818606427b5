// src/web/dashboard_handlers.rs
use crate::{
    error::{AppError, AppResult},
    services::dashboard_service,
    state::AppState,
    templates::DashboardPage,
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use chrono::Local;

/// Handler para GET /dashboard - cartões de estatísticas + ações rápidas.
pub async fn dashboard_page_handler(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("GET /dashboard: Calculando estatísticas...");

    // 1. Busca as três listas em paralelo (listas independentes, sem ordem garantida
    //    entre elas — seguro porque cada serviço é dono da sua própria lista)
    let (alunos, presencas, testes) = tokio::join!(
        state.students.get_all(),
        state.attendance.get_all(),
        state.tests.get_all()
    );

    // 2. Agrega sob demanda a partir do estado atual
    let hoje = Local::now().date_naive();
    let stats = dashboard_service::calcular_stats(&alunos, &presencas, &testes, hoje);
    tracing::debug!(
        "Dashboard: {} alunos, {}% presentes hoje, {} testes futuros",
        stats.total_students,
        stats.today_attendance_pct,
        stats.upcoming_tests
    );

    // 3. Renderiza o template
    let template = DashboardPage { stats };
    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template DashboardPage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}
