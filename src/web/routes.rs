// src/web/routes.rs
use crate::{
    state::AppState,
    web::{attendance_handlers, dashboard_handlers, student_handlers, test_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas de Alunos ---
    let student_routes = Router::new()
        .route("/", get(student_handlers::show_students_page))
        .route("/create", post(student_handlers::handle_create_student));

    // --- Rotas de Presença (grelha mensal + toggle) ---
    let attendance_routes = Router::new()
        .route("/", get(attendance_handlers::show_attendance_page))
        .route("/toggle", post(attendance_handlers::handle_toggle));

    // --- Rotas de Testes e Notas ---
    let test_routes = Router::new()
        .route("/", get(test_handlers::show_tests_page))
        .route("/create", post(test_handlers::handle_create_test))
        // Lança a nota de um aluno (URL: /tests/{id}/scores)
        .route("/{id}/scores", post(test_handlers::handle_update_score));

    // --- Router Final ---
    // Sem middleware de autenticação: instância single-tenant, sem login
    Router::new()
        .route("/", get(|| async { axum::response::Redirect::permanent("/dashboard") }))
        .route("/dashboard", get(dashboard_handlers::dashboard_page_handler))
        .nest("/students", student_routes)
        .nest("/attendance", attendance_routes)
        .nest("/tests", test_routes)
        .with_state(app_state)
}
