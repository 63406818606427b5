// src/web/student_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::student::NewStudent,
    state::AppState,
    templates::StudentsPage,
};
use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;

// --- Structs para query string e formulário ---

#[derive(Deserialize, Debug)]
pub struct StudentsQuery {
    q: Option<String>,
    success: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CreateStudentForm {
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    parent_phone: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    batch: String,
}

// --- Handlers ---

/// Handler para GET /students - lista (filtrada pela busca) + formulário de criação.
pub async fn show_students_page(
    State(state): State<AppState>,
    Query(params): Query<StudentsQuery>,
) -> AppResult<impl IntoResponse> {
    let termo = params.q.unwrap_or_default();
    tracing::debug!("GET /students: busca='{}'", termo);

    // Busca filtrada (scan linear sobre a lista completa) ou lista inteira
    let students = if termo.trim().is_empty() {
        state.students.get_all().await
    } else {
        state.students.search(termo.trim()).await
    };

    let template = StudentsPage {
        students,
        termo_busca: termo,
        success_message: params.success, // Vem da query string (?success=...)
        error_message: params.error,
    };

    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template StudentsPage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}

/// Handler para POST /students/create - adiciona um aluno (padrão PRG).
pub async fn handle_create_student(
    State(state): State<AppState>,
    Form(form): Form<CreateStudentForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /students/create: Tentando criar aluno '{}'", form.name);

    // Validação na fronteira do formulário (os serviços confiam no caller)
    if form.name.trim().is_empty() || form.email.trim().is_empty() {
        tracing::warn!("Criação de aluno falhou: nome e email são obrigatórios.");
        let error_msg = urlencoding::encode("Nome e email são obrigatórios.");
        let redirect_url = format!("/students?error={}", error_msg);
        return Ok(Redirect::to(&redirect_url));
    }

    let criado = state
        .students
        .create(NewStudent {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone,
            parent_phone: form.parent_phone,
            address: form.address,
            batch: form.batch,
            ..Default::default()
        })
        .await;

    tracing::info!("✅ Aluno '{}' criado com sucesso ({}).", criado.name, criado.id);
    let success_msg =
        urlencoding::encode(&format!("Aluno '{}' adicionado com sucesso.", criado.name)).to_string();
    let redirect_url = format!("/students?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}
