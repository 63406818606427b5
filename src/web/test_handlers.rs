// src/web/test_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::test::{Grade, NewTest, Score},
    state::AppState,
    templates::{CartaoTeste, LinhaNota, TestsPage},
};
use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::NaiveDate;
use serde::Deserialize;

// --- Structs para query string e formulários ---

#[derive(Deserialize, Debug)]
pub struct FeedbackParams {
    success: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CreateTestForm {
    name: String,
    subject: String,
    date: String,        // "YYYY-MM-DD"
    total_marks: String, // validado aqui na fronteira (inteiro ≥ 1)
}

#[derive(Deserialize, Debug)]
pub struct UpdateScoreForm {
    student_id: String,
    // Campo livre: vazio ou inválido vira 0
    #[serde(default)]
    marks: String,
}

// --- Handlers ---

/// Handler para GET /tests - cartões de teste com a nota e banda de cada aluno.
pub async fn show_tests_page(
    State(state): State<AppState>,
    Query(params): Query<FeedbackParams>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("GET /tests: Carregando testes e notas...");

    let (testes, alunos) = tokio::join!(state.tests.get_all(), state.students.get_all());

    // Um cartão por teste; cada cartão lista TODOS os alunos atuais,
    // com ou sem entrada de nota (alunos novos aparecem sem nota)
    let cartoes: Vec<CartaoTeste> = testes
        .into_iter()
        .map(|teste| {
            let linhas = alunos
                .iter()
                .map(|aluno| {
                    let marks = teste.nota_de(&aluno.id);
                    let banda = marks.and_then(|m| Grade::calcular(m, teste.total_marks));
                    LinhaNota {
                        aluno: aluno.clone(),
                        marks,
                        banda: banda.map(|b| b.as_str()),
                        banda_css: banda.map(|b| b.css_class()).unwrap_or(""),
                    }
                })
                .collect();
            CartaoTeste {
                data_fmt: teste.date.format("%d/%m/%Y").to_string(),
                teste,
                linhas,
            }
        })
        .collect();

    let template = TestsPage {
        cartoes,
        success_message: params.success,
        error_message: params.error,
    };

    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template TestsPage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}

/// Handler para POST /tests/create - cria um teste com uma nota a zero por
/// aluno existente no momento da criação (padrão PRG).
pub async fn handle_create_test(
    State(state): State<AppState>,
    Form(form): Form<CreateTestForm>,
) -> AppResult<Redirect> {
    tracing::info!("POST /tests/create: Tentando criar teste '{}'", form.name);

    // Validações na fronteira do formulário (total a zero é rejeitado AQUI,
    // para a banda de nota nunca ver um total inválido)
    let data_parseada = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").ok();
    let total_parseado: Option<u32> = form.total_marks.trim().parse().ok();

    let (data, total_marks) = match (data_parseada, total_parseado) {
        (Some(d), Some(t))
            if t >= 1 && !form.name.trim().is_empty() && !form.subject.trim().is_empty() =>
        {
            (d, t)
        }
        _ => {
            tracing::warn!("Criação de teste falhou: dados inválidos no formulário.");
            let error_msg = urlencoding::encode(
                "Dados inválidos. Verifique nome, disciplina, data e total de pontos (mínimo 1).",
            );
            let redirect_url = format!("/tests?error={}", error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    // Uma entrada a zero por aluno existente AGORA — alunos matriculados depois
    // só ganham entrada quando a primeira nota for lançada
    let alunos = state.students.get_all().await;
    let scores: Vec<Score> = alunos
        .iter()
        .map(|aluno| Score {
            student_id: aluno.id.clone(),
            marks_obtained: 0,
        })
        .collect();

    let criado = state
        .tests
        .create(NewTest {
            name: form.name.trim().to_string(),
            subject: form.subject.trim().to_string(),
            date: data,
            total_marks,
            scores,
        })
        .await;

    tracing::info!("✅ Teste '{}' criado com sucesso ({}).", criado.name, criado.id);
    let success_msg =
        urlencoding::encode(&format!("Teste '{}' criado com sucesso.", criado.name)).to_string();
    let redirect_url = format!("/tests?success={}", success_msg);
    Ok(Redirect::to(&redirect_url))
}

/// Handler para POST /tests/{id}/scores - lança/atualiza a nota de um aluno.
pub async fn handle_update_score(
    State(state): State<AppState>,
    Path(test_id): Path<String>,
    Form(form): Form<UpdateScoreForm>,
) -> AppResult<Redirect> {
    // Entrada vazia ou não numérica conta como 0
    let marks: u32 = form.marks.trim().parse().unwrap_or(0);
    tracing::debug!(
        "POST /tests/{}/scores: aluno {} -> {} pontos",
        test_id,
        form.student_id,
        marks
    );

    match state.tests.update_score(&test_id, &form.student_id, marks).await {
        Ok(_) => {
            let success_msg = urlencoding::encode("Nota atualizada com sucesso.");
            let redirect_url = format!("/tests?success={}", success_msg);
            Ok(Redirect::to(&redirect_url))
        }
        Err(e) => {
            tracing::error!("Erro ao atualizar nota no teste {}: {:?}", test_id, e);
            let error_msg = urlencoding::encode("Teste não encontrado.");
            let redirect_url = format!("/tests?error={}", error_msg);
            Ok(Redirect::to(&redirect_url))
        }
    }
}
