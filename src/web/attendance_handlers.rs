// src/web/attendance_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::attendance::AttendanceStatus,
    state::AppState,
    templates::{AttendancePage, CelulaPresenca, DiaCabecalho, LinhaPresenca},
};
use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;

// --- Structs para query string e formulário ---

#[derive(Deserialize, Debug)]
pub struct AttendanceQuery {
    // "YYYY-MM"; default para o mês atual se ausente ou inválido
    mes: Option<String>,
    success: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ToggleForm {
    student_id: String,
    date: String,   // "YYYY-MM-DD"
    status: String, // estado EXIBIDO na célula clicada: present/absent/unmarked
    mes: String,    // mês exibido, para voltar à mesma grelha
}

// --- Auxiliares de calendário ---

/// Converte "YYYY-MM" no primeiro dia do mês.
fn parse_mes(s: &str) -> Option<NaiveDate> {
    let mut partes = s.splitn(2, '-');
    let ano: i32 = partes.next()?.trim().parse().ok()?;
    let mes: u32 = partes.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(ano, mes, 1)
}

fn formatar_mes(ano: i32, mes: u32) -> String {
    format!("{:04}-{:02}", ano, mes)
}

/// Número de dias do mês que começa em `primeiro`.
fn dias_no_mes(primeiro: NaiveDate) -> u32 {
    let (ano, mes) = (primeiro.year(), primeiro.month());
    let proximo = if mes == 12 {
        NaiveDate::from_ymd_opt(ano + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(ano, mes + 1, 1)
    };
    match proximo.and_then(|d| d.pred_opt()) {
        Some(ultimo) => ultimo.day(),
        None => 28, // fora do range do chrono; não acontece com meses navegáveis
    }
}

// --- Handlers ---

/// Handler para GET /attendance - grelha mensal (alunos × dias).
pub async fn show_attendance_page(
    State(state): State<AppState>,
    Query(params): Query<AttendanceQuery>,
) -> AppResult<impl IntoResponse> {
    let hoje = Local::now().date_naive();
    // Mês exibido: o da query, ou o atual como default
    let primeiro = params
        .mes
        .as_deref()
        .and_then(parse_mes)
        .unwrap_or_else(|| hoje.with_day(1).unwrap_or(hoje));
    let (ano, mes) = (primeiro.year(), primeiro.month());
    tracing::debug!("GET /attendance: Carregando grelha de {}", formatar_mes(ano, mes));

    // 1. Busca alunos e presenças em paralelo
    let (alunos, presencas) = tokio::join!(state.students.get_all(), state.attendance.get_all());

    // 2. Indexa os registos por (aluno, data) para acesso rápido nas células
    let por_par: HashMap<(&str, NaiveDate), AttendanceStatus> = presencas
        .iter()
        .map(|r| ((r.student_id.as_str(), r.date), r.status))
        .collect();

    // 3. Monta cabeçalho de dias e uma linha por aluno
    let total_dias = dias_no_mes(primeiro);
    let dias: Vec<DiaCabecalho> = (1..=total_dias)
        .map(|numero| DiaCabecalho {
            numero,
            hoje: hoje.year() == ano && hoje.month() == mes && hoje.day() == numero,
        })
        .collect();

    let linhas: Vec<LinhaPresenca> = alunos
        .into_iter()
        .map(|aluno| {
            let celulas = (1..=total_dias)
                .filter_map(|dia| NaiveDate::from_ymd_opt(ano, mes, dia))
                .map(|data| {
                    // Sem registo guardado -> "unmarked" (só existe implicitamente)
                    let status = match por_par.get(&(aluno.id.as_str(), data)) {
                        Some(s) => s.as_str(),
                        None => "unmarked",
                    };
                    CelulaPresenca {
                        data: data.to_string(),
                        status,
                    }
                })
                .collect();
            LinhaPresenca { aluno, celulas }
        })
        .collect();

    // 4. Navegação prev/next
    let (ano_ant, mes_ant) = if mes == 1 { (ano - 1, 12) } else { (ano, mes - 1) };
    let (ano_seg, mes_seg) = if mes == 12 { (ano + 1, 1) } else { (ano, mes + 1) };

    let template = AttendancePage {
        titulo_mes: primeiro.format("%B %Y").to_string(),
        mes_param: formatar_mes(ano, mes),
        mes_anterior: formatar_mes(ano_ant, mes_ant),
        mes_seguinte: formatar_mes(ano_seg, mes_seg),
        dias,
        linhas,
        success_message: params.success,
        error_message: params.error,
    };

    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template AttendancePage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}

/// Handler para POST /attendance/toggle - alterna present↔absent (padrão PRG).
pub async fn handle_toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> AppResult<Redirect> {
    tracing::debug!(
        "POST /attendance/toggle: aluno {} em {} (exibido: {})",
        form.student_id,
        form.date,
        form.status
    );

    let data = match NaiveDate::parse_from_str(&form.date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            tracing::warn!("Toggle falhou: data inválida '{}'", form.date);
            let error_msg = urlencoding::encode("Data inválida.");
            let redirect_url = format!("/attendance?mes={}&error={}", form.mes, error_msg);
            return Ok(Redirect::to(&redirect_url));
        }
    };

    let exibido = AttendanceStatus::parse_exibido(&form.status);
    let registo = state.attendance.marcar(&form.student_id, data, exibido).await;

    let success_msg = urlencoding::encode(&format!(
        "Presença de {} marcada como {}.",
        registo.date,
        registo.status.as_str()
    ))
    .to_string();
    let redirect_url = format!("/attendance?mes={}&success={}", form.mes, success_msg);
    Ok(Redirect::to(&redirect_url))
}
