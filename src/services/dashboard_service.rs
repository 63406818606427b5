// src/services/dashboard_service.rs
use crate::models::{
    attendance::{AttendanceRecord, AttendanceStatus},
    student::Student,
    test::Test,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Estatísticas exibidas nos cartões do dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub total_students: usize,
    /// Percentagem (arredondada) de alunos presentes hoje.
    pub today_attendance_pct: u32,
    /// Testes com data estritamente depois de hoje.
    pub upcoming_tests: usize,
}

/// Calcula as estatísticas a partir das três listas.
/// Recalculado a cada pedido — nada de cache nem manutenção incremental.
pub fn calcular_stats(
    alunos: &[Student],
    presencas: &[AttendanceRecord],
    testes: &[Test],
    hoje: NaiveDate,
) -> DashboardStats {
    let total = alunos.len();

    let presentes_hoje = presencas
        .iter()
        .filter(|r| r.date == hoje && r.status == AttendanceStatus::Present)
        .count();

    // Guarda contra divisão por zero (sem alunos -> 0%)
    let pct = if total > 0 {
        ((presentes_hoje as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let futuros = testes.iter().filter(|t| t.date > hoje).count();

    DashboardStats {
        total_students: total,
        today_attendance_pct: pct,
        upcoming_tests: futuros,
    }
}
