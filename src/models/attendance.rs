// src/models/attendance.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado guardado de uma marcação de presença.
/// "Não marcado" não tem linha guardada — existe apenas implicitamente
/// quando não há registo para o par (aluno, data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// Estado exibido na grelha ("present" / "absent" / "unmarked") -> estado guardado.
    pub fn parse_exibido(s: &str) -> Option<AttendanceStatus> {
        match s {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            _ => None, // "unmarked" ou qualquer outra coisa
        }
    }
}

// Representa um registo de presença (no máximo um por par aluno/data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    // Serializada como "YYYY-MM-DD" (formato default do NaiveDate)
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub remarks: String,
}

/// Dados para criar um registo de presença.
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord {
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: String,
}

/// Atualização parcial de um registo.
#[derive(Debug, Clone, Default)]
pub struct AttendanceUpdate {
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}
