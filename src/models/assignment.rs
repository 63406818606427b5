// src/models/assignment.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Entrega de um aluno para um trabalho.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub student_id: String,
    pub submitted_at: DateTime<Utc>,
}

// Representa um trabalho (assignments). Tem CRUD completo mas ainda não há
// página que o use — a secção "Assignments" está marcada como Coming Soon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

/// Dados para criar um trabalho.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub description: String,
    // Se None, o serviço usa lista vazia
    pub submissions: Option<Vec<Submission>>,
}

/// Atualização parcial de um trabalho.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub submissions: Option<Vec<Submission>>,
}
