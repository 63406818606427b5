// src/models/student.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado da matrícula de um aluno.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Inactive => "inactive",
        }
    }
}

// Representa um aluno da lista em memória (semeada das fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub parent_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub batch: String,
    pub status: StudentStatus,
    pub enrollment_date: DateTime<Utc>,
    // URL da foto (opcional; o template usa um placeholder quando ausente)
    pub photo: Option<String>,
}

impl Student {
    /// Filtro de busca: substring case-insensitive em nome OU email OU turma (batch).
    pub fn corresponde_busca(&self, termo: &str) -> bool {
        let termo = termo.to_lowercase();
        self.name.to_lowercase().contains(&termo)
            || self.email.to_lowercase().contains(&termo)
            || self.batch.to_lowercase().contains(&termo)
    }
}

/// Dados para criar um aluno (vêm do formulário).
/// Campos não fornecidos recebem defaults no serviço.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub parent_phone: String,
    pub address: String,
    pub batch: String,
    pub status: Option<StudentStatus>,
    // Se None, o serviço usa o instante atual
    pub enrollment_date: Option<DateTime<Utc>>,
    pub photo: Option<String>,
}

/// Atualização parcial: apenas os campos `Some` sobrescrevem o registo existente.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub parent_phone: Option<String>,
    pub address: Option<String>,
    pub batch: Option<String>,
    pub status: Option<StudentStatus>,
    pub photo: Option<String>,
}

impl StudentUpdate {
    /// Sobrescreve campo a campo (merge raso).
    pub fn aplicar(self, aluno: &mut Student) {
        if let Some(v) = self.name { aluno.name = v; }
        if let Some(v) = self.email { aluno.email = v; }
        if let Some(v) = self.phone { aluno.phone = v; }
        if let Some(v) = self.parent_phone { aluno.parent_phone = v; }
        if let Some(v) = self.address { aluno.address = v; }
        if let Some(v) = self.batch { aluno.batch = v; }
        if let Some(v) = self.status { aluno.status = v; }
        if let Some(v) = self.photo { aluno.photo = Some(v); }
    }
}
