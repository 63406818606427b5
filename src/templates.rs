// src/templates.rs
use crate::models::{student::Student, test::Test};
use crate::services::dashboard_service::DashboardStats;
use askama::Template; // Trait necessário para Askama

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub stats: DashboardStats,
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsPage {
    pub students: Vec<Student>,
    // Termo atual da caixa de busca (re-exibido no input)
    pub termo_busca: String,
    // Mensagens de feedback opcionais (vêm da query string, padrão PRG)
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

// --- Structs auxiliares da grelha de presença ---

/// Cabeçalho de um dia do mês na grelha.
pub struct DiaCabecalho {
    pub numero: u32,
    pub hoje: bool,
}

/// Uma célula da grelha: o estado exibido para (aluno, data).
/// "unmarked" quando não há registo guardado.
pub struct CelulaPresenca {
    pub data: String, // "YYYY-MM-DD", vai escondida no form de toggle
    pub status: &'static str,
}

/// Uma linha da grelha: um aluno e as suas células do mês.
pub struct LinhaPresenca {
    pub aluno: Student,
    pub celulas: Vec<CelulaPresenca>,
}

#[derive(Template)]
#[template(path = "attendance.html")]
pub struct AttendancePage {
    pub titulo_mes: String,   // ex: "June 2025"
    pub mes_param: String,    // "YYYY-MM" do mês exibido (volta no form de toggle)
    pub mes_anterior: String, // "YYYY-MM" para navegação
    pub mes_seguinte: String,
    pub dias: Vec<DiaCabecalho>,
    pub linhas: Vec<LinhaPresenca>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

// --- Structs auxiliares da página de testes ---

/// Nota (e banda) de um aluno num cartão de teste.
pub struct LinhaNota {
    pub aluno: Student,
    pub marks: Option<u32>, // None = aluno sem entrada de nota neste teste
    pub banda: Option<&'static str>,
    pub banda_css: &'static str,
}

/// Um teste com a linha de nota de cada aluno da lista atual.
pub struct CartaoTeste {
    pub teste: Test,
    pub data_fmt: String, // data formatada para exibição
    pub linhas: Vec<LinhaNota>,
}

#[derive(Template)]
#[template(path = "tests.html")]
pub struct TestsPage {
    pub cartoes: Vec<CartaoTeste>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}
