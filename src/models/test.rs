// src/models/test.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nota de um aluno num teste. A lista `scores` preserva a ordem de inserção.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub student_id: String,
    pub marks_obtained: u32,
}

// Representa um teste com as notas dos alunos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub date: NaiveDate,
    pub total_marks: u32,
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl Test {
    pub fn nota_de(&self, student_id: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.student_id == student_id)
            .map(|s| s.marks_obtained)
    }
}

/// Dados para criar um teste. As notas iniciais (uma entrada a zero por aluno
/// existente) são montadas pelo handler, não aqui.
#[derive(Debug, Clone)]
pub struct NewTest {
    pub name: String,
    pub subject: String,
    pub date: NaiveDate,
    pub total_marks: u32,
    pub scores: Vec<Score>,
}

/// Atualização parcial de um teste.
#[derive(Debug, Clone, Default)]
pub struct TestUpdate {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub date: Option<NaiveDate>,
    pub total_marks: Option<u32>,
    pub scores: Option<Vec<Score>>,
}

// --- Bandas de nota ---

/// Banda calculada a partir da percentagem (marks/total × 100),
/// por limiar decrescente: ≥90 A+, ≥80 A, ≥70 B+, ≥60 B, ≥50 C, senão F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    C,
    F,
}

impl Grade {
    /// Calcula a banda. `total == 0` não tem banda definida (retorna None);
    /// o formulário de criação já impede totais a zero, isto é só a última linha de defesa.
    pub fn calcular(marks: u32, total: u32) -> Option<Grade> {
        if total == 0 {
            return None;
        }
        // Comparação sobre a fração crua, sem arredondar
        let percentagem = (marks as f64 / total as f64) * 100.0;
        let banda = if percentagem >= 90.0 {
            Grade::APlus
        } else if percentagem >= 80.0 {
            Grade::A
        } else if percentagem >= 70.0 {
            Grade::BPlus
        } else if percentagem >= 60.0 {
            Grade::B
        } else if percentagem >= 50.0 {
            Grade::C
        } else {
            Grade::F
        };
        Some(banda)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }

    /// Classe CSS usada nos templates para colorir a banda.
    pub fn css_class(&self) -> &'static str {
        match self {
            Grade::APlus | Grade::A => "nota-verde",
            Grade::BPlus | Grade::B => "nota-azul",
            Grade::C => "nota-amarela",
            Grade::F => "nota-vermelha",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nota_maxima_e_a_plus() {
        assert_eq!(Grade::calcular(50, 50), Some(Grade::APlus));
        assert_eq!(Grade::calcular(100, 100), Some(Grade::APlus));
    }

    #[test]
    fn limiares_das_bandas() {
        assert_eq!(Grade::calcular(90, 100), Some(Grade::APlus));
        assert_eq!(Grade::calcular(89, 100), Some(Grade::A));
        assert_eq!(Grade::calcular(80, 100), Some(Grade::A));
        assert_eq!(Grade::calcular(79, 100), Some(Grade::BPlus));
        assert_eq!(Grade::calcular(70, 100), Some(Grade::BPlus));
        assert_eq!(Grade::calcular(60, 100), Some(Grade::B));
        assert_eq!(Grade::calcular(50, 100), Some(Grade::C));
        assert_eq!(Grade::calcular(49, 100), Some(Grade::F));
        assert_eq!(Grade::calcular(0, 100), Some(Grade::F));
    }

    #[test]
    fn banda_45_de_50_e_a_plus() {
        // 45/50 = 90% exatos
        assert_eq!(Grade::calcular(45, 50), Some(Grade::APlus));
        assert_eq!(Grade::calcular(44, 50), Some(Grade::A));
    }

    #[test]
    fn banda_monotona_quando_as_marks_descem() {
        // O enum ordena A+ < A < ... < F, então a banda nunca pode "melhorar"
        // quando as marks diminuem.
        let mut anterior = Grade::APlus;
        for marks in (0..=100).rev() {
            let banda = Grade::calcular(marks, 100).expect("total > 0");
            assert!(banda >= anterior, "banda piorou ao descer marks ({marks})");
            anterior = banda;
        }
    }

    #[test]
    fn total_zero_nao_tem_banda() {
        assert_eq!(Grade::calcular(0, 0), None);
        assert_eq!(Grade::calcular(10, 0), None);
    }
}
