// src/fixtures.rs
use crate::{
    error::AppResult,
    models::{assignment::Assignment, attendance::AttendanceRecord, student::Student, test::Test},
};

/// Dados iniciais de cada entidade, embutidos no binário em JSON.
pub struct Fixtures {
    pub students: Vec<Student>,
    pub attendance: Vec<AttendanceRecord>,
    pub tests: Vec<Test>,
    pub assignments: Vec<Assignment>,
}

pub fn carregar() -> AppResult<Fixtures> {
    let students: Vec<Student> = serde_json::from_str(include_str!("../fixtures/students.json"))?;
    let attendance: Vec<AttendanceRecord> =
        serde_json::from_str(include_str!("../fixtures/attendance.json"))?;
    let tests: Vec<Test> = serde_json::from_str(include_str!("../fixtures/tests.json"))?;
    let assignments: Vec<Assignment> =
        serde_json::from_str(include_str!("../fixtures/assignments.json"))?;

    tracing::info!(
        "Fixtures carregadas: {} alunos, {} presenças, {} testes, {} trabalhos",
        students.len(),
        attendance.len(),
        tests.len(),
        assignments.len()
    );

    Ok(Fixtures {
        students,
        attendance,
        tests,
        assignments,
    })
}
