// src/state.rs
use crate::services::{
    assignment_service::AssignmentService, attendance_service::AttendanceService,
    student_service::StudentService, test_service::TestService,
};

// Estado partilhado da aplicação: um serviço por entidade, cada um dono da
// sua própria lista em memória. Clonar o AppState é barato (Arc por dentro).
#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub attendance: AttendanceService,
    pub tests: TestService,
    pub assignments: AssignmentService,
}

// Permite extrair cada serviço diretamente nos handlers
impl axum::extract::FromRef<AppState> for StudentService {
    fn from_ref(state: &AppState) -> StudentService {
        state.students.clone()
    }
}
impl axum::extract::FromRef<AppState> for AttendanceService {
    fn from_ref(state: &AppState) -> AttendanceService {
        state.attendance.clone()
    }
}
impl axum::extract::FromRef<AppState> for TestService {
    fn from_ref(state: &AppState) -> TestService {
        state.tests.clone()
    }
}
impl axum::extract::FromRef<AppState> for AssignmentService {
    fn from_ref(state: &AppState) -> AssignmentService {
        state.assignments.clone()
    }
}
