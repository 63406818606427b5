// src/services/attendance_service.rs
use crate::{
    error::{AppError, AppResult},
    models::attendance::{AttendanceRecord, AttendanceStatus, AttendanceUpdate, NewAttendanceRecord},
    services::simular_latencia,
};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Serviço de presenças. Invariante: no máximo um registo por par (aluno, data)
/// — garantido pelo find-antes-de-criar em `marcar`, não pela lista em si.
#[derive(Clone)]
pub struct AttendanceService {
    data: Arc<Mutex<Vec<AttendanceRecord>>>,
}

impl AttendanceService {
    pub fn new(seed: Vec<AttendanceRecord>) -> Self {
        Self {
            data: Arc::new(Mutex::new(seed)),
        }
    }

    fn lista(&self) -> MutexGuard<'_, Vec<AttendanceRecord>> {
        self.data.lock().expect("lock de presenças envenenado")
    }

    pub async fn get_all(&self) -> Vec<AttendanceRecord> {
        simular_latencia(250).await;
        self.lista().clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<AttendanceRecord> {
        simular_latencia(200).await;
        self.lista().iter().find(|r| r.id == id).cloned()
    }

    pub async fn create(&self, novo: NewAttendanceRecord) -> AttendanceRecord {
        simular_latencia(300).await;
        let registo = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            student_id: novo.student_id,
            date: novo.date,
            status: novo.status,
            remarks: novo.remarks,
        };
        self.lista().push(registo.clone());
        registo
    }

    pub async fn update(&self, id: &str, mudancas: AttendanceUpdate) -> AppResult<AttendanceRecord> {
        simular_latencia(250).await;
        let mut lista = self.lista();
        let registo = lista
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Registo de presença '{}' não encontrado", id)))?;
        if let Some(v) = mudancas.status {
            registo.status = v;
        }
        if let Some(v) = mudancas.remarks {
            registo.remarks = v;
        }
        Ok(registo.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<AttendanceRecord> {
        simular_latencia(200).await;
        let mut lista = self.lista();
        let indice = lista
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Registo de presença '{}' não encontrado", id)))?;
        Ok(lista.remove(indice))
    }

    pub async fn get_by_student_id(&self, student_id: &str) -> Vec<AttendanceRecord> {
        simular_latencia(200).await;
        self.lista()
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect()
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        simular_latencia(200).await;
        self.lista()
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect()
    }

    /// Alterna a presença de um aluno numa data, a partir do estado EXIBIDO na
    /// grelha: present → absent; absent ou não-marcado → present. Não existe
    /// caminho de volta para "não marcado" depois do primeiro clique.
    pub async fn marcar(
        &self,
        student_id: &str,
        date: NaiveDate,
        exibido: Option<AttendanceStatus>,
    ) -> AttendanceRecord {
        simular_latencia(300).await;
        let novo_status = match exibido {
            Some(AttendanceStatus::Present) => AttendanceStatus::Absent,
            _ => AttendanceStatus::Present,
        };
        tracing::debug!(
            "Marcando presença: aluno {} em {} -> {}",
            student_id,
            date,
            novo_status.as_str()
        );

        let mut lista = self.lista();
        // Find-antes-de-criar: se já há registo para o par, só muda o status
        if let Some(registo) = lista
            .iter_mut()
            .find(|r| r.student_id == student_id && r.date == date)
        {
            registo.status = novo_status;
            return registo.clone();
        }

        let registo = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            date,
            status: novo_status,
            remarks: String::new(),
        };
        lista.push(registo.clone());
        registo
    }
}
