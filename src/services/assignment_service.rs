// src/services/assignment_service.rs
use crate::{
    error::{AppError, AppResult},
    models::assignment::{Assignment, AssignmentUpdate, NewAssignment},
    services::simular_latencia,
};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Serviço de trabalhos. CRUD completo, mas nenhuma página o usa ainda
/// (a secção correspondente está como Coming Soon).
#[derive(Clone)]
pub struct AssignmentService {
    data: Arc<Mutex<Vec<Assignment>>>,
}

impl AssignmentService {
    pub fn new(seed: Vec<Assignment>) -> Self {
        Self {
            data: Arc::new(Mutex::new(seed)),
        }
    }

    fn lista(&self) -> MutexGuard<'_, Vec<Assignment>> {
        self.data.lock().expect("lock de trabalhos envenenado")
    }

    pub async fn get_all(&self) -> Vec<Assignment> {
        simular_latencia(300).await;
        self.lista().clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Assignment> {
        simular_latencia(200).await;
        self.lista().iter().find(|t| t.id == id).cloned()
    }

    pub async fn create(&self, novo: NewAssignment) -> Assignment {
        simular_latencia(400).await;
        let trabalho = Assignment {
            id: Uuid::new_v4().to_string(),
            title: novo.title,
            subject: novo.subject,
            due_date: novo.due_date,
            description: novo.description,
            submissions: novo.submissions.unwrap_or_default(),
        };
        self.lista().push(trabalho.clone());
        trabalho
    }

    pub async fn update(&self, id: &str, mudancas: AssignmentUpdate) -> AppResult<Assignment> {
        simular_latencia(350).await;
        let mut lista = self.lista();
        let trabalho = lista
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Trabalho '{}' não encontrado", id)))?;
        if let Some(v) = mudancas.title {
            trabalho.title = v;
        }
        if let Some(v) = mudancas.subject {
            trabalho.subject = v;
        }
        if let Some(v) = mudancas.due_date {
            trabalho.due_date = v;
        }
        if let Some(v) = mudancas.description {
            trabalho.description = v;
        }
        if let Some(v) = mudancas.submissions {
            trabalho.submissions = v;
        }
        Ok(trabalho.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<Assignment> {
        simular_latencia(250).await;
        let mut lista = self.lista();
        let indice = lista
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Trabalho '{}' não encontrado", id)))?;
        Ok(lista.remove(indice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn crud_basico() {
        let servico = AssignmentService::new(vec![]);
        let criado = servico
            .create(NewAssignment {
                title: "Lista de exercícios 3".to_string(),
                subject: "Física".to_string(),
                due_date: NaiveDate::from_ymd_opt(2025, 8, 20).expect("data válida"),
                description: String::new(),
                submissions: None,
            })
            .await;
        assert!(criado.submissions.is_empty());

        let atualizado = servico
            .update(
                &criado.id,
                AssignmentUpdate {
                    title: Some("Lista de exercícios 3 (revista)".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("id existe");
        assert_eq!(atualizado.title, "Lista de exercícios 3 (revista)");
        assert_eq!(atualizado.subject, "Física");

        let removido = servico.delete(&criado.id).await.expect("id existe");
        assert_eq!(removido.id, criado.id);
        assert!(servico.get_all().await.is_empty());
    }
}
