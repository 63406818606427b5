// src/services/student_service.rs
use crate::{
    error::{AppError, AppResult},
    models::student::{NewStudent, Student, StudentStatus, StudentUpdate},
    services::simular_latencia,
};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Serviço de alunos. É dono da lista em memória (semeada das fixtures);
/// todo o acesso passa pelo Mutex — disciplina de escritor único por coleção.
#[derive(Clone)]
pub struct StudentService {
    data: Arc<Mutex<Vec<Student>>>,
}

impl StudentService {
    pub fn new(seed: Vec<Student>) -> Self {
        Self {
            data: Arc::new(Mutex::new(seed)),
        }
    }

    // O lock nunca atravessa um await (a latência vem antes), então não há
    // hazard de interleaving entre operações.
    fn lista(&self) -> MutexGuard<'_, Vec<Student>> {
        self.data.lock().expect("lock de alunos envenenado")
    }

    /// Cópia completa da lista, na ordem original. Nunca falha.
    pub async fn get_all(&self) -> Vec<Student> {
        simular_latencia(300).await;
        self.lista().clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Student> {
        simular_latencia(200).await;
        self.lista().iter().find(|a| a.id == id).cloned()
    }

    /// Cria um aluno: id novo (UUIDv4), defaults preenchidos, append no fim.
    pub async fn create(&self, novo: NewStudent) -> Student {
        simular_latencia(400).await;
        let aluno = Student {
            id: Uuid::new_v4().to_string(),
            name: novo.name,
            email: novo.email,
            phone: novo.phone,
            parent_phone: novo.parent_phone,
            address: novo.address,
            batch: novo.batch,
            status: novo.status.unwrap_or(StudentStatus::Active),
            // Usa o instante atual se o form não trouxe data
            enrollment_date: novo.enrollment_date.unwrap_or_else(Utc::now),
            photo: novo.photo,
        };
        tracing::debug!("Criando aluno '{}' ({})", aluno.name, aluno.id);
        self.lista().push(aluno.clone());
        aluno
    }

    /// Merge raso de `mudancas` sobre o registo existente.
    pub async fn update(&self, id: &str, mudancas: StudentUpdate) -> AppResult<Student> {
        simular_latencia(350).await;
        let mut lista = self.lista();
        let aluno = lista
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Aluno '{}' não encontrado", id)))?;
        mudancas.aplicar(aluno);
        Ok(aluno.clone())
    }

    /// Remove e retorna a cópia removida.
    pub async fn delete(&self, id: &str) -> AppResult<Student> {
        simular_latencia(250).await;
        let mut lista = self.lista();
        let indice = lista
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Aluno '{}' não encontrado", id)))?;
        Ok(lista.remove(indice))
    }

    /// Busca por substring (case-insensitive) em nome, email ou turma.
    /// Scan linear da lista toda — aceitável porque n é pequeno e local.
    pub async fn search(&self, termo: &str) -> Vec<Student> {
        simular_latencia(300).await;
        self.lista()
            .iter()
            .filter(|a| a.corresponde_busca(termo))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aluno_semente(id: &str, name: &str, batch: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@exemplo.com", id),
            phone: String::new(),
            parent_phone: String::new(),
            address: String::new(),
            batch: batch.to_string(),
            status: StudentStatus::Active,
            enrollment_date: Utc::now(),
            photo: None,
        }
    }

    #[tokio::test]
    async fn create_acrescenta_exatamente_um() {
        let servico = StudentService::new(vec![aluno_semente("1", "Ashish", "Morning Batch")]);
        let antes = servico.get_all().await.len();

        let criado = servico
            .create(NewStudent {
                name: "Rahul Verma".to_string(),
                email: "rahul@exemplo.com".to_string(),
                ..Default::default()
            })
            .await;

        let depois = servico.get_all().await;
        assert_eq!(depois.len(), antes + 1);
        // O novo elemento fica no fim, com os campos do form e um id fresco
        let ultimo = depois.last().expect("lista não vazia");
        assert_eq!(ultimo.name, "Rahul Verma");
        assert_eq!(ultimo.email, "rahul@exemplo.com");
        assert_eq!(ultimo.id, criado.id);
        assert!(!criado.id.is_empty());
        assert_eq!(criado.status, StudentStatus::Active);
    }

    #[tokio::test]
    async fn update_e_delete_com_id_desconhecido_falham_sem_mexer_na_lista() {
        let servico = StudentService::new(vec![aluno_semente("1", "Ashish", "Morning Batch")]);

        let resultado = servico.update("999", StudentUpdate::default()).await;
        assert!(matches!(resultado, Err(AppError::NotFound(_))));

        let resultado = servico.delete("999").await;
        assert!(matches!(resultado, Err(AppError::NotFound(_))));

        assert_eq!(servico.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_remove_e_retorna_a_copia() {
        let servico = StudentService::new(vec![
            aluno_semente("1", "Ashish", "Morning Batch"),
            aluno_semente("2", "Priya", "Evening Batch"),
        ]);

        let removido = servico.delete("1").await.expect("id existe");
        assert_eq!(removido.name, "Ashish");

        let restantes = servico.get_all().await;
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].id, "2");
    }

    #[tokio::test]
    async fn busca_cobre_nome_email_e_turma() {
        // "sh" apanha "Ashish" pelo nome e "Priya" pela turma "shift-2"
        let servico = StudentService::new(vec![
            aluno_semente("1", "Ashish", "Morning Batch"),
            aluno_semente("2", "Priya", "shift-2"),
            aluno_semente("3", "Kavita", "Evening Batch"),
        ]);

        let resultado = servico.search("sh").await;
        let nomes: Vec<&str> = resultado.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(nomes, vec!["Ashish", "Priya"]);

        // Case-insensitive
        let resultado = servico.search("ASHISH").await;
        assert_eq!(resultado.len(), 1);
    }
}
