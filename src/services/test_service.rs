// src/services/test_service.rs
use crate::{
    error::{AppError, AppResult},
    models::test::{NewTest, Score, Test, TestUpdate},
    services::simular_latencia,
};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Serviço de testes e notas.
#[derive(Clone)]
pub struct TestService {
    data: Arc<Mutex<Vec<Test>>>,
}

impl TestService {
    pub fn new(seed: Vec<Test>) -> Self {
        Self {
            data: Arc::new(Mutex::new(seed)),
        }
    }

    fn lista(&self) -> MutexGuard<'_, Vec<Test>> {
        self.data.lock().expect("lock de testes envenenado")
    }

    pub async fn get_all(&self) -> Vec<Test> {
        simular_latencia(300).await;
        self.lista().clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Test> {
        simular_latencia(200).await;
        self.lista().iter().find(|t| t.id == id).cloned()
    }

    /// Cria um teste. As notas iniciais vêm prontas do handler
    /// (uma entrada a zero por aluno existente no momento da criação).
    pub async fn create(&self, novo: NewTest) -> Test {
        simular_latencia(400).await;
        let teste = Test {
            id: Uuid::new_v4().to_string(),
            name: novo.name,
            subject: novo.subject,
            date: novo.date,
            total_marks: novo.total_marks,
            scores: novo.scores,
        };
        tracing::debug!("Criando teste '{}' ({})", teste.name, teste.id);
        self.lista().push(teste.clone());
        teste
    }

    pub async fn update(&self, id: &str, mudancas: TestUpdate) -> AppResult<Test> {
        simular_latencia(350).await;
        let mut lista = self.lista();
        let teste = lista
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Teste '{}' não encontrado", id)))?;
        if let Some(v) = mudancas.name {
            teste.name = v;
        }
        if let Some(v) = mudancas.subject {
            teste.subject = v;
        }
        if let Some(v) = mudancas.date {
            teste.date = v;
        }
        if let Some(v) = mudancas.total_marks {
            teste.total_marks = v;
        }
        if let Some(v) = mudancas.scores {
            teste.scores = v;
        }
        Ok(teste.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<Test> {
        simular_latencia(250).await;
        let mut lista = self.lista();
        let indice = lista
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Teste '{}' não encontrado", id)))?;
        Ok(lista.remove(indice))
    }

    /// Upsert da nota de um aluno num teste, preservando a ordem das entradas.
    /// Alunos matriculados depois da criação do teste ganham a sua entrada aqui,
    /// na primeira vez que a nota for lançada.
    pub async fn update_score(
        &self,
        test_id: &str,
        student_id: &str,
        marks_obtained: u32,
    ) -> AppResult<Test> {
        simular_latencia(200).await;
        let mut lista = self.lista();
        let teste = lista
            .iter_mut()
            .find(|t| t.id == test_id)
            .ok_or_else(|| AppError::NotFound(format!("Teste '{}' não encontrado", test_id)))?;

        match teste.scores.iter_mut().find(|s| s.student_id == student_id) {
            Some(nota) => nota.marks_obtained = marks_obtained,
            None => teste.scores.push(Score {
                student_id: student_id.to_string(),
                marks_obtained,
            }),
        }
        Ok(teste.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test::Grade;
    use chrono::NaiveDate;

    fn novo_teste(total: u32, scores: Vec<Score>) -> NewTest {
        NewTest {
            name: "Prova de Matemática".to_string(),
            subject: "Matemática".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("data válida"),
            total_marks: total,
            scores,
        }
    }

    #[tokio::test]
    async fn lancar_nota_e_calcular_banda() {
        // Cenário: teste com total 50, nota 45 para o aluno X -> 90% -> A+
        let servico = TestService::new(vec![]);
        let criado = servico
            .create(novo_teste(
                50,
                vec![Score {
                    student_id: "x".to_string(),
                    marks_obtained: 0,
                }],
            ))
            .await;

        servico
            .update_score(&criado.id, "x", 45)
            .await
            .expect("teste existe");

        let lido = servico.get_by_id(&criado.id).await.expect("teste existe");
        assert_eq!(lido.nota_de("x"), Some(45));
        assert_eq!(Grade::calcular(45, lido.total_marks), Some(Grade::APlus));
    }

    #[tokio::test]
    async fn update_score_insere_entrada_para_aluno_sem_nota() {
        let servico = TestService::new(vec![]);
        let criado = servico
            .create(novo_teste(
                100,
                vec![
                    Score { student_id: "a".to_string(), marks_obtained: 10 },
                    Score { student_id: "b".to_string(), marks_obtained: 20 },
                ],
            ))
            .await;

        // Aluno "c" entrou depois da criação do teste: primeira nota cria a entrada no fim
        let atualizado = servico
            .update_score(&criado.id, "c", 30)
            .await
            .expect("teste existe");

        let ids: Vec<&str> = atualizado.scores.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Atualizar uma entrada existente não mexe na ordem
        let atualizado = servico
            .update_score(&criado.id, "a", 99)
            .await
            .expect("teste existe");
        let ids: Vec<&str> = atualizado.scores.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(atualizado.nota_de("a"), Some(99));
    }

    #[tokio::test]
    async fn update_score_em_teste_desconhecido_falha() {
        let servico = TestService::new(vec![]);
        let resultado = servico.update_score("nope", "x", 10).await;
        assert!(matches!(resultado, Err(AppError::NotFound(_))));
    }
}
