// src/services/mod.rs
pub mod assignment_service;
pub mod attendance_service;
pub mod dashboard_service;
pub mod student_service;
pub mod test_service;

use std::time::Duration;

/// Latência artificial antes de cada operação de serviço.
/// Simula a ida-e-volta de rede de uma API remota. É só cosmética, não há cancelamento.
pub async fn simular_latencia(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
