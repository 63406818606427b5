//! ClassCraft — dashboard de gestão de turma (single-tenant).
//!
//! Lista de alunos, marcação de presença numa grelha mensal e lançamento de
//! notas, renderizados no servidor (axum + askama) sobre serviços de entidade
//! em memória com latência artificial.
//!
//! # Módulos
//! - `error`: tipo de erro unificado da aplicação
//! - `fixtures`: dados iniciais embutidos (JSON)
//! - `models`: entidades e lógica pura (bandas de nota, filtro de busca)
//! - `services`: um serviço CRUD por entidade + agregação do dashboard
//! - `state`: estado partilhado do axum
//! - `templates`: structs Askama das páginas
//! - `web`: handlers e rotas

pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod web;
