//! # Tally インフラ層
//!
//! 口座レコードの永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはストアのインターフェース（[`AccountRepository`]）と、その
//! 具体的な実装を提供する。永続化エンジンの詳細をカプセル化し、ユースケース層を
//! ストアの差し替えから保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: インメモリ実装と PostgreSQL 実装
//! - **ID 採番**: 1 始まりで再利用しない連番の発行
//!
//! ## 依存関係
//!
//! ```text
//! core-api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use tally_infra::{db, repository::{AccountRepository, PostgresAccountRepository}};
//!
//! async fn setup() -> Result<Arc<dyn AccountRepository>, tally_infra::InfraError> {
//!     let pool = db::create_pool("postgres://localhost/tally").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     Ok(Arc::new(PostgresAccountRepository::new(pool)))
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::InfraError;
pub use repository::{AccountRepository, InMemoryAccountRepository, PostgresAccountRepository};
