//! # リポジトリ
//!
//! 口座ストアのトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層は `Arc<dyn AccountRepository>` だけに依存する
//! - **実装の切り替え**: 起動時の設定でインメモリ / PostgreSQL を選択する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod account_repository;
pub mod in_memory_account_repository;

pub use account_repository::{AccountRepository, PostgresAccountRepository};
pub use in_memory_account_repository::InMemoryAccountRepository;
