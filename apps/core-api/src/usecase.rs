//! # ユースケース層
//!
//! Core API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、判断はユースケースに集約
//! - **呼び出し間で状態を持たない**: 各操作はストアとの 1 往復で完結する

pub mod account;

pub use account::AccountUseCaseImpl;
