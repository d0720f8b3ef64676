//! # Core API ライブラリ
//!
//! 口座管理 API のユースケース・ハンドラ・ルーター構築を公開する。
//! 統合テストからルーターを直接組み立てるために使う。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
