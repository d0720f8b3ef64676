//! # インフラ層エラー定義
//!
//! データベースなど永続化エンジンとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` などを `#[from]` でラップし、`?` で伝播できるようにする
//! - **ドメインエラーとの分離**: バリデーションや Not Found はここに含めない。
//!   このエラーはクライアントが回復できない致命的な状態を表す
//! - **ログ可能性**: `Debug` によりログ出力時に詳細情報を表示

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// API 層で 500 Internal Server Error に変換される。
#[derive(Debug, Error)]
pub enum InfraError {
   /// データベースエラー
   ///
   /// SQL クエリの実行失敗、接続エラー、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[from] sqlx::Error),

   /// マイグレーションエラー
   #[error("マイグレーションエラー: {0}")]
   Migration(#[from] sqlx::migrate::MigrateError),

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー（採番上限の超過など）。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self::Unexpected(msg.into())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_from_sqlx_errorでdatabaseに変換される() {
      let err: InfraError = sqlx::Error::RowNotFound.into();
      assert!(matches!(err, InfraError::Database(_)));
   }

   #[test]
   fn test_unexpectedのdisplayはメッセージを含む() {
      let err = InfraError::unexpected("採番できません");
      assert_eq!(err.to_string(), "予期しないエラー: 採番できません");
   }

   #[test]
   fn test_sourceはラップしたエラーを返す() {
      use std::error::Error;

      let err: InfraError = sqlx::Error::RowNotFound.into();
      assert!(err.source().is_some());
      assert!(InfraError::unexpected("x").source().is_none());
   }
}
