//! # Core API エラーハンドリング
//!
//! ユースケースが返すエラーの定義と、axum レスポンスへの変換。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | ボディ |
//! |-----------|----------------|--------|
//! | `Validation` | 400 Bad Request | 違反メッセージの配列（ルール順） |
//! | `BadRequest` | 400 Bad Request | RFC 7807 Problem Details |
//! | `NotFound` | 404 Not Found | RFC 7807 Problem Details |
//! | `Database` | 500 Internal Server Error | RFC 7807 Problem Details（詳細はログのみ） |

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use tally_domain::account::ValidationErrors;
use thiserror::Error;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

/// Core API で発生するエラー
///
/// バリデーションと Not Found はクライアントが回復可能なエラー、
/// `Database` はストアの致命的な失敗を表す。
#[derive(Debug, Error)]
pub enum CoreError {
   /// バリデーションエラー
   #[error("バリデーションエラー: {0}")]
   Validation(#[from] ValidationErrors),

   /// 不正なリクエスト（JSON として読めないボディなど）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] tally_infra::InfraError),
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let (status, title, detail) = match self {
         // 違反メッセージの配列はクライアントとの契約なのでそのまま返す
         CoreError::Validation(errors) => {
            return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
         }
         CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
         CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
         CoreError::Database(e) => {
            // 内部エラーの詳細はログにのみ出力
            tracing::error!(error = ?e, "データベースエラー");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "Internal Server Error",
               "内部エラーが発生しました".to_string(),
            )
         }
      };

      (
         status,
         Json(ErrorResponse {
            error_type: "about:blank".to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
         }),
      )
         .into_response()
   }
}

/// ボディの読み取り失敗は axum 既定の 415/422 ではなく 400 として返す
impl From<JsonRejection> for CoreError {
   fn from(rejection: JsonRejection) -> Self {
      CoreError::BadRequest(rejection.body_text())
   }
}
