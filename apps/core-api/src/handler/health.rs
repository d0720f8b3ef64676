//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ロードバランサーやコンテナオーケストレーターからの死活確認に使う。
//! ストアへの問い合わせは行わない。

use axum::Json;
use tally_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
