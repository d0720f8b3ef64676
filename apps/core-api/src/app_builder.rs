//! # Core API アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はストアの初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tally_infra::repository::AccountRepository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
   handler::{
      AccountState,
      create_account,
      delete_account,
      get_account,
      health_check,
      list_accounts,
      update_account,
   },
   usecase::AccountUseCaseImpl,
};

/// ルーターを構築する
///
/// すべてのルートに CORS（全オリジン許可）と HTTP トレースを適用する。
pub fn build_app(account_repository: Arc<dyn AccountRepository>) -> Router {
   let account_state = Arc::new(AccountState {
      usecase: AccountUseCaseImpl::new(account_repository),
   });

   let accounts = Router::new()
      .route("/v1/accounts", get(list_accounts).post(create_account))
      // 末尾スラッシュ付きの一覧取得も受け付ける
      .route("/v1/accounts/", get(list_accounts))
      .route(
         "/v1/accounts/{id}",
         get(get_account).put(update_account).delete(delete_account),
      )
      .with_state(account_state);

   Router::new()
      .route("/health", get(health_check))
      .merge(accounts)
      .layer(CorsLayer::permissive())
      .layer(TraceLayer::new_for_http())
}
