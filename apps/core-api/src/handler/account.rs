//! # 口座ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /v1/accounts` - 口座一覧（ID 昇順）
//! - `GET /v1/accounts/{id}` - 口座取得
//! - `POST /v1/accounts` - 口座作成（採番された ID のみ返す）
//! - `PUT /v1/accounts/{id}` - 口座更新（ボディなし）
//! - `DELETE /v1/accounts/{id}` - 口座削除（ボディなし）
//!
//! 作成・更新のボディは [`AccountDraft`] をそのまま受け取る。
//! `id` や必須項目の欠落はデシリアライズでは弾かず、ユースケースの
//! バリデーションで違反メッセージとして返す。JSON として読めない、
//! または型の合わないボディは `CoreError::BadRequest`（400）になる。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tally_domain::account::{Account, AccountDraft, AccountId};

use crate::{error::CoreError, usecase::AccountUseCaseImpl};

/// 口座 API の共有状態
pub struct AccountState {
   pub usecase: AccountUseCaseImpl,
}

// --- レスポンス型 ---

/// 口座 DTO
#[derive(Debug, Serialize)]
pub struct AccountDto {
   pub id:    i64,
   pub name:  String,
   pub value: Decimal,
}

impl From<Account> for AccountDto {
   fn from(account: Account) -> Self {
      Self {
         id:    account.id().as_i64(),
         name:  account.name().to_string(),
         value: account.value(),
      }
   }
}

/// 口座作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreatedAccountDto {
   pub id: i64,
}

fn not_found(id: AccountId) -> CoreError {
   CoreError::NotFound(format!("口座が見つかりません: {id}"))
}

// --- ハンドラ ---

/// GET /v1/accounts
pub async fn list_accounts(
   State(state): State<Arc<AccountState>>,
) -> Result<impl IntoResponse, CoreError> {
   let accounts = state.usecase.list_accounts().await?;

   let items: Vec<AccountDto> = accounts.into_iter().map(AccountDto::from).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// GET /v1/accounts/{id}
pub async fn get_account(
   State(state): State<Arc<AccountState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let id = AccountId::new(id);

   let account = state
      .usecase
      .get_account(id)
      .await?
      .ok_or_else(|| not_found(id))?;

   Ok((StatusCode::OK, Json(AccountDto::from(account))))
}

/// POST /v1/accounts
///
/// ## レスポンス
///
/// - `200 OK`: `{"id": <採番された ID>}`
/// - `400 Bad Request`: 違反メッセージの配列、または読めないボディ
pub async fn create_account(
   State(state): State<Arc<AccountState>>,
   payload: Result<Json<AccountDraft>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Json(draft) = payload?;
   let account = state.usecase.create_account(draft).await?;

   Ok((
      StatusCode::OK,
      Json(CreatedAccountDto {
         id: account.id().as_i64(),
      }),
   ))
}

/// PUT /v1/accounts/{id}
///
/// ## レスポンス
///
/// - `200 OK`: ボディなし
/// - `400 Bad Request`: 違反メッセージの配列（存在チェックより優先）
/// - `404 Not Found`: 口座が見つからない
pub async fn update_account(
   State(state): State<Arc<AccountState>>,
   Path(id): Path<i64>,
   payload: Result<Json<AccountDraft>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Json(draft) = payload?;
   state
      .usecase
      .update_account(AccountId::new(id), draft)
      .await?;

   Ok(StatusCode::OK)
}

/// DELETE /v1/accounts/{id}
///
/// ## レスポンス
///
/// - `200 OK`: ボディなし
/// - `404 Not Found`: 口座が見つからない
pub async fn delete_account(
   State(state): State<Arc<AccountState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let id = AccountId::new(id);

   if !state.usecase.delete_account(id).await? {
      return Err(not_found(id));
   }

   Ok(StatusCode::OK)
}
