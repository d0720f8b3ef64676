//! # InMemoryAccountRepository
//!
//! プロセス内メモリに口座を保持するリポジトリ。
//! 開発環境や、データベースを用意しない単体構成での既定のストア。
//!
//! ## 設計方針
//!
//! - **インスタンスが採番カウンターを所有**: プロセス全体の static は使わない。
//!   ストアを作り直せば連番も 1 から始まる
//! - **単一のロック**: 採番と挿入を同じ書き込みロックの中で行い、並行挿入でも
//!   ID が重複しないことを保証する
//! - **順序付きマップ**: `BTreeMap` により ID 昇順の一覧取得を自然に満たす

use std::collections::BTreeMap;

use async_trait::async_trait;
use tally_domain::account::{Account, AccountId, NewAccount};
use tokio::sync::RwLock;

use super::AccountRepository;
use crate::error::InfraError;

/// ロックで保護されるストアの状態
#[derive(Debug)]
struct StoreState {
   next_id:  AccountId,
   accounts: BTreeMap<AccountId, Account>,
}

/// インメモリ実装の AccountRepository
#[derive(Debug)]
pub struct InMemoryAccountRepository {
   state: RwLock<StoreState>,
}

impl InMemoryAccountRepository {
   /// 空のストアを作成する
   pub fn new() -> Self {
      Self {
         state: RwLock::new(StoreState {
            next_id:  AccountId::first(),
            accounts: BTreeMap::new(),
         }),
      }
   }
}

impl Default for InMemoryAccountRepository {
   fn default() -> Self {
      Self::new()
   }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
   async fn insert(&self, account: &NewAccount) -> Result<AccountId, InfraError> {
      let mut state = self.state.write().await;

      let id = state.next_id;
      if id.as_i64() == i64::MAX {
         return Err(InfraError::unexpected("口座 ID の採番上限に達しました"));
      }
      state.next_id = id.next();
      state
         .accounts
         .insert(id, account.clone().into_account(id));

      Ok(id)
   }

   async fn get(&self, id: AccountId) -> Result<Option<Account>, InfraError> {
      Ok(self.state.read().await.accounts.get(&id).cloned())
   }

   async fn get_all(&self) -> Result<Vec<Account>, InfraError> {
      Ok(self.state.read().await.accounts.values().cloned().collect())
   }

   async fn replace(&self, id: AccountId, account: &Account) -> Result<(), InfraError> {
      self.state.write().await.accounts.insert(id, account.clone());
      Ok(())
   }

   async fn remove(&self, id: AccountId) -> Result<bool, InfraError> {
      Ok(self.state.write().await.accounts.remove(&id).is_some())
   }
}
