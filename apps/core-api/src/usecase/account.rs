//! 口座管理ユースケース
//!
//! 一覧・取得・作成・更新・削除の契約を定義する。
//!
//! - 作成・更新では必ずバリデーションを先に行い、違反があればストアに触れない
//! - 更新ではバリデーションが存在チェックより優先される
//! - 取得・削除で対象が存在しない場合はエラーではなく `None` / `false` を返し、
//!   404 への変換はハンドラが行う

use std::sync::Arc;

use tally_domain::account::{Account, AccountDraft, AccountId};
use tally_infra::repository::AccountRepository;

use crate::error::CoreError;

/// 口座管理ユースケース
pub struct AccountUseCaseImpl {
   account_repository: Arc<dyn AccountRepository>,
}

impl AccountUseCaseImpl {
   pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
      Self { account_repository }
   }

   /// すべての口座を ID 昇順で取得する
   pub async fn list_accounts(&self) -> Result<Vec<Account>, CoreError> {
      let accounts = self.account_repository.get_all().await?;
      Ok(accounts)
   }

   /// ID で口座を取得する
   ///
   /// 存在しない場合は `Ok(None)` を返す。
   pub async fn get_account(&self, id: AccountId) -> Result<Option<Account>, CoreError> {
      let account = self.account_repository.get(id).await?;
      Ok(account)
   }

   /// 口座を作成する
   ///
   /// 1. 候補値をバリデーション（違反があればストアに触れずに返す）
   /// 2. ストアに挿入して ID を採番
   /// 3. 採番済みの口座を返す
   pub async fn create_account(&self, draft: AccountDraft) -> Result<Account, CoreError> {
      let new_account = draft.validate()?;

      let id = self.account_repository.insert(&new_account).await?;
      tracing::info!(account_id = %id, "口座を作成しました");

      Ok(new_account.into_account(id))
   }

   /// 口座を更新する
   ///
   /// 1. 候補値をバリデーション（存在チェックより先）
   /// 2. 既存の口座を取得（なければ NotFound）
   /// 3. 既存の ID に候補値の名前と金額を組み合わせて上書き
   pub async fn update_account(&self, id: AccountId, draft: AccountDraft) -> Result<(), CoreError> {
      let details = draft.validate()?;

      let account = self
         .account_repository
         .get(id)
         .await?
         .ok_or_else(|| CoreError::NotFound(format!("口座が見つかりません: {id}")))?;

      let updated = account.with_details(details);
      self.account_repository.replace(id, &updated).await?;
      tracing::info!(account_id = %id, "口座を更新しました");

      Ok(())
   }

   /// 口座を削除する
   ///
   /// 存在しない場合は `Ok(false)` を返す。
   pub async fn delete_account(&self, id: AccountId) -> Result<bool, CoreError> {
      if self.account_repository.get(id).await?.is_none() {
         tracing::debug!(account_id = %id, "削除対象の口座が存在しません");
         return Ok(false);
      }

      // 存在確認と削除の間に他のリクエストが削除した場合は false になる
      let removed = self.account_repository.remove(id).await?;
      if removed {
         tracing::info!(account_id = %id, "口座を削除しました");
      }

      Ok(removed)
   }
}

#[cfg(test)]
mod tests {
   use async_trait::async_trait;
   use pretty_assertions::assert_eq;
   use rust_decimal_macros::dec;
   use tally_domain::account::{
      ID_PROVIDED_MESSAGE,
      NAME_EMPTY_MESSAGE,
      NewAccount,
      VALUE_MISSING_MESSAGE,
   };
   use tally_infra::{InMemoryAccountRepository, InfraError};

   use super::*;

   // ===== テスト用リポジトリ =====

   /// すべての操作が失敗するリポジトリ
   ///
   /// バリデーション違反時にストアへ到達しないことの検証にも使う。
   struct FailingAccountRepository;

   #[async_trait]
   impl AccountRepository for FailingAccountRepository {
      async fn insert(&self, _account: &NewAccount) -> Result<AccountId, InfraError> {
         Err(InfraError::unexpected("insert failed"))
      }

      async fn get(&self, _id: AccountId) -> Result<Option<Account>, InfraError> {
         Err(InfraError::unexpected("get failed"))
      }

      async fn get_all(&self) -> Result<Vec<Account>, InfraError> {
         Err(InfraError::unexpected("get_all failed"))
      }

      async fn replace(&self, _id: AccountId, _account: &Account) -> Result<(), InfraError> {
         Err(InfraError::unexpected("replace failed"))
      }

      async fn remove(&self, _id: AccountId) -> Result<bool, InfraError> {
         Err(InfraError::unexpected("remove failed"))
      }
   }

   fn sut() -> AccountUseCaseImpl {
      AccountUseCaseImpl::new(Arc::new(InMemoryAccountRepository::new()))
   }

   fn bzwbk() -> AccountDraft {
      AccountDraft::new("BZWBK", dec!(10.12))
   }

   fn mbank() -> AccountDraft {
      AccountDraft::new("mBank", dec!(11130.89))
   }

   fn invalid() -> AccountDraft {
      AccountDraft {
         id: Some(14),
         ..Default::default()
      }
   }

   fn summary(accounts: &[Account]) -> Vec<(i64, String, rust_decimal::Decimal)> {
      accounts
         .iter()
         .map(|a| (a.id().as_i64(), a.name().to_string(), a.value()))
         .collect()
   }

   fn assert_all_messages(err: CoreError) {
      let CoreError::Validation(errors) = err else {
         panic!("Validation エラーであること");
      };
      assert_eq!(
         errors.messages(),
         [ID_PROVIDED_MESSAGE, NAME_EMPTY_MESSAGE, VALUE_MISSING_MESSAGE]
      );
   }

   // ===== list_accounts =====

   #[tokio::test]
   async fn test_空のストアでは空の一覧を返す() {
      let accounts = sut().list_accounts().await.unwrap();
      assert!(accounts.is_empty());
   }

   #[tokio::test]
   async fn test_作成順に連番で一覧を返す() {
      let sut = sut();
      sut.create_account(bzwbk()).await.unwrap();
      sut.create_account(mbank()).await.unwrap();

      let accounts = sut.list_accounts().await.unwrap();

      assert_eq!(
         summary(&accounts),
         vec![
            (1, "BZWBK".to_string(), dec!(10.12)),
            (2, "mBank".to_string(), dec!(11130.89)),
         ]
      );
   }

   // ===== get_account =====

   #[tokio::test]
   async fn test_存在しないidの取得はnoneを返す() {
      let sut = sut();
      sut.create_account(bzwbk()).await.unwrap();

      assert_eq!(sut.get_account(AccountId::new(15)).await.unwrap(), None);
   }

   #[tokio::test]
   async fn test_idで口座を取得できる() {
      let sut = sut();
      let created = sut.create_account(bzwbk()).await.unwrap();

      let found = sut.get_account(created.id()).await.unwrap();

      assert_eq!(found, Some(created));
   }

   // ===== create_account =====

   #[tokio::test]
   async fn test_作成すると採番済みの口座を返す() {
      let created = sut().create_account(bzwbk()).await.unwrap();

      assert_eq!(created.id(), AccountId::new(1));
      assert_eq!(created.name(), "BZWBK");
      assert_eq!(created.value(), dec!(10.12));
   }

   #[tokio::test]
   async fn test_不正な候補値の作成は違反をルール順に返しストアに触れない() {
      let sut = sut();

      let err = sut.create_account(invalid()).await.unwrap_err();

      assert_all_messages(err);
      assert!(sut.list_accounts().await.unwrap().is_empty());
      // 違反で ID が消費されていないこと
      assert_eq!(
         sut.create_account(bzwbk()).await.unwrap().id(),
         AccountId::new(1)
      );
   }

   #[tokio::test]
   async fn test_不正な候補値の作成はストアの障害より先に報告される() {
      let sut = AccountUseCaseImpl::new(Arc::new(FailingAccountRepository));

      let err = sut.create_account(invalid()).await.unwrap_err();

      assert_all_messages(err);
   }

   // ===== update_account =====

   #[tokio::test]
   async fn test_更新するとidを保ったまま名前と金額が変わる() {
      let sut = sut();
      sut.create_account(bzwbk()).await.unwrap();

      sut.update_account(AccountId::new(1), mbank()).await.unwrap();

      let accounts = sut.list_accounts().await.unwrap();
      assert_eq!(
         summary(&accounts),
         vec![(1, "mBank".to_string(), dec!(11130.89))]
      );
   }

   #[tokio::test]
   async fn test_存在しないidの更新はnot_foundを返す() {
      let err = sut()
         .update_account(AccountId::new(16), mbank())
         .await
         .unwrap_err();

      assert!(matches!(err, CoreError::NotFound(_)));
   }

   #[tokio::test]
   async fn test_更新ではバリデーションが存在チェックより優先される() {
      let err = sut()
         .update_account(AccountId::new(16), invalid())
         .await
         .unwrap_err();

      assert_all_messages(err);
   }

   #[tokio::test]
   async fn test_不正な候補値の更新は既存の口座を変えない() {
      let sut = sut();
      let created = sut.create_account(bzwbk()).await.unwrap();

      let draft = AccountDraft {
         name: Some("   ".to_string()),
         value: Some(dec!(1)),
         ..Default::default()
      };
      let err = sut.update_account(created.id(), draft).await.unwrap_err();

      let CoreError::Validation(errors) = err else {
         panic!("Validation エラーであること");
      };
      assert_eq!(errors.messages(), [NAME_EMPTY_MESSAGE]);
      assert_eq!(sut.get_account(created.id()).await.unwrap(), Some(created));
   }

   // ===== delete_account =====

   #[tokio::test]
   async fn test_存在しないidの削除はfalseを返す() {
      assert!(!sut().delete_account(AccountId::new(87)).await.unwrap());
   }

   #[tokio::test]
   async fn test_二回削除するとtrueの次にfalseを返す() {
      let sut = sut();
      let created = sut.create_account(bzwbk()).await.unwrap();

      assert!(sut.delete_account(created.id()).await.unwrap());
      assert!(!sut.delete_account(created.id()).await.unwrap());
   }

   #[tokio::test]
   async fn test_削除しても残りの口座のidは変わらない() {
      let sut = sut();
      for draft in [bzwbk(), mbank(), bzwbk()] {
         sut.create_account(draft).await.unwrap();
      }

      assert!(sut.delete_account(AccountId::new(2)).await.unwrap());

      let ids: Vec<i64> = summary(&sut.list_accounts().await.unwrap())
         .into_iter()
         .map(|(id, _, _)| id)
         .collect();
      assert_eq!(ids, vec![1, 3]);
   }

   // ===== ストアの障害 =====

   #[tokio::test]
   async fn test_ストアの障害はdatabaseエラーとして伝播する() {
      let sut = AccountUseCaseImpl::new(Arc::new(FailingAccountRepository));

      assert!(matches!(
         sut.list_accounts().await.unwrap_err(),
         CoreError::Database(_)
      ));
      assert!(matches!(
         sut.get_account(AccountId::new(1)).await.unwrap_err(),
         CoreError::Database(_)
      ));
      assert!(matches!(
         sut.create_account(bzwbk()).await.unwrap_err(),
         CoreError::Database(_)
      ));
      assert!(matches!(
         sut.update_account(AccountId::new(1), mbank())
            .await
            .unwrap_err(),
         CoreError::Database(_)
      ));
      assert!(matches!(
         sut.delete_account(AccountId::new(1)).await.unwrap_err(),
         CoreError::Database(_)
      ));
   }

   // ===== 仕様上のシナリオ =====

   #[tokio::test]
   async fn test_作成_一覧_更新_削除の一連の流れ() {
      let sut = sut();

      assert_eq!(sut.create_account(bzwbk()).await.unwrap().id(), AccountId::new(1));
      assert_eq!(sut.create_account(mbank()).await.unwrap().id(), AccountId::new(2));
      assert_eq!(
         summary(&sut.list_accounts().await.unwrap()),
         vec![
            (1, "BZWBK".to_string(), dec!(10.12)),
            (2, "mBank".to_string(), dec!(11130.89)),
         ]
      );

      sut.update_account(AccountId::new(1), mbank()).await.unwrap();
      assert_eq!(
         summary(&sut.list_accounts().await.unwrap())[0],
         (1, "mBank".to_string(), dec!(11130.89))
      );

      assert!(sut.delete_account(AccountId::new(2)).await.unwrap());
      let remaining = sut.list_accounts().await.unwrap();
      assert_eq!(remaining.len(), 1);
      assert_eq!(remaining[0].id(), AccountId::new(1));
   }
}
