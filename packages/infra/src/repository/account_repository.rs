//! # AccountRepository
//!
//! 口座レコードの永続化と ID 採番を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `insert` は ID を持たない [`NewAccount`] を受け取り、
//!   採番した [`AccountId`] を返す。ID は 1 から始まり、削除後も再利用しない
//! - **存在チェックは呼び出し側**: `replace` は対象が存在する前提。存在確認は
//!   ユースケース層が `get` で行う
//! - **原子性**: 各メソッドは互いに原子的であり、書きかけのレコードを観測させない

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tally_domain::account::{Account, AccountId, NewAccount};

use crate::error::InfraError;

/// 口座リポジトリトレイト
///
/// 採番付きのキー・バリューストアとして振る舞う。
#[async_trait]
pub trait AccountRepository: Send + Sync {
   /// 口座を挿入し、採番した ID を返す
   ///
   /// 並行に呼び出されても同じ ID を返すことはない。
   async fn insert(&self, account: &NewAccount) -> Result<AccountId, InfraError>;

   /// ID で口座を取得する
   ///
   /// 存在しない場合は `Ok(None)` を返す（エラーにはしない）。
   async fn get(&self, id: AccountId) -> Result<Option<Account>, InfraError>;

   /// すべての口座を ID の昇順で取得する
   async fn get_all(&self) -> Result<Vec<Account>, InfraError>;

   /// 既存の口座を上書きする
   ///
   /// `id` が存在することは呼び出し側が保証する。
   async fn replace(&self, id: AccountId, account: &Account) -> Result<(), InfraError>;

   /// 口座を削除し、削除が行われたかを返す
   async fn remove(&self, id: AccountId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の AccountRepository
///
/// `accounts` テーブルを使用する。ID は `BIGSERIAL` のシーケンスで採番されるため、
/// 並行挿入でも重複せず、削除後も再利用されない。
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
   pool: PgPool,
}

impl PostgresAccountRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

/// `accounts` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
   id:    i64,
   name:  String,
   value: Decimal,
}

impl From<AccountRow> for Account {
   fn from(row: AccountRow) -> Self {
      Account::from_store(AccountId::new(row.id), row.name, row.value)
   }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
   async fn insert(&self, account: &NewAccount) -> Result<AccountId, InfraError> {
      let id: i64 = sqlx::query_scalar(
         r#"
            INSERT INTO accounts (name, value)
            VALUES ($1, $2)
            RETURNING id
            "#,
      )
      .bind(&account.name)
      .bind(account.value)
      .fetch_one(&self.pool)
      .await?;

      Ok(AccountId::new(id))
   }

   async fn get(&self, id: AccountId) -> Result<Option<Account>, InfraError> {
      let row = sqlx::query_as::<_, AccountRow>(
         r#"
            SELECT id, name, value
            FROM accounts
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Account::from))
   }

   async fn get_all(&self) -> Result<Vec<Account>, InfraError> {
      let rows = sqlx::query_as::<_, AccountRow>(
         r#"
            SELECT id, name, value
            FROM accounts
            ORDER BY id ASC
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Account::from).collect())
   }

   async fn replace(&self, id: AccountId, account: &Account) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE accounts
            SET name = $2, value = $3
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .bind(account.name())
      .bind(account.value())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   async fn remove(&self, id: AccountId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM accounts
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}
