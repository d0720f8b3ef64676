//! # 口座（Account）
//!
//! 名前と金額を持つ口座エンティティと、その作成・更新時の候補値を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`AccountId`] | 口座 ID | ストアが採番する 1 始まりの連番。再利用されない |
//! | [`Account`] | 口座 | 採番済みの永続化レコード |
//! | [`AccountDraft`] | 候補値 | クライアントが送ってきた未検証の入力 |
//! | [`NewAccount`] | 検証済み入力 | バリデーションを通過した名前と金額 |
//!
//! ## 設計方針
//!
//! - **ID はストアの所有物**: `Account` はストアからしか組み立てられない想定で、
//!   クライアント入力（`AccountDraft`）に含まれる ID はバリデーションで拒否する
//! - **金額は正確な十進数**: `rust_decimal::Decimal` で保持し、浮動小数点誤差を持ち込まない
//! - **負の金額も許容**: 金額の符号に関するビジネスルールは存在しない

mod validator;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use self::validator::{
   ID_PROVIDED_MESSAGE,
   NAME_EMPTY_MESSAGE,
   VALUE_MISSING_MESSAGE,
   ValidationErrors,
   validate_account,
};

/// 口座 ID
///
/// ストアが採番する非負の連番。1 から始まり、削除後も再利用されない。
/// PostgreSQL の `BIGSERIAL` と互換にするため `i64` をラップする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
   /// 既存の値から口座 ID を作成する
   ///
   /// パスパラメータや DB から取得した値の変換に使用する。
   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// 連番の最初の ID（1）
   pub fn first() -> Self {
      Self(1)
   }

   /// 次の連番を返す
   pub fn next(&self) -> Self {
      Self(self.0 + 1)
   }

   /// 内部の値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

impl fmt::Display for AccountId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 口座エンティティ
///
/// ストアに保存されたレコードの読み取り専用コピー。
/// 変更できるのは名前と金額のみで、ID は不変。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
   id:    AccountId,
   name:  String,
   value: Decimal,
}

impl Account {
   /// 採番済みの値から口座を復元する
   ///
   /// ストア実装から呼び出す。
   pub fn from_store(id: AccountId, name: String, value: Decimal) -> Self {
      Self { id, name, value }
   }

   pub fn id(&self) -> AccountId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn value(&self) -> Decimal {
      self.value
   }

   /// ID を保ったまま名前と金額を差し替えた口座を返す
   pub fn with_details(self, details: NewAccount) -> Self {
      Self {
         id:    self.id,
         name:  details.name,
         value: details.value,
      }
   }
}

/// バリデーション済みの口座入力
///
/// ID を持たない。ストアへの挿入、または既存口座の更新に使用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
   pub name:  String,
   pub value: Decimal,
}

impl NewAccount {
   /// 採番された ID を付与して口座にする
   pub fn into_account(self, id: AccountId) -> Account {
      Account::from_store(id, self.name, self.value)
   }
}

/// 口座の候補値（未検証の入力）
///
/// 作成・更新リクエストのペイロードをそのまま表す。
/// 各フィールドが欠けている可能性があり、`id` はクライアントが誤って
/// 指定した場合に検出するためだけに存在する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub id:    Option<i64>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub name:  Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub value: Option<Decimal>,
}

impl AccountDraft {
   /// 名前と金額を指定して候補値を作成する
   pub fn new(name: impl Into<String>, value: Decimal) -> Self {
      Self {
         id:    None,
         name:  Some(name.into()),
         value: Some(value),
      }
   }

   /// 候補値を検証し、検証済み入力に変換する
   ///
   /// 違反があれば、ルール順（ID、名前、金額）に並んだメッセージを返す。
   pub fn validate(self) -> Result<NewAccount, ValidationErrors> {
      let errors = validate_account(&self);
      match (errors.is_empty(), self.name, self.value) {
         (true, Some(name), Some(value)) => Ok(NewAccount { name, value }),
         _ => Err(errors),
      }
   }
}
