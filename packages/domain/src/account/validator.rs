//! # 口座バリデーション
//!
//! 候補値（[`AccountDraft`]）を 3 つのルールで検証する。
//! ルールは互いに独立に評価し、最初の違反で打ち切らずにすべての違反を収集する。
//!
//! | 順序 | ルール | メッセージ |
//! |------|--------|-----------|
//! | 1 | ID が指定されていない | [`ID_PROVIDED_MESSAGE`] |
//! | 2 | 名前が空でない | [`NAME_EMPTY_MESSAGE`] |
//! | 3 | 金額が指定されている | [`VALUE_MISSING_MESSAGE`] |
//!
//! メッセージの並び順はクライアントが参照する契約であり、変更してはならない。

use serde::Serialize;
use thiserror::Error;

use super::AccountDraft;

pub const ID_PROVIDED_MESSAGE: &str =
   "Account id must not be provided, it's generated by the application";
pub const NAME_EMPTY_MESSAGE: &str = "Account name must not be empty";
pub const VALUE_MISSING_MESSAGE: &str = "Account value must be specified";

/// バリデーション違反メッセージの一覧
///
/// ルール順に並んだ人間可読なメッセージ。空であれば候補値は有効。
/// JSON では文字列の配列としてそのままシリアライズされる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   pub fn len(&self) -> usize {
      self.0.len()
   }

   /// メッセージをルール順に取得する
   pub fn messages(&self) -> &[String] {
      &self.0
   }
}

/// 候補値を検証し、違反メッセージをルール順に返す
pub fn validate_account(draft: &AccountDraft) -> ValidationErrors {
   let mut errors = Vec::new();

   validate_id_not_provided(draft, &mut errors);
   validate_name(draft, &mut errors);
   validate_value(draft, &mut errors);

   ValidationErrors(errors)
}

// --- バリデーションルール ---

/// ルール 1: ID はストアが採番するため、クライアントからの指定を拒否する
///
/// `0` は未指定と同じ既定値として扱う。
fn validate_id_not_provided(draft: &AccountDraft, errors: &mut Vec<String>) {
   if draft.id.is_some_and(|id| id != 0) {
      errors.push(ID_PROVIDED_MESSAGE.to_string());
   }
}

/// ルール 2: 名前は空白のみも不可
fn validate_name(draft: &AccountDraft, errors: &mut Vec<String>) {
   let is_blank = draft
      .name
      .as_deref()
      .is_none_or(|name| name.trim().is_empty());
   if is_blank {
      errors.push(NAME_EMPTY_MESSAGE.to_string());
   }
}

/// ルール 3: 金額は必須（ゼロや負数は可）
fn validate_value(draft: &AccountDraft, errors: &mut Vec<String>) {
   if draft.value.is_none() {
      errors.push(VALUE_MISSING_MESSAGE.to_string());
   }
}
