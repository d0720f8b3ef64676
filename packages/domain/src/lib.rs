//! # Tally ドメイン層
//!
//! 口座（Account）管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 採番済みの識別子を持つ [`Account`](account::Account)
//! - **候補値**: クライアントから受け取った未検証の入力
//!   [`AccountDraft`](account::AccountDraft)
//! - **バリデーション**: 候補値をルールに照らして検証し、違反メッセージを順序付きで返す
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_domain::account::AccountDraft;
//!
//! let draft = AccountDraft {
//!     id:    None,
//!     name:  Some("BZWBK".to_string()),
//!     value: Some(Decimal::new(1012, 2)),
//! };
//!
//! let new_account = draft.validate().expect("有効な候補値であること");
//! assert_eq!(new_account.name, "BZWBK");
//! ```

pub mod account;

pub use account::{Account, AccountDraft, AccountId, NewAccount, ValidationErrors};
