//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、判断はユースケースに委譲する

pub mod account;
pub mod health;

pub use account::{
   AccountState,
   create_account,
   delete_account,
   get_account,
   list_accounts,
   update_account,
};
pub use health::health_check;
