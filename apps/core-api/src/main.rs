//! # Core API サーバー
//!
//! 口座の作成・取得・更新・削除を提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TALLY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TALLY_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `STORAGE_BACKEND` | No | `memory`（デフォルト）または `postgres` |
//! | `DATABASE_URL` | `postgres` 時のみ | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,tally=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # インメモリストア
//! cargo run -p tally-core-api
//!
//! # PostgreSQL
//! STORAGE_BACKEND=postgres DATABASE_URL=postgres://localhost/tally cargo run -p tally-core-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tally_core_api::{
   app_builder::build_app,
   config::{CoreApiConfig, StorageConfig},
};
use tally_infra::{
   db,
   repository::{AccountRepository, InMemoryAccountRepository, PostgresAccountRepository},
};
use tally_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Core API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(&TracingConfig::from_env("tally-core-api"));

   let config = CoreApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Core API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let account_repository = build_repository(&config.storage).await?;
   let app = build_app(account_repository);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("バインドアドレスが不正です")?;
   let listener = TcpListener::bind(addr)
      .await
      .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
   tracing::info!("Core API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}

/// 設定に応じたストア実装を初期化する
async fn build_repository(storage: &StorageConfig) -> anyhow::Result<Arc<dyn AccountRepository>> {
   match storage {
      StorageConfig::Memory => {
         tracing::info!("インメモリストアを使用します（再起動でデータは消えます）");
         Ok(Arc::new(InMemoryAccountRepository::new()))
      }
      StorageConfig::Postgres { database_url } => {
         let pool = db::create_pool(database_url)
            .await
            .context("データベース接続に失敗しました")?;
         tracing::info!("データベースに接続しました");

         db::run_migrations(&pool)
            .await
            .context("マイグレーションの適用に失敗しました")?;

         Ok(Arc::new(PostgresAccountRepository::new(pool)))
      }
   }
}
