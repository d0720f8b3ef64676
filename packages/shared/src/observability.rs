//! # Observability 基盤
//!
//! tracing subscriber の組み立てと初期化を提供する。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `LOG_FORMAT` | `pretty` | `json`（本番向け）または `pretty`（開発向け） |
//! | `RUST_LOG` | `info,tally=debug` | `EnvFilter` のディレクティブ |
//!
//! 初期化の直後に、サービス名・出力形式・フィルタを 1 件のイベントとして記録する。
//! ログ集約基盤ではこの `service` フィールドでプロセスを識別する。

use std::env;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,tally=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 行 1 イベントの JSON
   Json,
   /// 人間が読みやすい形式
   #[default]
   Pretty,
}

impl LogFormat {
   /// 大文字小文字を区別せずにパースする。未知の値は `None`
   pub fn parse(s: &str) -> Option<Self> {
      match s.trim().to_ascii_lowercase().as_str() {
         "json" => Some(Self::Json),
         "pretty" => Some(Self::Pretty),
         _ => None,
      }
   }

   pub fn as_str(self) -> &'static str {
      match self {
         Self::Json => "json",
         Self::Pretty => "pretty",
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
   /// 起動イベントの `service` フィールドに出力するサービス名
   pub service_name: String,
   pub log_format:   LogFormat,
   /// `EnvFilter` のディレクティブ
   pub filter:       String,
}

impl TracingConfig {
   /// 環境変数から設定を読み取る
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::from_lookup(service_name, |key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み取る
   ///
   /// 不正な `LOG_FORMAT` は stderr に警告を出して `pretty` にフォールバックする
   /// （この時点ではまだ subscriber が存在しない）。
   pub fn from_lookup(
      service_name: impl Into<String>,
      lookup: impl Fn(&str) -> Option<String>,
   ) -> Self {
      let log_format = match lookup("LOG_FORMAT") {
         None => LogFormat::default(),
         Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
            eprintln!("WARNING: unknown LOG_FORMAT={raw:?}, falling back to pretty");
            LogFormat::default()
         }),
      };

      Self {
         service_name: service_name.into(),
         log_format,
         filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
      }
   }
}

/// グローバル subscriber を設定し、起動イベントを記録する
///
/// プロセスで 1 回だけ呼び出すこと。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::util::SubscriberInitExt;

   build_subscriber(config, std::io::stdout).init();
   log_startup(config);
}

#[cfg(feature = "observability")]
fn build_subscriber<W>(
   config: &TracingConfig,
   make_writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
   W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
   use tracing_subscriber::{EnvFilter, Layer as _, fmt, layer::SubscriberExt};

   let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
      eprintln!(
         "WARNING: invalid RUST_LOG={:?} ({e}), falling back to {DEFAULT_FILTER}",
         config.filter
      );
      EnvFilter::new(DEFAULT_FILTER)
   });

   let fmt_layer = match config.log_format {
      LogFormat::Json => fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .with_writer(make_writer)
         .boxed(),
      LogFormat::Pretty => fmt::layer().with_writer(make_writer).boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
}

#[cfg(feature = "observability")]
fn log_startup(config: &TracingConfig) {
   tracing::info!(
      service = %config.service_name,
      log_format = config.log_format.as_str(),
      filter = %config.filter,
      "トレーシングを初期化しました"
   );
}
