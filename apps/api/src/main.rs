//! # VisitGate API サーバー
//!
//! JWT で保護された訪問カウンタ API。
//!
//! ## エンドポイント
//!
//! | ルート | メソッド | 認証 | 説明 |
//! |--------|---------|------|------|
//! | `/ping` | GET | 不要 | Liveness Check |
//! | `/health/ready` | GET | 不要 | Readiness Check（Redis 接続確認） |
//! | `/login` | POST | 不要 | 認証情報を検証しトークンを発行 |
//! | `/count` | GET | Bearer トークン | 訪問カウンタをインクリメント |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `REDIS_URL` | No | Redis 接続 URL（デフォルト: `redis://localhost:6379`） |
//! | `SECRET_KEY` | **Yes** | トークン署名鍵（全インスタンスで共通の値を設定する） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p visitgate-api
//!
//! # 本番環境（環境変数を直接指定）
//! SECRET_KEY=... REDIS_URL=redis://... cargo run -p visitgate-api --release
//! ```

mod app_builder;
mod config;

use std::{net::SocketAddr, sync::Arc};

use config::AppConfig;
use tokio::net::TcpListener;
use visitgate_api::handler::ReadinessState;
use visitgate_domain::{
    Clock, CredentialVerifier, StaticCredentialVerifier, SystemClock, TokenCodec,
};
use visitgate_infra::{RedisVisitCounter, VisitCounter};
use visitgate_shared::observability::TracingConfig;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. Redis への接続
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    visitgate_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = AppConfig::from_env().expect("SECRET_KEY が設定されていません");

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // Redis 接続
    let redis_conn = visitgate_infra::redis::create_connection_manager(&config.redis_url)
        .await
        .expect("Redis への接続に失敗しました");
    tracing::info!("Redis に接続しました");

    // Readiness Check 用 State（redis_conn が move される前に clone）
    let readiness_state = Arc::new(ReadinessState {
        redis_conn: redis_conn.clone(),
    });

    // 依存コンポーネントを初期化
    // 具象型で構築し、State 注入時に必要なトレイトオブジェクトへ coerce する
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let codec = Arc::new(TokenCodec::new(&config.secret_key, clock));
    // TODO: ユーザーストア導入時に StaticCredentialVerifier を差し替える
    let credentials: Arc<dyn CredentialVerifier> =
        Arc::new(StaticCredentialVerifier::new("admin", "password"));
    let counter: Arc<dyn VisitCounter> = Arc::new(RedisVisitCounter::new(redis_conn));

    // ルーター構築
    let app = app_builder::build_app(codec, credentials, counter, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
