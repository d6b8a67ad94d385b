//! # Redis 接続管理
//!
//! Redis への接続管理を行う。
//!
//! ## ConnectionManager を使用する理由
//!
//! - **自動再接続**: 接続が切断されても自動的に再接続を試みる
//! - **Clone 可能**: 複数のタスクで安全に共有できる
//! - **非同期**: tokio と統合された非同期 API
//!
//! アプリケーション起動時に一度だけ作成し、作成したマネージャを
//! アプリケーション全体で共有する。

use redis::{Client, aio::ConnectionManager};

/// Redis 接続マネージャを作成する
///
/// # 引数
///
/// * `redis_url` - Redis 接続 URL
///   - 形式: `redis://[[username:]password@]host[:port][/database]`
///   - TLS: `rediss://` スキームで TLS 接続
///
/// # エラー
///
/// - URL パースエラー: 不正な URL 形式
/// - 接続エラー: Redis サーバーに接続できない
pub async fn create_connection_manager(
   redis_url: &str,
) -> Result<ConnectionManager, redis::RedisError> {
   let client = Client::open(redis_url)?;
   ConnectionManager::new(client).await
}
