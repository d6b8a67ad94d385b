//! # インフラ層エラー定義
//!
//! 外部ストアとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `redis::RedisError` を `#[from]` でラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - API 層でこのエラーを 5xx レスポンスに変換する（リトライはしない）

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
   /// Redis エラー
   ///
   /// Redis への接続失敗、コマンド実行エラーなど。
   #[error("Redis エラー: {0}")]
   Redis(#[from] redis::RedisError),

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}
