//! # ヘルスチェック共通型
//!
//! 死活監視エンドポイントで使用されるレスポンス型を提供する。
//!
//! - `/ping` — Liveness Check（常に `{"status": "ok"}` を返す）
//! - `/health/ready` — Readiness Check（Redis の接続状態を含む）

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Liveness Check レスポンス
///
/// サーバープロセスが稼働していることのみを示す。
/// 依存サービスの状態は含まない（それは Readiness Check の責務）。
#[derive(Debug, Serialize)]
pub struct PingResponse {
   /// 稼働状態（常に `"ok"`）
   pub status: String,
}

impl PingResponse {
   /// 稼働中を示すレスポンスを作成する
   pub fn ok() -> Self {
      Self {
         status: "ok".to_string(),
      }
   }
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
   /// チェック成功
   Ok,
   /// チェック失敗
   Error,
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
   /// 全依存サービスが利用可能
   Ready,
   /// 一部の依存サービスが利用不可
   NotReady,
}

/// Readiness Check レスポンス
///
/// 依存サービスへの接続状態を含むレスポンス型。
/// `status` は全体のステータス、`checks` は個別チェック結果を示す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
   /// 全体のステータス
   pub status: ReadinessStatus,
   /// 個別チェック結果（キー: チェック名、値: ステータス）
   pub checks: HashMap<String, CheckStatus>,
}
