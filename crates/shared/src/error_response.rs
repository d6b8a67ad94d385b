//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 層の責務（shared に axum 依存を入れない）
//! - 公開 API のエラーボディは `message` フィールド 1 つの JSON オブジェクトに固定する
//! - 固定メッセージは便利コンストラクタで提供し、文言のばらつきを排除

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべての失敗レスポンスで統一された形式。
/// クライアントに返すのは `message` のみで、内部情報は含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub message: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }

   /// Authorization ヘッダーが存在しない
   ///
   /// 文言はクライアント互換性のため固定。変更しないこと。
   pub fn token_missing() -> Self {
      Self::new("Token is missing!")
   }

   /// トークンが不正（形式不正・署名不一致・期限切れを区別しない）
   pub fn token_invalid() -> Self {
      Self::new("Token is invalid!")
   }

   /// ログインリクエストのフィールドが欠落または空
   pub fn authentication_failed() -> Self {
      Self::new("Authentication failed")
   }

   /// 認証情報が一致しない
   pub fn invalid_credentials() -> Self {
      Self::new("Invalid credentials!")
   }

   /// 内部エラー
   ///
   /// 詳細はサーバーサイドのログにのみ出力する（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new("Internal server error")
   }
}
