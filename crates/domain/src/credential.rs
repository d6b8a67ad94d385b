//! # 認証情報の検証
//!
//! ログイン時に提示された認証情報を検証する。
//!
//! ## ドメイン用語
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`CredentialVerifier`] | 認証情報の検証インターフェース |
//! | [`StaticCredentialVerifier`] | 固定の 1 組の認証情報と照合する実装 |
//!
//! 現在の実装は固定の認証情報 1 組のみを受け付ける。ユーザーストアを導入する
//! 場合は [`CredentialVerifier`] の実装を差し替える（ハンドラ側は変更不要）。

use subtle::ConstantTimeEq;

/// 認証情報検証トレイト
///
/// 提示された username / password の組を権威あるストアと照合する。
pub trait CredentialVerifier: Send + Sync {
   /// 認証情報が一致すれば `true` を返す
   fn verify(&self, username: &str, password: &str) -> bool;
}

/// 固定の 1 組の認証情報と照合する実装
///
/// # セキュリティ
///
/// - 比較は定数時間で行い、比較時間を入力に依存させない
/// - Debug 出力ではパスワードの値をマスクする
pub struct StaticCredentialVerifier {
   username: String,
   password: String,
}

impl std::fmt::Debug for StaticCredentialVerifier {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("StaticCredentialVerifier")
         .field("username", &self.username)
         .field("password", &"[REDACTED]")
         .finish()
   }
}

impl StaticCredentialVerifier {
   /// 照合対象の認証情報を指定して作成する
   pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
      Self {
         username: username.into(),
         password: password.into(),
      }
   }
}

impl CredentialVerifier for StaticCredentialVerifier {
   fn verify(&self, username: &str, password: &str) -> bool {
      // username / password の両方を常に比較する（短絡評価しない）
      let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
      let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());

      bool::from(username_ok & password_ok)
   }
}
