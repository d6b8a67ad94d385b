//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/config) の原則に従い、
//! すべての設定を環境変数から読み込む。設定は起動時に一度だけ構築し、
//! 以降は読み取り専用のオブジェクトとして各コンポーネントに渡す。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `5000` | ポート番号 |
//! | `REDIS_URL` | No | `redis://localhost:6379` | Redis 接続 URL |
//! | `SECRET_KEY` | **Yes** | - | トークン署名鍵 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//!
//! `SECRET_KEY` は発行と検証で同一の値を使用する必要がある。
//! 複数インスタンスで運用する場合は全インスタンスで同じ値を設定すること
//! （ローテーションすると発行済みトークンはすべて無効になる）。

use std::env;

/// API サーバーの設定
#[derive(Clone)]
pub struct AppConfig {
   /// バインドアドレス
   pub host:       String,
   /// ポート番号
   pub port:       u16,
   /// Redis 接続 URL
   pub redis_url:  String,
   /// トークン署名鍵
   pub secret_key: String,
}

impl std::fmt::Debug for AppConfig {
   // 署名鍵はログに出力しない
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("AppConfig")
         .field("host", &self.host)
         .field("port", &self.port)
         .field("redis_url", &self.redis_url)
         .field("secret_key", &"[REDACTED]")
         .finish()
   }
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 必須の環境変数（`SECRET_KEY`）が設定されていない場合はエラーを返す。
   /// オプションの環境変数はデフォルト値を使用する。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:       env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:       env::var("API_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000),
         redis_url:  env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
         secret_key: env::var("SECRET_KEY")?,
      })
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_debug出力に署名鍵が含まれない() {
      let config = AppConfig {
         host:       "0.0.0.0".to_string(),
         port:       5000,
         redis_url:  "redis://localhost:6379".to_string(),
         secret_key: "supersecretkey".to_string(),
      };

      let debug = format!("{config:?}");

      assert!(debug.contains("[REDACTED]"));
      assert!(!debug.contains("supersecretkey"));
   }
}
