//! # アクセストークン（JWT）
//!
//! HMAC-SHA256 で署名された有効期限付きトークンの発行と検証を行う。
//!
//! ## トークン設計
//!
//! | 項目 | 値 |
//! |-----|-----|
//! | アルゴリズム | HS256 |
//! | クレーム | `{"user": <username>, "exp": <unix秒>}` |
//! | 有効期限 | 発行から 24 時間 |
//!
//! トークンはステートレスで、サーバー側にセッション状態を持たない。
//! 有効性は署名と `exp` のみから毎回再計算される（失効リストなし）。
//! 署名鍵をローテーションすると発行済みトークンはすべて無効になる。

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{
   Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;

/// トークンの有効期間（時間）
pub const TOKEN_TTL_HOURS: i64 = 24;

/// トークンに含まれるクレーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
   /// 認証されたユーザー名
   pub user: String,
   /// 有効期限（Unix 秒）
   pub exp:  i64,
}

/// トークン検証エラー
///
/// 3 種別は内部でのみ区別される。HTTP レスポンスではいずれも
/// 同一の「トークン不正」として扱う（API 層の責務）。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
   /// 有効期限切れ
   #[error("トークンの有効期限が切れています")]
   Expired,

   /// 署名が一致しない
   #[error("トークンの署名が不正です")]
   InvalidSignature,

   /// トークンとして解釈できない（構造・エンコーディング不正）
   #[error("トークンの形式が不正です")]
   Malformed,
}

/// トークンの発行と検証を行うコーデック
///
/// 署名鍵は構築時に固定され、以降は読み取り専用。
/// 発行と検証で同一の鍵を使用する必要がある（全サーバーインスタンスで共有）。
pub struct TokenCodec {
   encoding_key: EncodingKey,
   decoding_key: DecodingKey,
   clock:        Arc<dyn Clock>,
}

impl TokenCodec {
   /// 署名鍵と時刻プロバイダを指定してコーデックを作成する
   pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Self {
      Self {
         encoding_key: EncodingKey::from_secret(secret.as_bytes()),
         decoding_key: DecodingKey::from_secret(secret.as_bytes()),
         clock,
      }
   }

   /// トークンを発行する
   ///
   /// `exp` は注入された時刻プロバイダの現在時刻 + 24 時間。
   /// 計算以外の副作用はない。
   pub fn issue(&self, username: &str) -> Result<String, TokenError> {
      let exp = (self.clock.now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
      let claims = Claims {
         user: username.to_string(),
         exp,
      };

      encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
         .map_err(|_| TokenError::Malformed)
   }

   /// トークンを検証し、クレームを返す
   ///
   /// 署名と `exp` を検証する。`exp` の判定は検証時点のシステム時刻に対して行われる
   /// （jsonwebtoken は時刻注入をサポートしない。固定時刻でのテストは発行側で行う）。
   pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
      let mut validation = Validation::new(Algorithm::HS256);
      validation.set_required_spec_claims(&["exp"]);

      decode::<Claims>(token, &self.decoding_key, &validation)
         .map(|data| data.claims)
         .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
         })
   }
}
