//! # 認証ハンドラ
//!
//! ログインエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /login` - 認証情報を検証し、アクセストークン（JWT）を発行する
//!
//! ## 認証フロー
//!
//! 1. リクエストボディの username / password が空でないことを検証
//! 2. [`CredentialVerifier`] で認証情報を照合
//! 3. 一致すれば [`TokenCodec`] でトークンを発行

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use visitgate_domain::{CredentialVerifier, TokenCodec};

use crate::error::ApiError;

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub codec:       Arc<TokenCodec>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

// --- リクエスト/レスポンス型 ---

/// ログインリクエスト
///
/// フィールド欠落は空文字列として扱い、ハンドラ側で「欠落または空」を
/// まとめて検証する（欠落と空文字列でレスポンスを変えない）。
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// --- ハンドラ ---

/// POST /login
///
/// 認証情報を検証し、24 時間有効なアクセストークンを発行する。
///
/// ## レスポンス
///
/// - 200: `{"token": <string>}`
/// - 401 `Authentication failed`: username / password が欠落または空
/// - 401 `Invalid credentials!`: 認証情報が一致しない
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::CredentialsMissing);
    }

    if !state.credentials.verify(&req.username, &req.password) {
        // 認証情報はログに出力しない
        tracing::warn!("ログイン失敗: 認証情報が一致しません");
        return Err(ApiError::CredentialsInvalid);
    }

    let token = state
        .codec
        .issue(&req.username)
        .map_err(|e| ApiError::Internal(e.into()))?;

    tracing::info!(user = %req.username, "ログイン成功: トークンを発行しました");

    Ok(Json(LoginResponse { token }))
}
