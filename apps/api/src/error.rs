//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! ## 設計方針
//!
//! - 認証関連のエラーはすべて 401 + 固定メッセージにマッピングする
//! - ストアエラーは 500 として伝播させる（リトライしない、プロセスは落とさない）
//! - 内部エラーの詳細はログにのみ出力し、レスポンスには含めない

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use visitgate_infra::InfraError;
use visitgate_shared::ErrorResponse;

/// API 層で発生するエラー
///
/// ハンドラ・ミドルウェアから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization ヘッダーが存在しない（401）
    #[error("トークンがありません")]
    TokenMissing,

    /// トークンが不正（401）
    ///
    /// 形式不正・署名不一致・期限切れはクライアントに対して区別しない。
    #[error("トークンが不正です")]
    TokenInvalid,

    /// ログインリクエストのフィールドが欠落または空（401）
    #[error("認証情報がありません")]
    CredentialsMissing,

    /// 認証情報が一致しない（401）
    #[error("認証情報が一致しません")]
    CredentialsInvalid,

    /// ストアエラー（500）
    ///
    /// `#[from]` により、インフラ層のエラーから自動変換される。
    #[error("ストアエラー: {0}")]
    Store(#[from] InfraError),

    /// 内部エラー（500）
    #[error("内部エラー: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    /// `ApiError` を HTTP レスポンスに変換する
    ///
    /// # マッピング
    ///
    /// | ApiError | HTTP Status | message |
    /// |----------|-------------|---------|
    /// | TokenMissing | 401 | `Token is missing!` |
    /// | TokenInvalid | 401 | `Token is invalid!` |
    /// | CredentialsMissing | 401 | `Authentication failed` |
    /// | CredentialsInvalid | 401 | `Invalid credentials!` |
    /// | Store / Internal | 500 | `Internal server error` |
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::TokenMissing => (StatusCode::UNAUTHORIZED, ErrorResponse::token_missing()),
            ApiError::TokenInvalid => (StatusCode::UNAUTHORIZED, ErrorResponse::token_invalid()),
            ApiError::CredentialsMissing => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::authentication_failed(),
            ),
            ApiError::CredentialsInvalid => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::invalid_credentials(),
            ),
            ApiError::Store(e) => {
                // 詳細はログにのみ出力（内部情報を漏らさない）
                tracing::error!(
                    error.category = "infrastructure",
                    "ストア操作で内部エラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("内部エラー: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
