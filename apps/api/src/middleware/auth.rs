//! # 認証ミドルウェア
//!
//! Bearer トークンを検証し、保護エンドポイントへのアクセスを制御する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let guard_state = AuthGuardState { codec: codec.clone() };
//!
//! Router::new()
//!     .route("/count", get(count))
//!     .layer(from_fn_with_state(guard_state, require_token))
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use visitgate_domain::TokenCodec;

use crate::error::ApiError;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthGuardState {
    pub codec: Arc<TokenCodec>,
}

/// Bearer トークン検証ミドルウェア
///
/// `Authorization` ヘッダーからトークンを抽出して検証する。
///
/// - ヘッダーが存在しない場合は 401 `Token is missing!` を返す
/// - `"Bearer "` プレフィックスがない、またはトークン検証に失敗した場合は
///   401 `Token is invalid!` を返す（失敗種別はクライアントに対して区別しない）
/// - 検証成功時のみ後続のハンドラを実行する
///
/// プレフィックスは大文字小文字を区別し、空白 1 つのみ許容する。
/// 検証済みクレームはハンドラに引き渡さない（カウンタはユーザー単位ではないため）。
/// このミドルウェアは共有状態を変更しない。
pub async fn require_token(
    State(state): State<AuthGuardState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(header_value) = request.headers().get(header::AUTHORIZATION) else {
        return ApiError::TokenMissing.into_response();
    };

    let Ok(header_str) = header_value.to_str() else {
        return ApiError::TokenInvalid.into_response();
    };

    let Some(token) = header_str.strip_prefix("Bearer ") else {
        return ApiError::TokenInvalid.into_response();
    };

    if let Err(e) = state.codec.verify(token) {
        tracing::debug!(reason = %e, "トークン検証失敗");
        return ApiError::TokenInvalid.into_response();
    }

    next.run(request).await
}
