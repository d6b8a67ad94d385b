//! # API アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use visitgate_api::{
    handler::{AuthState, CountState, ReadinessState, count, login, ping, readiness_check},
    middleware::{AuthGuardState, require_token},
};
use visitgate_domain::{CredentialVerifier, TokenCodec};
use visitgate_infra::VisitCounter;
use visitgate_shared::observability::{MakeRequestUuidV7, make_request_span};

/// State の組み立てとルーター定義を行う
///
/// インフラ初期化済みの依存を受け取り、State → Router の順に組み立てる。
pub(crate) fn build_app(
    codec: Arc<TokenCodec>,
    credentials: Arc<dyn CredentialVerifier>,
    counter: Arc<dyn VisitCounter>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let auth_state = Arc::new(AuthState {
        codec: codec.clone(),
        credentials,
    });
    let count_state = Arc::new(CountState { counter });
    let guard_state = AuthGuardState { codec };

    // ルーター構築
    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
    Router::new()
        .route("/ping", get(ping))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/login", post(login))
                .with_state(auth_state),
        )
        // 保護エンドポイント（Bearer トークン検証ミドルウェア適用）
        .merge(
            Router::new()
                .route("/count", get(count))
                .layer(from_fn_with_state(guard_state, require_token))
                .with_state(count_state),
        )
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
