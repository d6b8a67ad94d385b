//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! - `/ping` — Liveness Check（常に `{"status": "ok"}` を返す）
//! - `/health/ready` — Readiness Check（Redis の接続状態を確認）
//!
//! レスポンス型は [`visitgate_shared::PingResponse`] / [`visitgate_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use redis::aio::ConnectionManager;
use visitgate_shared::{CheckStatus, PingResponse, ReadinessResponse, ReadinessStatus};

/// GET /ping
///
/// サーバープロセスが稼働していることを確認するエンドポイント。
/// ヘッダーやボディに関係なく、常に 200 と `{"status": "ok"}` を返す。
/// Redis への接続は確認しない（それは `/health/ready` の責務）。
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::ok())
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub redis_conn: ConnectionManager,
}

/// GET /health/ready
///
/// Redis の接続状態を確認する。
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let redis_result = check_redis(state.redis_conn.clone()).await;

    let mut checks = HashMap::new();
    checks.insert("redis".to_string(), redis_result);

    let all_ok = checks.values().all(|s| matches!(s, CheckStatus::Ok));
    let status = if all_ok {
        ReadinessStatus::Ready
    } else {
        ReadinessStatus::NotReady
    };
    let http_status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(ReadinessResponse { status, checks }))
}

/// Redis への接続を PING で確認する（タイムアウト: 5 秒）
async fn check_redis(mut conn: ConnectionManager) -> CheckStatus {
    match tokio::time::timeout(
        Duration::from_secs(5),
        redis::cmd("PING").query_async::<String>(&mut conn),
    )
    .await
    {
        Ok(Ok(_)) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: redis ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: redis check timed out");
            CheckStatus::Error
        }
    }
}
