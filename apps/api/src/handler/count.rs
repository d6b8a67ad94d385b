//! # 訪問カウンタハンドラ
//!
//! 保護エンドポイント `/count` を提供する。
//! 認証ミドルウェア（`middleware::require_token`）の通過後に呼び出される。

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use visitgate_infra::{VISITS_KEY, VisitCounter};

use crate::error::ApiError;

/// カウンタハンドラの共有状態
pub struct CountState {
    pub counter: Arc<dyn VisitCounter>,
}

/// 訪問回数レスポンス
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub visits: i64,
}

/// GET /count
///
/// 訪問カウンタをアトミックにインクリメントし、増加後の値を返す。
/// カウンタはユーザー単位ではなく全リクエストで共有される
/// （ミドルウェアで検証済みのユーザー情報はここでは使用しない）。
///
/// ストア障害時は 500 を返す（リトライしない）。
#[tracing::instrument(skip_all)]
pub async fn count(State(state): State<Arc<CountState>>) -> Result<Json<CountResponse>, ApiError> {
    let visits = state.counter.increment(VISITS_KEY).await?;

    Ok(Json(CountResponse { visits }))
}
