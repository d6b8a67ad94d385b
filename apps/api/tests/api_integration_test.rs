//! # API 統合テスト
//!
//! ルーター全体を組み立て、エンドポイントの一連のフローをテストする。
//! ストアはインメモリ実装、トークンは実際のコーデックを使用する。
//!
//! ## テストケース
//!
//! - `/ping` は常に `{"status": "ok"}` を返す
//! - ログイン → `/count` → `/count` の一連フロー（1 → 2）
//! - 不正なパスワードでログインできない
//! - フィールド欠落・空文字列でログインできない
//! - トークンなし・不正トークンで `/count` にアクセスできない
//!   （ガードに拒否されたリクエストはカウンタに到達しない）
//! - ストア障害時は 500 を返す

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode, header},
   middleware::from_fn_with_state,
   routing::{get, post},
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use visitgate_api::{
   handler::{AuthState, CountState, count, login, ping},
   middleware::{AuthGuardState, require_token},
};
use visitgate_domain::{FixedClock, StaticCredentialVerifier, SystemClock, TokenCodec};
use visitgate_infra::{FailingVisitCounter, InMemoryVisitCounter, VISITS_KEY, VisitCounter};

/// テスト用の署名鍵
const TEST_SECRET: &str = "integration-test-secret";

fn test_codec() -> Arc<TokenCodec> {
   Arc::new(TokenCodec::new(TEST_SECRET, Arc::new(SystemClock)))
}

/// テスト用ルーターを構築する
///
/// `app_builder::build_app` と同じルート構成（Readiness とトレーシング関連
/// レイヤーを除く）を再現する。
fn build_test_app(counter: Arc<dyn VisitCounter>, codec: Arc<TokenCodec>) -> Router {
   let auth_state = Arc::new(AuthState {
      codec:       codec.clone(),
      credentials: Arc::new(StaticCredentialVerifier::new("admin", "password")),
   });
   let count_state = Arc::new(CountState { counter });
   let guard_state = AuthGuardState { codec };

   Router::new()
      .route("/ping", get(ping))
      .merge(
         Router::new()
            .route("/login", post(login))
            .with_state(auth_state),
      )
      .merge(
         Router::new()
            .route("/count", get(count))
            .layer(from_fn_with_state(guard_state, require_token))
            .with_state(count_state),
      )
}

fn default_test_app(counter: &InMemoryVisitCounter) -> Router {
   build_test_app(Arc::new(counter.clone()), test_codec())
}

// --- リクエスト/レスポンスヘルパー ---

fn login_request(body: serde_json::Value) -> Request<Body> {
   Request::builder()
      .method(Method::POST)
      .uri("/login")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

fn count_request(auth_header: Option<&str>) -> Request<Body> {
   let mut builder = Request::builder().method(Method::GET).uri("/count");
   if let Some(value) = auth_header {
      builder = builder.header(header::AUTHORIZATION, value);
   }
   builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
   let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&body).unwrap()
}

/// ログインしてトークンを取り出す
async fn obtain_token(app: &Router) -> String {
   let response = app
      .clone()
      .oneshot(login_request(
         serde_json::json!({"username": "admin", "password": "password"}),
      ))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   body_json(response).await["token"]
      .as_str()
      .unwrap()
      .to_string()
}

// --- /ping ---

#[tokio::test]
async fn test_pingは常にstatus_okを返す() {
   // Given
   let app = default_test_app(&InMemoryVisitCounter::new());

   // When
   let response = app
      .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
}

// --- /login ---

#[tokio::test]
async fn test_正しい認証情報でトークンが発行される() {
   // Given
   let codec = test_codec();
   let app = build_test_app(Arc::new(InMemoryVisitCounter::new()), codec.clone());

   // When
   let token = obtain_token(&app).await;

   // Then: 発行されたトークンは検証可能で、ユーザー名を保持している
   let claims = codec.verify(&token).unwrap();
   assert_eq!(claims.user, "admin");
}

#[tokio::test]
async fn test_不正なパスワードでは401と認証情報不一致メッセージを返す() {
   // Given
   let app = default_test_app(&InMemoryVisitCounter::new());

   // When
   let response = app
      .oneshot(login_request(
         serde_json::json!({"username": "admin", "password": "wrong"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Invalid credentials!"})
   );
}

#[tokio::test]
async fn test_フィールド欠落では401と認証失敗メッセージを返す() {
   // Given
   let app = default_test_app(&InMemoryVisitCounter::new());

   // When: username のみでリクエスト
   let response = app
      .oneshot(login_request(serde_json::json!({"username": "admin"})))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Authentication failed"})
   );
}

#[tokio::test]
async fn test_空文字列のフィールドでは401と認証失敗メッセージを返す() {
   let app = default_test_app(&InMemoryVisitCounter::new());

   let response = app
      .oneshot(login_request(
         serde_json::json!({"username": "", "password": ""}),
      ))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Authentication failed"})
   );
}

// --- /count ---

#[tokio::test]
async fn test_ログインからカウンタ取得までの一連フロー() {
   // Given
   let counter = InMemoryVisitCounter::new();
   let app = default_test_app(&counter);
   let token = obtain_token(&app).await;
   let auth_header = format!("Bearer {token}");

   // When: 同じトークンで 2 回アクセス
   let first = app
      .clone()
      .oneshot(count_request(Some(&auth_header)))
      .await
      .unwrap();
   let second = app
      .clone()
      .oneshot(count_request(Some(&auth_header)))
      .await
      .unwrap();

   // Then: カウンタは 1 → 2 と増加する
   assert_eq!(first.status(), StatusCode::OK);
   assert_eq!(body_json(first).await, serde_json::json!({"visits": 1}));
   assert_eq!(second.status(), StatusCode::OK);
   assert_eq!(body_json(second).await, serde_json::json!({"visits": 2}));
}

#[tokio::test]
async fn test_トークンなしでは401でカウンタは増加しない() {
   // Given
   let counter = InMemoryVisitCounter::new();
   let app = default_test_app(&counter);

   // When
   let response = app.oneshot(count_request(None)).await.unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Token is missing!"})
   );
   // ガードに拒否されたリクエストはハンドラに到達していない
   assert_eq!(counter.current(VISITS_KEY), 0);
}

#[tokio::test]
async fn test_不正なトークンでは401でカウンタは増加しない() {
   // Given
   let counter = InMemoryVisitCounter::new();
   let app = default_test_app(&counter);

   // When
   let response = app
      .oneshot(count_request(Some("Bearer not-a-valid-token")))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Token is invalid!"})
   );
   assert_eq!(counter.current(VISITS_KEY), 0);
}

#[tokio::test]
async fn test_別の鍵で署名されたトークンでは401を返す() {
   // Given: 別の鍵で発行されたトークン
   let counter = InMemoryVisitCounter::new();
   let app = default_test_app(&counter);
   let other_codec = TokenCodec::new("another-secret", Arc::new(SystemClock));
   let token = other_codec.issue("admin").unwrap();

   // When
   let response = app
      .oneshot(count_request(Some(&format!("Bearer {token}"))))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Token is invalid!"})
   );
   assert_eq!(counter.current(VISITS_KEY), 0);
}

#[tokio::test]
async fn test_期限切れトークンでは401を返す() {
   // Given: 25 時間前に発行されたトークン（有効期限 24 時間を超過）
   let counter = InMemoryVisitCounter::new();
   let app = default_test_app(&counter);
   let past = Utc::now() - Duration::hours(25);
   let expired_codec = TokenCodec::new(TEST_SECRET, Arc::new(FixedClock::new(past)));
   let token = expired_codec.issue("admin").unwrap();

   // When
   let response = app
      .oneshot(count_request(Some(&format!("Bearer {token}"))))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Token is invalid!"})
   );
   assert_eq!(counter.current(VISITS_KEY), 0);
}

#[tokio::test]
async fn test_ストア障害時は500と固定メッセージを返す() {
   // Given: 常にエラーを返すカウンタ
   let codec = test_codec();
   let app = build_test_app(Arc::new(FailingVisitCounter), codec.clone());
   let token = codec.issue("admin").unwrap();

   // When
   let response = app
      .oneshot(count_request(Some(&format!("Bearer {token}"))))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({"message": "Internal server error"})
   );
}
