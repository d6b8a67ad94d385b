//! # テスト用インメモリカウンタ
//!
//! ハンドラ・ミドルウェアのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! visitgate-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
   collections::HashMap,
   sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::{counter::VisitCounter, error::InfraError};

/// インメモリ訪問カウンタ
///
/// `Mutex` によりインクリメントは並行呼び出しに対してアトミック。
/// [`current`](InMemoryVisitCounter::current) でテストから現在値を検査できる
/// （ガードに拒否されたリクエストがハンドラに到達していないことの検証用）。
#[derive(Clone, Default)]
pub struct InMemoryVisitCounter {
   counts: Arc<Mutex<HashMap<String, i64>>>,
}

impl InMemoryVisitCounter {
   pub fn new() -> Self {
      Self::default()
   }

   /// 現在のカウンタ値を返す（キーが存在しない場合は 0）
   pub fn current(&self, key: &str) -> i64 {
      self.counts.lock().unwrap().get(key).copied().unwrap_or(0)
   }
}

#[async_trait]
impl VisitCounter for InMemoryVisitCounter {
   async fn increment(&self, key: &str) -> Result<i64, InfraError> {
      let mut counts = self.counts.lock().unwrap();
      let value = counts.entry(key.to_string()).or_insert(0);
      *value += 1;

      Ok(*value)
   }
}

/// 常にエラーを返すカウンタ
///
/// ストア接続障害時のレスポンス（5xx）を検証するためのテストダブル。
#[derive(Clone, Default)]
pub struct FailingVisitCounter;

#[async_trait]
impl VisitCounter for FailingVisitCounter {
   async fn increment(&self, _key: &str) -> Result<i64, InfraError> {
      Err(InfraError::Unexpected("store unavailable".to_string()))
   }
}
