//! # VisitGate インフラ層
//!
//! 外部ストア（Redis）との接続管理と、その上に構築される
//! 訪問カウンタの実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`redis`] - Redis 接続管理
//! - [`counter`] - 訪問カウンタ（トレイトと Redis 実装）
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用インメモリ実装（`test-utils` feature 有効時のみ）

pub mod counter;
pub mod error;
pub mod redis;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use counter::{RedisVisitCounter, VISITS_KEY, VisitCounter};
pub use error::InfraError;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{FailingVisitCounter, InMemoryVisitCounter};
