//! # 訪問カウンタ
//!
//! 共有ストア上のカウンタをアトミックにインクリメントする。
//!
//! ## Redis キー設計
//!
//! | キー | 値 | TTL |
//! |-----|-----|-----|
//! | `visits` | 訪問回数（整数） | なし |
//!
//! ## アトミック性
//!
//! インクリメントのアトミック性はストア側のプリミティブ（Redis の `INCR`）に
//! 完全に委譲する。このコンポーネント自身はロックを実装しない。
//! 複数のサーバープロセスから並行に呼ばれても更新が失われることはない。

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::error::InfraError;

/// 訪問カウンタのキー
pub const VISITS_KEY: &str = "visits";

/// 訪問カウンタトレイト
///
/// 実装は Redis を使用する [`RedisVisitCounter`] を参照。
/// テストでは `mock` モジュールのインメモリ実装を使用する。
#[async_trait]
pub trait VisitCounter: Send + Sync {
   /// キーの値をアトミックに 1 増やし、増加後の値を返す
   ///
   /// キーが存在しない場合は 0 で初期化してからインクリメントする
   /// （最初の呼び出しは 1 を返す）。
   async fn increment(&self, key: &str) -> Result<i64, InfraError>;
}

/// Redis を使用した訪問カウンタ
///
/// `INCR` コマンドによりインクリメントはストア側でアトミックに実行される。
pub struct RedisVisitCounter {
   conn: ConnectionManager,
}

impl RedisVisitCounter {
   /// 接続マネージャを指定してカウンタを作成する
   pub fn new(conn: ConnectionManager) -> Self {
      Self { conn }
   }
}

#[async_trait]
impl VisitCounter for RedisVisitCounter {
   async fn increment(&self, key: &str) -> Result<i64, InfraError> {
      // ConnectionManager は Clone 可能（内部で接続を共有する）
      let mut conn = self.conn.clone();
      let value: i64 = conn.incr(key, 1).await?;

      Ok(value)
   }
}
