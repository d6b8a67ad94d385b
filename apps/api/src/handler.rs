//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ロジックはドメイン層・インフラ層に委譲

pub mod auth;
pub mod count;
pub mod health;

pub use auth::{AuthState, login};
pub use count::{CountState, count};
pub use health::{ReadinessState, ping, readiness_check};
