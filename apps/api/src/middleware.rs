//! # ミドルウェア
//!
//! API 用のミドルウェアを提供する。

mod auth;

pub use auth::{AuthGuardState, require_token};
