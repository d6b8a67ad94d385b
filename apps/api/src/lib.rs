//! # VisitGate API ライブラリ
//!
//! 訪問カウンタ API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `error`: API エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ（ping / login / count / readiness）
//! - `middleware`: ミドルウェア（Bearer トークン検証）

pub mod error;
pub mod handler;
pub mod middleware;
