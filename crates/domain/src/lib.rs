//! # VisitGate ドメイン
//!
//! 認証まわりのドメインロジックを提供する。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ（テストでの固定時刻注入用）
//! - [`credential`] - 認証情報の検証
//! - [`token`] - アクセストークン（JWT）の発行と検証
//!
//! ## 設計方針
//!
//! - HTTP やストアへの依存を持たない純粋なドメインロジックのみを配置
//! - 外部コンポーネントとの境界はトレイト（[`Clock`] / [`CredentialVerifier`]）で表現

pub mod clock;
pub mod credential;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credential::{CredentialVerifier, StaticCredentialVerifier};
pub use token::{Claims, TokenCodec, TokenError};
