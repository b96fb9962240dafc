//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **Controller**: load / unload / on_interval
//! - **bootstrap**: 依存取得と組み立て
//! - **Runtime**: command と tick を直列に処理するループ
//! - **AppConfig** / **StatusView**

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod runtime;
pub mod status;

// 主要な型を再エクスポート
pub use self::bootstrap::{bootstrap, load_library};
pub use self::config::{AppConfig, ConfigError};
pub use self::controller::Controller;
pub use self::runtime::{Runtime, RuntimeHandle};
pub use self::status::StatusView;
