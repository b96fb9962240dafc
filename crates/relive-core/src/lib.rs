//! relive-core
//!
//! Core building blocks for a live-reloadable demo app.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, moment, display, state）
//! - **ports**: 抽象化レイヤー（Clock, LibraryLoader, Surface, Scheduler）
//! - **impls**: ports の実装（StaticLoader, InMemorySurface, TokioScheduler など）
//! - **app**: アプリケーションロジック（Controller, bootstrap, Runtime, AppConfig）
//! - **error**: クレート共通のエラー型

pub mod app;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;

pub use self::error::ReliveError;
