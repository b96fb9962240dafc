//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **StaticLoader**: 注入済み Clock を返す LibraryLoader
//! - **InMemorySurface** / **ConsoleSurface**: Surface
//! - **TokioScheduler**: 本番用の Scheduler
//! - **ManualScheduler**: テスト用の Scheduler（仮想時間）

pub mod console_surface;
#[cfg(test)]
pub(crate) mod faulty_surface;
pub mod manual_scheduler;
pub mod memory_surface;
pub mod static_loader;
pub mod tokio_scheduler;

// 主要な型を再エクスポート
pub use self::console_surface::ConsoleSurface;
pub use self::manual_scheduler::ManualScheduler;
pub use self::memory_surface::InMemorySurface;
pub use self::static_loader::StaticLoader;
pub use self::tokio_scheduler::TokioScheduler;
