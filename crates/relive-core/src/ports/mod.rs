//! Ports - 抽象化レイヤー
//!
//! controller が外部に依存する 3 点（時刻ライブラリ・表示先・タイマー）を
//! trait として定義する。実装は `impls` に置く。

pub mod clock;
pub mod library;
pub mod scheduler;
pub mod surface;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock, Zone};
pub use self::library::{LibraryLoader, LoadError, TimeLibrary};
pub use self::scheduler::{Scheduler, TickReceiver};
pub use self::surface::{Surface, SurfaceError};
