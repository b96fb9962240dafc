//! Scheduler port - 周期タイマーの抽象化
//!
//! tick はコールバックではなく `TimerId` として配送される。
//! 受け取った側（Runtime）が controller の `on_interval` を呼ぶ。

use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::TimerId;

/// 発火した TimerId を受け取るチャネル
pub type TickReceiver = mpsc::UnboundedReceiver<TimerId>;

/// Scheduler は周期タイマーの登録とキャンセルを行う
///
/// # 契約
/// - `every()` の最初の tick は `period` 経過後
/// - `cancel()` 済みの id が後から届くことはありうる（配送済み tick）
pub trait Scheduler: Send {
    fn every(&mut self, period: Duration) -> TimerId;

    /// 登録が存在してキャンセルできたら true
    fn cancel(&mut self, timer: TimerId) -> bool;

    /// 動作中のタイマー数
    fn active(&self) -> usize;
}
