//! TokioScheduler - tokio タスクで動く周期タイマー
//!
//! # 実装詳細
//! - タイマー 1 本につき 1 タスク（`interval_at` で period 後に初回 tick）
//! - tick は TimerId を unbounded channel に送るだけ
//! - cancel は JoinHandle::abort
//!
//! `every()` は tokio runtime の中で呼ぶこと。

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::domain::TimerId;
use crate::ports::{Scheduler, TickReceiver};

pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<TimerId>,
    timers: HashMap<TimerId, JoinHandle<()>>,
    next_timer_id: u64,
}

impl TokioScheduler {
    /// scheduler と tick の受信側を作る
    pub fn new() -> (Self, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            ticks: tx,
            timers: HashMap::new(),
            next_timer_id: 1,
        };
        (scheduler, rx)
    }

    fn allocate_timer_id(&mut self) -> TimerId {
        let id = TimerId::new(self.next_timer_id);
        self.next_timer_id += 1;
        id
    }
}

impl Scheduler for TokioScheduler {
    fn every(&mut self, period: Duration) -> TimerId {
        let id = self.allocate_timer_id();
        let tx = self.ticks.clone();

        let join = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                // receiver が drop されたら終了
                if tx.send(id).is_err() {
                    break;
                }
            }
        });
        self.timers.insert(id, join);
        id
    }

    fn cancel(&mut self, timer: TimerId) -> bool {
        match self.timers.remove(&timer) {
            Some(join) => {
                join.abort();
                true
            }
            None => false,
        }
    }

    fn active(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, join) in self.timers.drain() {
            join.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_arrives_after_one_period() {
        let (mut scheduler, mut ticks) = TokioScheduler::new();
        let id = scheduler.every(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(ticks.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(ticks.recv().await, Some(id));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_stops_ticking() {
        let (mut scheduler, mut ticks) = TokioScheduler::new();
        let id = scheduler.every(Duration::from_secs(1));
        assert_eq!(scheduler.active(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(ticks.recv().await, Some(id));

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.active(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(ticks.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn timers_get_distinct_ids() {
        let (mut scheduler, _ticks) = TokioScheduler::new();
        let a = scheduler.every(Duration::from_secs(1));
        let b = scheduler.every(Duration::from_secs(1));
        assert_ne!(a, b);
        assert_eq!(scheduler.active(), 2);
    }
}
