//! ManualScheduler - 仮想時間で動くテスト用 Scheduler
//!
//! # 学習ポイント
//! - 壁時計なしでタイマーの順序・キャンセルを検証する
//! - `advance()` が期限の来た tick を時刻順に返す

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::TimerId;
use crate::ports::Scheduler;

#[derive(Debug, Clone, Copy)]
struct ManualTimer {
    period: Duration,
    next_due: Duration,
}

/// ManualScheduler は `advance()` されたときだけ時間が進む
///
/// # 使用例
/// ```ignore
/// let mut scheduler = ManualScheduler::new();
/// let id = scheduler.every(Duration::from_secs(1));
/// assert_eq!(scheduler.advance(Duration::from_secs(2)), vec![id, id]);
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    timers: BTreeMap<TimerId, ManualTimer>,
    elapsed: Duration,
    next_timer_id: u64,
    registered: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            next_timer_id: 1,
            ..Self::default()
        }
    }

    /// 仮想時間の経過量
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// これまでに `every()` された回数
    pub fn registered(&self) -> usize {
        self.registered
    }

    /// 時間を `by` だけ進め、その間に発火した tick を発火順に返す
    ///
    /// 同時刻に複数のタイマーが発火する場合は TimerId の昇順。
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.elapsed + by;
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, t)| t.next_due <= target)
                .min_by_key(|(id, t)| (t.next_due, **id))
                .map(|(id, _)| *id);

            let Some(id) = next else {
                break;
            };
            if let Some(timer) = self.timers.get_mut(&id) {
                self.elapsed = timer.next_due;
                timer.next_due += timer.period;
                fired.push(id);
            }
        }

        self.elapsed = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, period: Duration) -> TimerId {
        assert!(!period.is_zero(), "period must be positive");
        let id = TimerId::new(self.next_timer_id);
        self.next_timer_id += 1;
        self.registered += 1;
        self.timers.insert(
            id,
            ManualTimer {
                period,
                next_due: self.elapsed + period,
            },
        );
        id
    }

    fn cancel(&mut self, timer: TimerId) -> bool {
        self.timers.remove(&timer).is_some()
    }

    fn active(&self) -> usize {
        self.timers.len()
    }
}
