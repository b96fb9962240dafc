//! Clock port - 時刻の抽象化
//!
//! # 実装
//! - **SystemClock**: 本番用（local / utc）
//! - **FixedClock**: テスト用

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

/// Clock は現在時刻を提供
///
/// # テスト容易性
/// - trait により時刻を差し替え可能
/// - テストでは FixedClock を使用
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// 表示に使うタイムゾーン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    #[default]
    Local,
    Utc,
}

/// SystemClock は OS の壁時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.zone {
            Zone::Local => Local::now().fixed_offset(),
            Zone::Utc => Utc::now().fixed_offset(),
        }
    }
}

/// FixedClock は常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at: at.fixed_offset(),
        }
    }

    pub fn with_offset(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}
