//! Moment - 時刻値とそのフォーマット
//!
//! # 学習ポイント
//! - chrono の `DateTime<FixedOffset>` をラップした newtype
//! - offset 0 は `Z`、それ以外は `+hh:mm` で表示

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Moment は時刻ライブラリが返す「現在時刻」
///
/// # 使用例
/// ```ignore
/// let moment = library.now();
/// println!("{}", moment.format()); // 2024-01-01T09:00:00+09:00
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment(DateTime<FixedOffset>);

impl Moment {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// ISO-8601（秒精度）で表示用の文字列を返す
    pub fn format(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }
}
