//! AppConfig - 起動設定
//!
//! JSON ファイルから読み込む。省略したキーはデフォルト値。
//!
//! ```json
//! { "heading": "Demo", "period_ms": 500, "zone": "utc", "dependency_timeout_ms": 2000 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_HEADING;
use crate::ports::Zone;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// 見出しのテキスト
    pub heading: String,
    /// tick の周期（ミリ秒）
    pub period_ms: u64,
    pub zone: Zone,
    /// 依存ライブラリ取得のタイムアウト（ミリ秒）
    pub dependency_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            period_ms: 1000,
            zone: Zone::Local,
            dependency_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_ms == 0 {
            return Err(ConfigError::Invalid("period_ms must be positive".into()));
        }
        if self.dependency_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "dependency_timeout_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn dependency_timeout(&self) -> Duration {
        Duration::from_millis(self.dependency_timeout_ms)
    }
}
