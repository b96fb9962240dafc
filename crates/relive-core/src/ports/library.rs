//! Library port - 起動時に取得する時刻ライブラリ
//!
//! 起動処理は `LibraryLoader::load()` を await してから controller を作る。
//! controller は `TimeLibrary` なしでは構築できないので、
//! 「ライブラリ未取得のまま load」は起こらない。

use std::sync::Arc;

use async_trait::async_trait;

use super::clock::Clock;
use crate::domain::Moment;

/// TimeLibrary は「現在時刻を返す」能力のハンドル
#[derive(Clone)]
pub struct TimeLibrary {
    clock: Arc<dyn Clock>,
}

impl TimeLibrary {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> Moment {
        Moment::new(self.clock.now())
    }
}

impl std::fmt::Debug for TimeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeLibrary").finish_non_exhaustive()
    }
}

/// LoadError はライブラリ取得の失敗
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Unavailable(String),
}

/// LibraryLoader は依存ライブラリを非同期に取得する
///
/// # 使用例
/// ```ignore
/// let loader = StaticLoader::new(SystemClock::default());
/// let library = loader.load().await?;
/// println!("{}", library.now().format());
/// ```
#[async_trait]
pub trait LibraryLoader: Send + Sync {
    /// ログとエラー表示に使う名前
    fn name(&self) -> &str;

    async fn load(&self) -> Result<TimeLibrary, LoadError>;
}
