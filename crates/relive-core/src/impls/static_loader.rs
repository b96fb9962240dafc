//! StaticLoader - ビルド時に決まる依存をそのまま返す LibraryLoader

use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{Clock, LibraryLoader, LoadError, TimeLibrary};

/// StaticLoader は注入された Clock を TimeLibrary として返す
///
/// # 使用例
/// ```ignore
/// let loader = StaticLoader::new(SystemClock::new(Zone::Local));
/// let library = loader.load().await?;
/// ```
pub struct StaticLoader {
    name: String,
    clock: Arc<dyn Clock>,
}

impl StaticLoader {
    pub fn new<C: Clock + 'static>(clock: C) -> Self {
        Self {
            name: "chrono".to_string(),
            clock: Arc::new(clock),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl LibraryLoader for StaticLoader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<TimeLibrary, LoadError> {
        Ok(TimeLibrary::new(Arc::clone(&self.clock)))
    }
}
