//! Bootstrap - 依存ライブラリを取得して Controller を組み立てる
//!
//! # Fail-fast 設計
//! - ライブラリ取得に失敗・タイムアウトしたら `DependencyUnavailable`
//! - その場合 surface には何も描画しない

use std::time::Duration;

use tracing::{error, info};

use super::config::AppConfig;
use super::controller::Controller;
use crate::error::ReliveError;
use crate::ports::{LibraryLoader, Scheduler, Surface, TimeLibrary};

/// loader を timeout 付きで await する
pub async fn load_library(
    loader: &dyn LibraryLoader,
    timeout: Duration,
) -> Result<TimeLibrary, ReliveError> {
    let name = loader.name().to_string();
    let result = match tokio::time::timeout(timeout, loader.load()).await {
        Ok(Ok(library)) => Ok(library),
        Ok(Err(e)) => Err(ReliveError::DependencyUnavailable {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Err(ReliveError::DependencyUnavailable {
            name,
            reason: format!("timed out after {}ms", timeout.as_millis()),
        }),
    };

    match &result {
        Ok(_) => info!(dependency = loader.name(), "dependency loaded"),
        Err(e) => error!(error = %e, "dependency load failed"),
    }
    result
}

/// ライブラリを取得して、未ロード状態の Controller を返す
///
/// # Example
/// ```ignore
/// let (scheduler, ticks) = TokioScheduler::new();
/// let controller = bootstrap(&config, &loader, InMemorySurface::new(), scheduler).await?;
/// ```
pub async fn bootstrap<S: Surface, T: Scheduler>(
    config: &AppConfig,
    loader: &dyn LibraryLoader,
    surface: S,
    scheduler: T,
) -> Result<Controller<S, T>, ReliveError> {
    config.validate()?;
    let library = load_library(loader, config.dependency_timeout()).await?;
    Ok(Controller::new(library, surface, scheduler, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{InMemorySurface, ManualScheduler, StaticLoader};
    use crate::ports::{FixedClock, LoadError};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct OfflineLoader;

    #[async_trait]
    impl LibraryLoader for OfflineLoader {
        fn name(&self) -> &str {
            "moment"
        }

        async fn load(&self) -> Result<TimeLibrary, LoadError> {
            Err(LoadError::Unavailable("network unreachable".into()))
        }
    }

    struct HangingLoader;

    #[async_trait]
    impl LibraryLoader for HangingLoader {
        fn name(&self) -> &str {
            "slow"
        }

        async fn load(&self) -> Result<TimeLibrary, LoadError> {
            std::future::pending::<Result<TimeLibrary, LoadError>>().await
        }
    }

    fn fixed_loader() -> StaticLoader {
        StaticLoader::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn bootstrap_returns_unloaded_controller() {
        let c = bootstrap(
            &AppConfig::default(),
            &fixed_loader(),
            InMemorySurface::new(),
            ManualScheduler::new(),
        )
        .await
        .unwrap();

        assert!(!c.state().is_loaded());
        assert!(c.surface().attached().is_empty());
    }

    #[tokio::test]
    async fn loader_failure_is_dependency_unavailable() {
        let err = load_library(&OfflineLoader, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(
            &err,
            ReliveError::DependencyUnavailable { name, reason }
                if name == "moment" && reason == "network unreachable"
        ));
        assert_eq!(
            err.to_string(),
            "dependency 'moment' unavailable: network unreachable"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn loader_timeout_is_dependency_unavailable() {
        let err = load_library(&HangingLoader, Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReliveError::DependencyUnavailable { ref reason, .. } if reason.contains("timed out")
        ));
    }

    #[tokio::test]
    async fn invalid_config_fails_before_loading() {
        let config = AppConfig {
            period_ms: 0,
            ..AppConfig::default()
        };
        let result = bootstrap(
            &config,
            &fixed_loader(),
            InMemorySurface::new(),
            ManualScheduler::new(),
        )
        .await;
        assert!(matches!(result, Err(ReliveError::Config(_))));
    }
}
