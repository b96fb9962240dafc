//! Controller - load / unload / on_interval
//!
//! AppState・表示先・タイマーを 1 つのコンテキストとして所有する。
//! グローバル状態は持たないので、インスタンスを複数作れる。

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::config::AppConfig;
use super::status::StatusView;
use crate::domain::{AppState, ElementKind, IgnoreReason, Resources, Tick, TimerId, status_line};
use crate::error::ReliveError;
use crate::ports::{Scheduler, Surface, TimeLibrary};

/// Controller はアプリのライフサイクルを管理
///
/// # 使用例
/// ```ignore
/// let mut controller = Controller::new(library, InMemorySurface::new(), scheduler, &config);
/// controller.load()?;
/// controller.on_interval(timer_id)?;
/// controller.unload()?;
/// ```
///
/// # 不変条件
/// - timer / heading / status は全部あるか全部ないか
/// - `load()` は必ず先に `unload()` するので、何度呼んでもリソースは 1 組
pub struct Controller<S, T> {
    library: TimeLibrary,
    surface: S,
    scheduler: T,
    state: AppState,
    heading: String,
    period: Duration,
}

impl<S: Surface, T: Scheduler> Controller<S, T> {
    pub fn new(library: TimeLibrary, surface: S, scheduler: T, config: &AppConfig) -> Self {
        Self {
            library,
            surface,
            scheduler,
            state: AppState::new(),
            heading: config.heading.clone(),
            period: config.period(),
        }
    }

    /// 既存リソースを解放してから heading・status・timer を作り直す
    pub fn load(&mut self) -> Result<(), ReliveError> {
        // unload が失敗してもリソースは解放済みなので続行する
        if let Err(e) = self.unload() {
            warn!(error = %e, "unload before load reported an error");
        }

        let heading = self.surface.append(ElementKind::Heading, &self.heading)?;
        let status = match self.surface.append(ElementKind::Paragraph, "") {
            Ok(node) => node,
            Err(e) => {
                if let Err(cleanup) = self.surface.remove(heading) {
                    warn!(node = %heading, error = %cleanup, "failed to roll back heading");
                }
                return Err(e.into());
            }
        };
        let timer = self.scheduler.every(self.period);

        self.state.install(Resources {
            timer,
            heading,
            status,
        });
        info!(%timer, %heading, %status, period_ms = self.period.as_millis() as u64, "loaded");
        Ok(())
    }

    /// 保持しているリソースをすべて解放し、counter を 0 に戻す
    ///
    /// 何もロードされていなければ何もしない。
    /// ノードの remove が失敗しても残りは解放し、最初のエラーを返す。
    pub fn unload(&mut self) -> Result<(), ReliveError> {
        let Some(resources) = self.state.take() else {
            return Ok(());
        };

        if !self.scheduler.cancel(resources.timer) {
            warn!(timer = %resources.timer, "timer was already gone");
        }
        let heading = self.surface.remove(resources.heading);
        let status = self.surface.remove(resources.status);

        info!(timer = %resources.timer, "unloaded");
        heading.and(status)?;
        Ok(())
    }

    /// tick 1 回分の処理
    ///
    /// unload 済み、またはキャンセル済みタイマーからの tick は無視する。
    pub fn on_interval(&mut self, timer: TimerId) -> Result<Tick, ReliveError> {
        let Some(resources) = self.state.resources().copied() else {
            debug!(%timer, "tick while unloaded; ignored");
            return Ok(Tick::Ignored {
                reason: IgnoreReason::Unloaded,
            });
        };
        if resources.timer != timer {
            debug!(%timer, active = %resources.timer, "stale tick; ignored");
            return Ok(Tick::Ignored {
                reason: IgnoreReason::StaleTimer,
            });
        }

        let text = status_line(&self.library.now(), self.state.counter());
        self.surface.set_text(resources.status, &text)?;
        self.state.bump();

        let counter = self.state.counter();
        trace!(%timer, counter, "tick");
        Ok(Tick::Rendered { text, counter })
    }

    pub fn status(&self) -> StatusView {
        let status_text = self
            .state
            .resources()
            .and_then(|r| self.surface.text(r.status))
            .map(str::to_string);

        StatusView {
            loaded: self.state.is_loaded(),
            counter: self.state.counter(),
            status_text,
            attached_nodes: self.surface.attached().len(),
            active_timers: self.scheduler.active(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}
