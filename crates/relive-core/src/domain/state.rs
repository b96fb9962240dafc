//! AppState - コントローラが所有する状態
//!
//! timer / heading / status は `Resources` にまとめて保持するので、
//! 「一部だけロード済み」という状態は型として表現できない。

use serde::Serialize;

use super::ids::{NodeId, TimerId};

/// ロード中に保持するリソース一式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resources {
    pub timer: TimerId,
    pub heading: NodeId,
    pub status: NodeId,
}

/// AppState は library 以外の可変状態
///
/// - `resources`: Some = loaded, None = unloaded
/// - `counter`: 有効な tick ごとに +1、unload で 0
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppState {
    resources: Option<Resources>,
    counter: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.resources.is_some()
    }

    pub fn resources(&self) -> Option<&Resources> {
        self.resources.as_ref()
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub(crate) fn install(&mut self, resources: Resources) {
        debug_assert!(self.resources.is_none(), "install over live resources");
        self.resources = Some(resources);
    }

    /// 保持中のリソースを取り出して初期状態に戻す
    pub(crate) fn take(&mut self) -> Option<Resources> {
        self.counter = 0;
        self.resources.take()
    }

    /// 加算前の値を返す
    pub(crate) fn bump(&mut self) -> u64 {
        let current = self.counter;
        self.counter += 1;
        current
    }
}

/// Tick は on_interval の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tick {
    /// status を書き換えた（`counter` は加算後の値）
    Rendered { text: String, counter: u64 },
    Ignored { reason: IgnoreReason },
}

/// tick を無視した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// 何もロードされていない
    Unloaded,
    /// キャンセル済みタイマーからの遅延 tick
    StaleTimer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> Resources {
        Resources {
            timer: TimerId::new(1),
            heading: NodeId::new(1),
            status: NodeId::new(2),
        }
    }

    #[test]
    fn new_state_is_unloaded() {
        let state = AppState::new();
        assert!(!state.is_loaded());
        assert_eq!(state.counter(), 0);
        assert!(state.resources().is_none());
    }

    #[test]
    fn bump_returns_previous_value() {
        let mut state = AppState::new();
        state.install(resources());
        assert_eq!(state.bump(), 0);
        assert_eq!(state.bump(), 1);
        assert_eq!(state.counter(), 2);
    }

    #[test]
    fn take_clears_everything() {
        let mut state = AppState::new();
        state.install(resources());
        state.bump();

        assert_eq!(state.take(), Some(resources()));
        assert_eq!(state, AppState::new());
        assert_eq!(state.take(), None);
    }
}
