//! FaultySurface - 失敗を注入できるテスト用 Surface

use super::memory_surface::InMemorySurface;
use crate::domain::{ElementKind, NodeId};
use crate::ports::{Surface, SurfaceError};

fn injected(what: &str) -> SurfaceError {
    SurfaceError::Io(std::io::Error::other(format!("injected {what} failure")))
}

/// InMemorySurface に append / remove / set_text の失敗を足したもの
pub(crate) struct FaultySurface {
    inner: InMemorySurface,
    appends_left: usize,
    rejected_remove: Option<NodeId>,
    set_text_failures: usize,
}

impl FaultySurface {
    pub(crate) fn new() -> Self {
        Self {
            inner: InMemorySurface::new(),
            appends_left: usize::MAX,
            rejected_remove: None,
            set_text_failures: 0,
        }
    }

    /// n 回成功した後の append を失敗させる
    pub(crate) fn appends(mut self, n: usize) -> Self {
        self.appends_left = n;
        self
    }

    /// 指定ノードの remove を常に失敗させる
    pub(crate) fn reject_remove(mut self, node: NodeId) -> Self {
        self.rejected_remove = Some(node);
        self
    }

    /// 最初の n 回の set_text を失敗させる
    pub(crate) fn fail_set_text(mut self, n: usize) -> Self {
        self.set_text_failures = n;
        self
    }
}

impl Surface for FaultySurface {
    fn append(&mut self, kind: ElementKind, text: &str) -> Result<NodeId, SurfaceError> {
        if self.appends_left == 0 {
            return Err(injected("append"));
        }
        self.appends_left -= 1;
        self.inner.append(kind, text)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError> {
        if self.set_text_failures > 0 {
            self.set_text_failures -= 1;
            return Err(injected("set_text"));
        }
        self.inner.set_text(node, text)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        if self.rejected_remove == Some(node) {
            return Err(injected("remove"));
        }
        self.inner.remove(node)
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.inner.text(node)
    }

    fn attached(&self) -> Vec<NodeId> {
        self.inner.attached()
    }
}
