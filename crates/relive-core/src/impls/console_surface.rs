//! ConsoleSurface - 変更をそのまま writer に書き出す Surface
//!
//! document の状態は InMemorySurface に任せ、append と set_text のたびに
//! 変化したノードを 1 行で出力する。CLI では stdout を渡す。

use std::io::Write;

use super::memory_surface::InMemorySurface;
use crate::domain::{ElementKind, NodeId};
use crate::ports::{Surface, SurfaceError};

pub struct ConsoleSurface<W> {
    document: InMemorySurface,
    out: W,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            document: InMemorySurface::new(),
            out,
        }
    }

    pub fn document(&self) -> &InMemorySurface {
        &self.document
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        if let Some(element) = self.document.element(node) {
            writeln!(self.out, "{}", element.render())?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn append(&mut self, kind: ElementKind, text: &str) -> Result<NodeId, SurfaceError> {
        let node = self.document.append(kind, text)?;
        // 空の paragraph は出力しない
        if !text.is_empty() {
            self.emit(node)?;
        }
        Ok(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError> {
        self.document.set_text(node, text)?;
        self.emit(node)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        self.document.remove(node)
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.document.text(node)
    }

    fn attached(&self) -> Vec<NodeId> {
        self.document.attached()
    }
}
