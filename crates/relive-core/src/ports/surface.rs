//! Surface port - 表示先の抽象化
//!
//! document に相当する。ノードを作って body に append し、
//! テキストを書き換え、最後に remove する。

use crate::domain::{ElementKind, NodeId};

/// SurfaceError は表示操作の失敗
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("surface write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Surface は表示ノードを管理する
///
/// # 設計原則
/// - `append` はノード作成と attach を同時に行う
/// - remove したノードの id は再利用しない
/// - `attached()` は append 順
pub trait Surface: Send {
    fn append(&mut self, kind: ElementKind, text: &str) -> Result<NodeId, SurfaceError>;

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError>;

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError>;

    fn text(&self, node: NodeId) -> Option<&str>;

    fn attached(&self) -> Vec<NodeId>;
}
