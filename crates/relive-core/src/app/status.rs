//! Status - controller の状態スナップショット

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub loaded: bool,
    pub counter: u64,
    pub status_text: Option<String>,
    pub attached_nodes: usize,
    pub active_timers: usize,
}
