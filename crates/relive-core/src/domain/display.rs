//! Display - 表示要素のモデル
//!
//! heading と status paragraph の 2 種類だけを扱う。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moment::Moment;

/// 起動時に表示される見出しのデフォルト
pub const DEFAULT_HEADING: &str = "REPL-driven JS - Demo";

/// ElementKind は表示要素の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Heading,
    Paragraph,
}

impl ElementKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Heading => "h1",
            ElementKind::Paragraph => "p",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Element は surface 上の 1 ノード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// テキスト 1 行にレンダリング（`# ` は見出し）
    pub fn render(&self) -> String {
        match self.kind {
            ElementKind::Heading => format!("# {}", self.text),
            ElementKind::Paragraph => self.text.clone(),
        }
    }
}

/// tick ごとに status paragraph へ書き込む文字列
pub fn status_line(now: &Moment, counter: u64) -> String {
    format!("Local time: {} ;; Counter: {}", now.format(), counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn status_line_matches_display_pattern() {
        let now = Moment::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            status_line(&now, 0),
            "Local time: 2024-01-01T00:00:00Z ;; Counter: 0"
        );
        assert_eq!(
            status_line(&now, 41),
            "Local time: 2024-01-01T00:00:00Z ;; Counter: 41"
        );
    }

    #[test]
    fn heading_renders_with_marker() {
        let el = Element::new(ElementKind::Heading, DEFAULT_HEADING);
        assert_eq!(el.render(), "# REPL-driven JS - Demo");
        assert_eq!(Element::new(ElementKind::Paragraph, "").render(), "");
    }
}
