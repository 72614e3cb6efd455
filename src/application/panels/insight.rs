//! 深度分析：静态文章 + 原文关键词检索

use serde::Serialize;

use crate::application::dashboard::DashboardTables;
use crate::domain::chapter::search_paragraphs;

/// 默认检索词（原文为繁体）
pub const DEFAULT_KEYWORD: &str = "西湖";
pub const EMPTY_KEYWORD_MESSAGE: &str = "Enter a keyword to search the original text.";
pub const NO_MATCH_MESSAGE: &str = "No relevant content found.";

const ESSAY: &str = include_str!("../../../assets/insights.md");

#[derive(Debug, Clone, Serialize)]
pub struct InsightPanel {
    /// Markdown
    pub essay: &'static str,
    pub keyword: String,
    pub matches: Vec<String>,
    /// 提示信息（非错误）
    pub message: Option<&'static str>,
}

pub fn build_insight_panel(tables: &DashboardTables, keyword: Option<&str>) -> InsightPanel {
    let keyword = keyword.unwrap_or(DEFAULT_KEYWORD);
    let matches = search_paragraphs(&tables.corpus, keyword);

    let message = if keyword.is_empty() {
        Some(EMPTY_KEYWORD_MESSAGE)
    } else if matches.is_empty() {
        Some(NO_MATCH_MESSAGE)
    } else {
        None
    };

    InsightPanel {
        essay: ESSAY,
        keyword: keyword.to_string(),
        matches,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard::fixtures::sample_tables;

    #[test]
    fn test_default_keyword_searches_west_lake() {
        let panel = build_insight_panel(&sample_tables(), None);
        assert_eq!(panel.keyword, "西湖");
        assert_eq!(panel.matches, vec!["馬二先生游西湖，西湖沿上。"]);
        assert!(panel.message.is_none());
        assert!(panel.essay.contains("Hangzhou"));
    }

    #[test]
    fn test_empty_keyword_is_informational() {
        let panel = build_insight_panel(&sample_tables(), Some(""));
        assert!(panel.matches.is_empty());
        assert_eq!(panel.message, Some(EMPTY_KEYWORD_MESSAGE));
    }

    #[test]
    fn test_no_match_is_informational() {
        let panel = build_insight_panel(&sample_tables(), Some("揚州"));
        assert!(panel.matches.is_empty());
        assert_eq!(panel.message, Some(NO_MATCH_MESSAGE));
    }
}
