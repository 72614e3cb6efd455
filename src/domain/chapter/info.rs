//! Chapter Context - 章节信息

use serde::Serialize;

/// 缺失字段的占位文本
pub const NO_DATA: &str = "No Data";

/// 章节信息记录（来自外部表格，按章节标识查找）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterInfo {
    pub chapter: String,
    pub characters: String,
    pub main_plots: String,
    pub summary: String,
}

impl ChapterInfo {
    /// 人物列表，按行拆分
    pub fn character_lines(&self) -> Vec<String> {
        non_empty_lines(&self.characters)
    }

    /// 主要情节，按行拆分
    pub fn plot_lines(&self) -> Vec<String> {
        non_empty_lines(&self.main_plots)
    }
}

fn non_empty_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
