//! 章节统计
//!
//! 按章节标题标记切分原文，并统计每章中各地名别名出现的次数

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::domain::gazetteer::Location;

/// 章节标题标记：行首 `*` 后跟至少一个非换行字符
fn chapter_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"(?m)^\*[^\n]+").expect("chapter marker pattern"))
}

/// 短标题最多保留的字符数（标题中无空格时）
const SHORT_LABEL_CHARS: usize = 6;

/// 单个地名在某章中的出现次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

/// 章节统计记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    /// 短标题，如 "第十回"
    pub label: String,
    pub full_title: String,
    /// 与地名目录同序，一地一项
    pub counts: Vec<LocationCount>,
}

impl ChapterRecord {
    pub fn count_for(&self, location: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|c| c.location == location)
            .map(|c| c.count)
    }
}

/// 由完整标题推导短标题
///
/// 含空格时取第一个空格之前的部分，否则取前 6 个字符
pub fn short_label(title: &str) -> String {
    match title.split_once(' ') {
        Some((head, _)) => head.to_string(),
        None => title.chars().take(SHORT_LABEL_CHARS).collect(),
    }
}

/// 按标题标记切分原文，返回每章的文本区间（按原文顺序）
///
/// 第一个标记之前的前言被丢弃，空白区间被丢弃
pub fn split_chapters(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = chapter_marker().find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .filter(|span| !span.trim().is_empty())
        .collect()
}

/// 统计单章
fn chapter_record(span: &str, locations: &[Location]) -> ChapterRecord {
    let first_line = span.split('\n').next().unwrap_or_default();
    let full_title = first_line.replace('*', "").trim().to_string();

    let counts = locations
        .iter()
        .map(|loc| LocationCount {
            location: loc.name.clone(),
            count: loc.count_in(span),
        })
        .collect();

    ChapterRecord {
        label: short_label(&full_title),
        full_title,
        counts,
    }
}

/// 对全文做章节统计
///
/// 每个检测到的章节产出一条记录，顺序与原文一致
pub fn aggregate_chapters(text: &str, locations: &[Location]) -> Vec<ChapterRecord> {
    let records: Vec<ChapterRecord> = split_chapters(text)
        .into_iter()
        .map(|span| chapter_record(span, locations))
        .collect();

    tracing::debug!(
        chapters = records.len(),
        locations = locations.len(),
        "Chapter statistics aggregated"
    );

    records
}
