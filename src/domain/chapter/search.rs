//! 原文关键词检索
//!
//! 对段落做线性子串扫描，不建索引

use std::borrow::Cow;

/// 最多返回的段落数
pub const MAX_SEARCH_RESULTS: usize = 3;

/// 将原文拆成段落
///
/// 部分语料把换行存成了字面量 `\n`（`\r` 同理）：去掉字面量 `\r` 后若能按
/// 字面量 `\n` 拆出至少 2 段，就用这种拆法；否则按真实换行拆分原文
pub fn split_paragraphs(text: &str) -> Vec<Cow<'_, str>> {
    let cleaned = text.replace("\\r", "");
    if cleaned.contains("\\n") {
        cleaned
            .split("\\n")
            .map(|p| Cow::Owned(p.to_string()))
            .collect()
    } else {
        text.split('\n').map(Cow::Borrowed).collect()
    }
}

/// 检索包含关键词的段落
///
/// 返回至多 [`MAX_SEARCH_RESULTS`] 个段落（已去除首尾空白），保持原文顺序；
/// 关键词为空时返回空列表
pub fn search_paragraphs(text: &str, keyword: &str) -> Vec<String> {
    if keyword.is_empty() {
        return Vec::new();
    }

    split_paragraphs(text)
        .into_iter()
        .filter(|p| p.contains(keyword))
        .take(MAX_SEARCH_RESULTS)
        .map(|p| p.trim().to_string())
        .collect()
}
