//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节切分与地名频次统计
//! - 章节信息（人物、情节、概要）
//! - 原文关键词检索

mod info;
mod search;
mod stats;

pub use info::{ChapterInfo, NO_DATA};
pub use search::{search_paragraphs, split_paragraphs, MAX_SEARCH_RESULTS};
pub use stats::{aggregate_chapters, short_label, split_chapters, ChapterRecord, LocationCount};
