//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Gazetteer Context: 地名、别名与人物路线
//! - Chapter Context: 章节统计、章节信息与原文检索

pub mod chapter;
pub mod gazetteer;
