//! 章节人物与情节

use serde::Serialize;

use crate::application::dashboard::{ChapterInfoState, DashboardTables};
use crate::application::error::ApplicationError;

#[derive(Debug, Clone, Serialize)]
pub struct DetailsPanel {
    /// 可选章节，按表格中首次出现的顺序
    pub chapters: Vec<String>,
    pub selected: String,
    pub characters: Vec<String>,
    pub plots: Vec<String>,
    pub summary: String,
}

/// 查看某一章的信息；未指定章节时选第一章
///
/// 表格缺失或无法读取时面板不可用，但不影响其他面板
pub fn build_details_panel(
    tables: &DashboardTables,
    chapter: Option<&str>,
) -> Result<DetailsPanel, ApplicationError> {
    let rows = match &tables.chapter_info {
        ChapterInfoState::Loaded(rows) => rows,
        ChapterInfoState::Missing { path } => {
            return Err(ApplicationError::unavailable(format!(
                "Please ensure '{}' is uploaded.",
                path.display()
            )));
        }
        ChapterInfoState::Unreadable(message) => {
            return Err(ApplicationError::unavailable(message.clone()));
        }
    };

    let mut chapters: Vec<String> = Vec::new();
    for row in rows.iter() {
        if !chapters.contains(&row.chapter) {
            chapters.push(row.chapter.clone());
        }
    }

    let selected = match chapter {
        Some(id) => id.to_string(),
        None => chapters
            .first()
            .cloned()
            .ok_or_else(|| ApplicationError::unavailable("Chapter metadata contains no chapters."))?,
    };

    let row = rows
        .iter()
        .find(|r| r.chapter == selected)
        .ok_or_else(|| ApplicationError::not_found("Chapter", selected.clone()))?;

    Ok(DetailsPanel {
        characters: row.character_lines(),
        plots: row.plot_lines(),
        summary: row.summary.clone(),
        chapters,
        selected,
    })
}
