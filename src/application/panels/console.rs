//! 侧边栏数据控制台

use serde::Serialize;

use crate::application::dashboard::{ChapterInfoState, DashboardTables};
use crate::domain::gazetteer::MapPoint;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChapterInfoStatus {
    Loaded { chapters: usize, message: String },
    Missing { message: String },
    Unreadable { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsoleView {
    pub map_points: usize,
    pub map_message: String,
    pub chapter_info: ChapterInfoStatus,
    /// 地图数据预览
    pub preview: Vec<MapPoint>,
}

pub fn build_console(tables: &DashboardTables) -> ConsoleView {
    let chapter_info = match &tables.chapter_info {
        ChapterInfoState::Loaded(rows) => ChapterInfoStatus::Loaded {
            chapters: rows.len(),
            message: format!("Loaded plot data: {} chapters", rows.len()),
        },
        ChapterInfoState::Missing { .. } => ChapterInfoStatus::Missing {
            message: "Chapter plot Excel file not found".to_string(),
        },
        ChapterInfoState::Unreadable(message) => ChapterInfoStatus::Unreadable {
            message: message.clone(),
        },
    };

    ConsoleView {
        map_points: tables.map_points.len(),
        map_message: format!("Loaded location data: {} items", tables.map_points.len()),
        chapter_info,
        preview: tables.map_points.as_ref().clone(),
    }
}
