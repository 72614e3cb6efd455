//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 数据文件加载端口
//! - dashboard: 装载只读数据表（必需文件检查 + 章节统计）
//! - panels: 各面板的视图构建函数
//! - error: 应用层错误定义

pub mod dashboard;
pub mod error;
pub mod panels;
pub mod ports;

pub use dashboard::{
    ChapterInfoState, DashboardTables, DataPaths, LoadDashboard, LoadDashboardHandler,
    MISSING_DATA_MESSAGE,
};
pub use error::ApplicationError;
pub use ports::{DatasetLoaderPort, LoadError};
