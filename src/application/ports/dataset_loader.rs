//! Dataset Loader Port - 数据文件加载抽象
//!
//! 具体实现在 infrastructure/loaders 层（带按路径的进程级缓存）

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::chapter::ChapterInfo;
use crate::domain::gazetteer::MapPoint;

/// 加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("File is not valid UTF-8 text: {0}")]
    InvalidUtf8(PathBuf),

    #[error("Failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("Failed to read Excel: {0}")]
    Spreadsheet(String),

    #[error("Excel file column names do not match. Please check if it contains 'CHAPTER', 'CHARACTERS', 'MAIN PLOTS', 'SUMMARY'")]
    ColumnMismatch,
}

impl LoadError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Dataset Loader Port
///
/// 每个方法在文件不存在时返回 `Ok(None)`；不重试，不做部分读取
#[async_trait]
pub trait DatasetLoaderPort: Send + Sync {
    /// 地图点位 CSV
    async fn load_map_points(&self, path: &Path) -> Result<Option<Arc<Vec<MapPoint>>>, LoadError>;

    /// 原文 TXT
    async fn load_corpus(&self, path: &Path) -> Result<Option<Arc<String>>, LoadError>;

    /// 章节信息表格（xlsx 第一个工作表）
    async fn load_chapter_info(
        &self,
        path: &Path,
    ) -> Result<Option<Arc<Vec<ChapterInfo>>>, LoadError>;

    /// 背景图片，返回 base64 编码
    async fn load_background(&self, path: &Path) -> Result<Option<Arc<String>>, LoadError>;
}
