//! Gazetteer Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("地名目录为空")]
    Empty,

    #[error("重复的地名: {0}")]
    DuplicateLocation(String),

    #[error("地名 {0} 含有空别名")]
    EmptyAlias(String),

    #[error("路线没有途经点: {0}")]
    EmptyRoute(String),

    #[error("地名目录解析失败: {0}")]
    Parse(String),
}
