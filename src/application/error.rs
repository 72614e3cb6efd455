//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::LoadError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 必需的数据文件缺失（地图 CSV 或原文 TXT），整个页面停止渲染
    #[error("{0}")]
    MissingData(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 功能不可用（可选数据缺失或无法读取）
    #[error("{0}")]
    Unavailable(String),

    /// 数据文件加载失败
    #[error("Load error: {0}")]
    LoadError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建功能不可用错误
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

impl From<LoadError> for ApplicationError {
    fn from(err: LoadError) -> Self {
        Self::LoadError(err.to_string())
    }
}
