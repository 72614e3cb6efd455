//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Panel DTOs
// ============================================================================

/// 章节详情请求；不指定章节时显示第一章
#[derive(Debug, Default, Deserialize)]
pub struct DetailsRequest {
    #[serde(default)]
    pub chapter: Option<String>,
}

/// 原文检索请求；不指定关键词时使用默认关键词
#[derive(Debug, Default, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub keyword: Option<String>,
}
