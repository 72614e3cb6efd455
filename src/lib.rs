//! Rulin - 《儒林外史》空间分析看板
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Gazetteer: 地名目录（地点别名、人物路线）
//! - Chapter: 章节切分与地名统计、章节信息、原文检索
//!
//! 应用层 (application/):
//! - Ports: 数据加载端口（DatasetLoaderPort）
//! - Dashboard: 必需数据检查 + 章节统计
//! - Panels: 地图、趋势、章节详情、洞见检索、人物路线
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 页面外壳
//! - Loaders: CSV / TXT / XLSX / 图片文件加载与缓存

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
