//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::DataPaths;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据文件配置
    #[serde(default)]
    pub data: DataConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据文件配置（相对路径以工作目录为基准）
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// 地图点位 CSV（必需）
    #[serde(default = "default_locations_csv")]
    pub locations_csv: PathBuf,

    /// 原文 TXT（必需）
    #[serde(default = "default_corpus_txt")]
    pub corpus_txt: PathBuf,

    /// 章节信息表格（可选）
    #[serde(default = "default_chapter_info")]
    pub chapter_info: PathBuf,

    /// 背景图片（可选）
    #[serde(default = "default_background_image")]
    pub background_image: PathBuf,

    /// 自定义地名目录 TOML；未设置时使用内置目录
    #[serde(default)]
    pub gazetteer: Option<PathBuf>,
}

fn default_locations_csv() -> PathBuf {
    PathBuf::from("儒林外史_7_Cities.csv")
}

fn default_corpus_txt() -> PathBuf {
    PathBuf::from("总.txt")
}

fn default_chapter_info() -> PathBuf {
    PathBuf::from("chapter_data.xlsx")
}

fn default_background_image() -> PathBuf {
    PathBuf::from("BG.jpg")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            locations_csv: default_locations_csv(),
            corpus_txt: default_corpus_txt(),
            chapter_info: default_chapter_info(),
            background_image: default_background_image(),
            gazetteer: None,
        }
    }
}

impl DataConfig {
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            locations_csv: self.locations_csv.clone(),
            corpus_txt: self.corpus_txt.clone(),
            chapter_info: self.chapter_info.clone(),
            background_image: self.background_image.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
