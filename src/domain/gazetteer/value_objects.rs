//! Gazetteer Context - Value Objects

use serde::{Deserialize, Serialize};

/// 地名：规范名称 + 原文中的别名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub aliases: Vec<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// 统计所有别名在文本中出现的次数（从左到右、不重叠）
    pub fn count_in(&self, text: &str) -> u64 {
        self.aliases
            .iter()
            .filter(|alias| !alias.is_empty())
            .map(|alias| text.matches(alias.as_str()).count() as u64)
            .sum()
    }
}

/// 经纬度坐标，序列化为 `[lon, lat]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Waypoint {
    pub lon: f64,
    pub lat: f64,
}

impl Waypoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Waypoint {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Waypoint> for [f64; 2] {
    fn from(w: Waypoint) -> Self {
        [w.lon, w.lat]
    }
}

/// 人物路线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub actor: String,
    pub color: [u8; 3],
    pub waypoints: Vec<Waypoint>,
    /// 活跃章节，如 "Ch. 15-20"
    pub chapters: String,
    /// 路线说明，如 "Wenzhou -> Beijing"
    #[serde(default)]
    pub itinerary: String,
    #[serde(default)]
    pub note: String,
}

/// 地图点位（来自外部 CSV，不做计算）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub frequency: f64,
    /// CSV 中的 `Type` 列
    pub kind: String,
}
