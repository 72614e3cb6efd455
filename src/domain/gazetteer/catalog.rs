//! 地名目录
//!
//! 地名/别名表与人物路线表，启动时加载一次，之后只读

use serde::Deserialize;
use std::collections::HashSet;

use super::errors::GazetteerError;
use super::value_objects::{Location, Route, Waypoint};

/// 不可变的地名目录
#[derive(Debug, Clone)]
pub struct Gazetteer {
    locations: Vec<Location>,
    routes: Vec<Route>,
}

/// TOML 目录文件格式
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    routes: Vec<Route>,
}

impl Gazetteer {
    /// 创建并校验目录
    pub fn new(locations: Vec<Location>, routes: Vec<Route>) -> Result<Self, GazetteerError> {
        if locations.is_empty() {
            return Err(GazetteerError::Empty);
        }

        let mut seen = HashSet::new();
        for loc in &locations {
            if !seen.insert(loc.name.as_str()) {
                return Err(GazetteerError::DuplicateLocation(loc.name.clone()));
            }
            if loc.aliases.iter().any(|a| a.is_empty()) {
                return Err(GazetteerError::EmptyAlias(loc.name.clone()));
            }
        }

        if let Some(route) = routes.iter().find(|r| r.waypoints.is_empty()) {
            return Err(GazetteerError::EmptyRoute(route.actor.clone()));
        }

        Ok(Self { locations, routes })
    }

    /// 从 TOML 文本加载目录（`[[locations]]` + `[[routes]]`）
    pub fn from_toml_str(s: &str) -> Result<Self, GazetteerError> {
        let file: CatalogFile =
            toml::from_str(s).map_err(|e| GazetteerError::Parse(e.to_string()))?;
        Self::new(file.locations, file.routes)
    }

    /// 内置目录：《儒林外史》第十至二十回涉及的城市与人物路线
    pub fn builtin() -> Self {
        Self {
            locations: builtin_locations(),
            routes: builtin_routes(),
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}

// 别名保持繁体，与原文一致
fn builtin_locations() -> Vec<Location> {
    vec![
        Location::new(
            "Hangzhou",
            &[
                "杭州", "杭城", "西湖", "省城", "武林", "錢塘", "斷河頭", "清波門", "仁和",
                "錢塘門", "靈隱", "天竺", "蘇堤", "雷峰", "淨慈", "城隍山", "吳山",
            ],
        ),
        Location::new("Huzhou", &["湖州", "鶯脰湖", "新市鎮", "雙林", "婁府", "烏程"]),
        Location::new(
            "Beijing",
            &[
                "北京", "京師", "京裏", "京城", "都門", "魏闕", "長安", "順天府", "內廷",
                "入京", "進京",
            ],
        ),
        Location::new("Nanjing", &["南京", "金陵", "白下", "建康", "應天"]),
        Location::new("Yangzhou", &["揚州", "廣陵", "維揚", "江都"]),
        Location::new("Jinan", &["濟南", "歷下"]),
        Location::new("Suzhou", &["蘇州", "姑蘇", "吳門", "平江"]),
        Location::new("Wenzhou", &["溫州", "樂清"]),
        Location::new("Shaoxing", &["紹興", "會稽", "越城"]),
    ]
}

fn builtin_routes() -> Vec<Route> {
    vec![
        Route {
            actor: "Kuang Chaoren".to_string(),
            color: [255, 0, 0],
            waypoints: vec![
                Waypoint::new(120.98, 28.12),
                Waypoint::new(120.15, 30.27),
                Waypoint::new(120.58, 30.00),
                Waypoint::new(120.15, 30.27),
                Waypoint::new(119.41, 32.39),
                Waypoint::new(116.40, 39.90),
            ],
            chapters: "Ch. 15-20".to_string(),
            itinerary: "Wenzhou -> Beijing".to_string(),
            note: "A path of degeneration from the periphery to the center.".to_string(),
        },
        Route {
            actor: "Ma Chunshang".to_string(),
            color: [0, 128, 255],
            waypoints: vec![Waypoint::new(120.75, 30.75), Waypoint::new(120.15, 30.27)],
            chapters: "Ch. 13-15".to_string(),
            itinerary: "Jiaxing -> Hangzhou".to_string(),
            note: "Adhering to the Confucian orthodoxy in Jiangnan.".to_string(),
        },
        Route {
            actor: "Niu Buyi".to_string(),
            color: [0, 128, 0],
            waypoints: vec![
                Waypoint::new(120.58, 30.00),
                Waypoint::new(120.08, 30.89),
                Waypoint::new(119.41, 32.39),
                Waypoint::new(118.37, 31.35),
            ],
            chapters: "Ch. 10, 20".to_string(),
            itinerary: "Huzhou -> Wuhu".to_string(),
            note: "The desolation of wandering and dying in a foreign land.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Gazetteer::builtin();
        let validated = Gazetteer::new(builtin.locations.clone(), builtin.routes.clone());
        assert!(validated.is_ok());
        assert_eq!(builtin.locations().len(), 9);
        assert_eq!(builtin.routes().len(), 3);
    }

    #[test]
    fn test_location_names_keep_catalog_order() {
        let gazetteer = Gazetteer::builtin();
        let names: Vec<&str> = gazetteer.location_names().collect();
        assert_eq!(names.first(), Some(&"Hangzhou"));
        assert_eq!(names.last(), Some(&"Shaoxing"));
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let result = Gazetteer::new(
            vec![Location::new("A", &["甲"]), Location::new("A", &["乙"])],
            vec![],
        );
        assert!(matches!(result, Err(GazetteerError::DuplicateLocation(name)) if name == "A"));
    }

    #[test]
    fn test_empty_alias_rejected() {
        let result = Gazetteer::new(vec![Location::new("A", &["甲", ""])], vec![]);
        assert!(matches!(result, Err(GazetteerError::EmptyAlias(_))));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Gazetteer::new(vec![], vec![]),
            Err(GazetteerError::Empty)
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
[[locations]]
name = "Hangzhou"
aliases = ["杭州", "西湖"]

[[routes]]
actor = "Ma Chunshang"
color = [0, 128, 255]
waypoints = [[120.75, 30.75], [120.15, 30.27]]
chapters = "Ch. 13-15"
"#;
        let gazetteer = Gazetteer::from_toml_str(toml).unwrap();
        assert_eq!(gazetteer.locations()[0].aliases, vec!["杭州", "西湖"]);
        assert_eq!(gazetteer.routes()[0].waypoints[1], Waypoint::new(120.15, 30.27));
        assert!(gazetteer.routes()[0].itinerary.is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_route_without_waypoints() {
        let toml = r#"
[[locations]]
name = "Hangzhou"
aliases = ["杭州"]

[[routes]]
actor = "Nobody"
color = [0, 0, 0]
waypoints = []
chapters = ""
"#;
        assert!(matches!(
            Gazetteer::from_toml_str(toml),
            Err(GazetteerError::EmptyRoute(_))
        ));
    }
}
