//! Dashboard 面板
//!
//! 每个面板都是只读数据表到视图模型的纯函数，彼此独立，可按任意顺序求值

mod console;
mod details;
mod insight;
mod map;
mod route;
mod trend;

use serde::Serialize;

pub use console::{build_console, ChapterInfoStatus, ConsoleView};
pub use details::{build_details_panel, DetailsPanel};
pub use insight::{
    build_insight_panel, InsightPanel, DEFAULT_KEYWORD, EMPTY_KEYWORD_MESSAGE, NO_MATCH_MESSAGE,
};
pub use map::{build_map_panel, MapPanel, RankingBar, ScatterPoint};
pub use route::{build_route_panel, RouteMarker, RouteNote, RoutePanel, RoutePath};
pub use trend::{build_trend_panel, HeatmapCell, TrendPanel};

/// 地图初始视角
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}
