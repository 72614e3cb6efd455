//! 地名频次地图 + 总频次排行

use serde::Serialize;

use super::ViewState;
use crate::application::dashboard::DashboardTables;
use crate::domain::gazetteer::Waypoint;

const POINT_COLOR: [u8; 4] = [200, 30, 0, 160];
const RADIUS_PER_FREQUENCY: f64 = 4000.0;
const INITIAL_VIEW: ViewState = ViewState {
    latitude: 31.0,
    longitude: 119.0,
    zoom: 5.0,
};

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub position: Waypoint,
    pub frequency: f64,
    pub kind: String,
    pub radius: f64,
    pub color: [u8; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingBar {
    pub name: String,
    pub frequency: f64,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPanel {
    pub view: ViewState,
    pub points: Vec<ScatterPoint>,
    /// 按频次升序（横向条形图自下而上）
    pub ranking: Vec<RankingBar>,
}

pub fn build_map_panel(tables: &DashboardTables) -> MapPanel {
    let points = tables
        .map_points
        .iter()
        .map(|p| ScatterPoint {
            name: p.name.clone(),
            position: Waypoint::new(p.lon, p.lat),
            frequency: p.frequency,
            kind: p.kind.clone(),
            radius: p.frequency * RADIUS_PER_FREQUENCY,
            color: POINT_COLOR,
        })
        .collect();

    let mut ranking: Vec<RankingBar> = tables
        .map_points
        .iter()
        .map(|p| RankingBar {
            name: p.name.clone(),
            frequency: p.frequency,
            kind: p.kind.clone(),
        })
        .collect();
    ranking.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

    MapPanel {
        view: INITIAL_VIEW,
        points,
        ranking,
    }
}
