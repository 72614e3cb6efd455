//! 人物路线图

use serde::Serialize;

use super::ViewState;
use crate::application::dashboard::DashboardTables;
use crate::domain::gazetteer::Waypoint;

const MARKER_RADIUS: f64 = 8000.0;
const INITIAL_VIEW: ViewState = ViewState {
    latitude: 32.0,
    longitude: 118.0,
    zoom: 5.0,
};

#[derive(Debug, Clone, Serialize)]
pub struct RoutePath {
    pub actor: String,
    pub color: [u8; 3],
    pub path: Vec<Waypoint>,
    pub chapters: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteMarker {
    pub actor: String,
    pub color: [u8; 3],
    pub position: Waypoint,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteNote {
    pub actor: String,
    pub color: [u8; 3],
    pub itinerary: String,
    pub chapters: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutePanel {
    pub view: ViewState,
    pub paths: Vec<RoutePath>,
    /// 所有途经点展平
    pub markers: Vec<RouteMarker>,
    pub notes: Vec<RouteNote>,
}

pub fn build_route_panel(tables: &DashboardTables) -> RoutePanel {
    let routes = tables.gazetteer.routes();

    let paths = routes
        .iter()
        .map(|r| RoutePath {
            actor: r.actor.clone(),
            color: r.color,
            path: r.waypoints.clone(),
            chapters: r.chapters.clone(),
        })
        .collect();

    let markers = routes
        .iter()
        .flat_map(|r| {
            r.waypoints.iter().map(move |w| RouteMarker {
                actor: r.actor.clone(),
                color: r.color,
                position: *w,
                radius: MARKER_RADIUS,
            })
        })
        .collect();

    let notes = routes
        .iter()
        .map(|r| RouteNote {
            actor: r.actor.clone(),
            color: r.color,
            itinerary: r.itinerary.clone(),
            chapters: r.chapters.clone(),
            note: r.note.clone(),
        })
        .collect();

    RoutePanel {
        view: INITIAL_VIEW,
        paths,
        markers,
        notes,
    }
}
