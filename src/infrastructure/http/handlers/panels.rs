//! Panel HTTP Handlers
//!
//! 每个请求重新装载（已缓存的）数据表并重新计算对应面板

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::panels::{
    build_console, build_details_panel, build_insight_panel, build_map_panel, build_route_panel,
    build_trend_panel, ConsoleView, DetailsPanel, InsightPanel, MapPanel, RoutePanel, TrendPanel,
};
use crate::application::{DashboardTables, LoadDashboard};
use crate::infrastructure::http::dto::{ApiResponse, DetailsRequest, InsightRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

type PanelResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

async fn load_tables(state: &AppState) -> Result<DashboardTables, ApiError> {
    Ok(state.dashboard_handler.handle(LoadDashboard).await?)
}

/// 侧边栏数据控制台
pub async fn console(State(state): State<Arc<AppState>>) -> PanelResult<ConsoleView> {
    let tables = load_tables(&state).await?;
    Ok(Json(ApiResponse::success(build_console(&tables))))
}

/// 地名频次地图 + 排行
pub async fn map_panel(State(state): State<Arc<AppState>>) -> PanelResult<MapPanel> {
    let tables = load_tables(&state).await?;
    Ok(Json(ApiResponse::success(build_map_panel(&tables))))
}

/// 章节热力图
pub async fn trend_panel(State(state): State<Arc<AppState>>) -> PanelResult<TrendPanel> {
    let tables = load_tables(&state).await?;
    Ok(Json(ApiResponse::success(build_trend_panel(&tables))))
}

/// 章节人物与情节
pub async fn details_panel(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DetailsRequest>, JsonRejection>,
) -> PanelResult<DetailsPanel> {
    let Json(req) = payload?;
    let tables = load_tables(&state).await?;
    let panel = build_details_panel(&tables, req.chapter.as_deref())?;

    tracing::debug!(chapter = %panel.selected, "Chapter details rendered");

    Ok(Json(ApiResponse::success(panel)))
}

/// 深度分析 + 原文检索
pub async fn insight_panel(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsightRequest>, JsonRejection>,
) -> PanelResult<InsightPanel> {
    let Json(req) = payload?;
    let tables = load_tables(&state).await?;
    let panel = build_insight_panel(&tables, req.keyword.as_deref());

    tracing::debug!(keyword = %panel.keyword, matches = panel.matches.len(), "Keyword searched");

    Ok(Json(ApiResponse::success(panel)))
}

/// 人物路线图
pub async fn route_panel(State(state): State<Arc<AppState>>) -> PanelResult<RoutePanel> {
    let tables = load_tables(&state).await?;
    Ok(Json(ApiResponse::success(build_route_panel(&tables))))
}
