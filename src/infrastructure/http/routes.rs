//! HTTP Routes
//!
//! Endpoints:
//! - /                      GET   页面外壳
//! - /api/ping              GET   健康检查
//! - /api/console           GET   侧边栏数据控制台
//! - /api/panels/map        GET   地名频次地图 + 排行
//! - /api/panels/trend      GET   章节热力图
//! - /api/panels/details    POST  章节人物与情节 { chapter? }
//! - /api/panels/insight    POST  深度分析 + 原文检索 { keyword? }
//! - /api/panels/route      GET   人物路线图

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/console", get(handlers::console))
        .nest("/panels", panel_routes())
}

/// Panel 路由
fn panel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/map", get(handlers::map_panel))
        .route("/trend", get(handlers::trend_panel))
        .route("/details", post(handlers::details_panel))
        .route("/insight", post(handlers::insight_panel))
        .route("/route", get(handlers::route_panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
    use serde_json::Value;
    use std::path::Path;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::application::{DataPaths, MISSING_DATA_MESSAGE};
    use crate::domain::gazetteer::Gazetteer;
    use crate::infrastructure::loaders::FileDatasetLoader;

    const CSV: &str = "Name,Lon,Lat,Frequency,Type\n\
Hangzhou,120.15,30.27,42,City\n\
Beijing,116.40,39.90,12,Capital\n";

    const CORPUS: &str = "*第十四回 蘧公孫書坊送良友\n馬二先生游西湖。\n\
*第二十回 匡超人高興長安道\n進京之後。\n";

    fn paths(dir: &Path) -> DataPaths {
        DataPaths {
            locations_csv: dir.join("cities.csv"),
            corpus_txt: dir.join("corpus.txt"),
            chapter_info: dir.join("chapter_data.xlsx"),
            background_image: dir.join("BG.jpg"),
        }
    }

    fn app(dir: &Path) -> Router {
        let state = AppState::new(
            Arc::new(FileDatasetLoader::new()),
            Arc::new(Gazetteer::builtin()),
            paths(dir),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn seeded_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cities.csv"), CSV).unwrap();
        std::fs::write(dir.path().join("corpus.txt"), CORPUS).unwrap();
        dir
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn call_json(app: Router, method: Method, uri: &str, body: Option<&str>) -> Value {
        let (status, bytes) = call(app, method, uri, body).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let dir = TempDir::new().unwrap();
        let json = call_json(app(dir.path()), Method::GET, "/api/ping", None).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_served_without_data() {
        let dir = TempDir::new().unwrap();
        let (status, bytes) = call(app(dir.path()), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(bytes).unwrap().contains("Data Console"));
    }

    #[tokio::test]
    async fn test_missing_corpus_halts_every_panel() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cities.csv"), CSV).unwrap();

        for (method, uri, body) in [
            (Method::GET, "/api/console", None),
            (Method::GET, "/api/panels/map", None),
            (Method::GET, "/api/panels/trend", None),
            (Method::POST, "/api/panels/details", Some("{}")),
            (Method::POST, "/api/panels/insight", Some("{}")),
            (Method::GET, "/api/panels/route", None),
        ] {
            let json = call_json(app(dir.path()), method, uri, body).await;
            assert_eq!(json["errno"], 503, "{}", uri);
            assert_eq!(json["error"], MISSING_DATA_MESSAGE);
            assert!(json["data"].is_null());
        }
    }

    #[tokio::test]
    async fn test_trend_panel_counts() {
        let dir = seeded_dir();
        let json = call_json(app(dir.path()), Method::GET, "/api/panels/trend", None).await;

        assert_eq!(json["errno"], 0);
        let data = &json["data"];
        assert_eq!(data["chapters"], serde_json::json!(["第十四回", "第二十回"]));
        assert_eq!(data["cities"][0], "Hangzhou");
        assert_eq!(data["z"][0], serde_json::json!([1, 0]));
        // Beijing: 長安 + 進京
        assert_eq!(data["z"][2], serde_json::json!([0, 2]));
    }

    #[tokio::test]
    async fn test_map_panel() {
        let dir = seeded_dir();
        let json = call_json(app(dir.path()), Method::GET, "/api/panels/map", None).await;

        let data = &json["data"];
        assert_eq!(data["points"][0]["position"], serde_json::json!([120.15, 30.27]));
        assert_eq!(data["ranking"][0]["name"], "Beijing");
        assert_eq!(data["view"]["zoom"], 5.0);
    }

    #[tokio::test]
    async fn test_insight_search() {
        let dir = seeded_dir();
        let app = app(dir.path());

        let json = call_json(app.clone(), Method::POST, "/api/panels/insight", Some("{}")).await;
        assert_eq!(json["data"]["keyword"], "西湖");
        assert_eq!(json["data"]["matches"], serde_json::json!(["馬二先生游西湖。"]));

        let json = call_json(
            app,
            Method::POST,
            "/api/panels/insight",
            Some(r#"{"keyword":"揚州"}"#),
        )
        .await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["message"], "No relevant content found.");
    }

    #[tokio::test]
    async fn test_details_unavailable_without_spreadsheet() {
        let dir = seeded_dir();
        let app = app(dir.path());

        let json = call_json(app.clone(), Method::POST, "/api/panels/details", Some("{}")).await;
        assert_eq!(json["errno"], 503);
        assert!(json["error"].as_str().unwrap().starts_with("Please ensure"));

        // 其他面板不受影响
        let json = call_json(app, Method::GET, "/api/console", None).await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["chapter_info"]["status"], "missing");
    }

    #[tokio::test]
    async fn test_malformed_body_is_enveloped() {
        let dir = seeded_dir();
        let app = app(dir.path());

        for (uri, body) in [
            ("/api/panels/details", "not json"),
            ("/api/panels/details", r#"{"chapter": 10}"#),
            ("/api/panels/insight", r#"{"keyword": ["西湖"]}"#),
        ] {
            let json = call_json(app.clone(), Method::POST, uri, Some(body)).await;
            assert_eq!(json["errno"], 400, "{} {}", uri, body);
            assert!(!json["error"].as_str().unwrap().is_empty());
            assert!(json["data"].is_null());
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let dir = seeded_dir();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/panels/insight")
            .body(Body::from("{}"))
            .unwrap();

        let response = app(dir.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["errno"], 400);
    }

    #[tokio::test]
    async fn test_route_panel() {
        let dir = seeded_dir();
        let json = call_json(app(dir.path()), Method::GET, "/api/panels/route", None).await;

        let data = &json["data"];
        assert_eq!(data["paths"].as_array().unwrap().len(), 3);
        assert_eq!(data["markers"].as_array().unwrap().len(), 12);
        assert_eq!(data["notes"][0]["itinerary"], "Wenzhou -> Beijing");
    }
}
