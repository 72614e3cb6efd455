//! 页面外壳
//!
//! 静态 HTML，只负责拉取各面板 JSON 并绘制；可选背景图片以 data URL 注入

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

const INDEX_HTML: &str = include_str!("../../../../assets/index.html");
const BACKGROUND_PLACEHOLDER: &str = "/* background */";

fn background_css(encoded: &str) -> String {
    format!(
        ".app {{ background-image: url(\"data:image/jpg;base64,{encoded}\"); \
background-size: cover; background-position: center; background-repeat: no-repeat; \
background-attachment: fixed; }}\n\
.main {{ background-color: rgba(255, 255, 255, 0.9); border-radius: 10px; \
box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }}"
    )
}

/// 渲染页面
pub fn render_index(background: Option<&str>) -> String {
    let css = background.map(background_css).unwrap_or_default();
    INDEX_HTML.replacen(BACKGROUND_PLACEHOLDER, &css, 1)
}

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let background = state.dashboard_handler.background().await;
    Html(render_index(background.as_deref().map(String::as_str)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_background() {
        let html = render_index(None);
        assert!(html.contains("The Scholars Location Analysis"));
        assert!(!html.contains(BACKGROUND_PLACEHOLDER));
        assert!(!html.contains("data:image/jpg"));
    }

    #[test]
    fn test_background_injected() {
        let html = render_index(Some("anBn"));
        assert!(html.contains("data:image/jpg;base64,anBn"));
    }
}
