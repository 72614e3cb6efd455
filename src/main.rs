//! Rulin - 《儒林外史》空间分析看板
//!
//! 启动流程：配置 -> 日志 -> 地名目录 -> 数据加载器 -> HTTP 服务

use std::path::Path;
use std::sync::Arc;

use rulin::config::{load_config, print_config, LogConfig};
use rulin::domain::gazetteer::Gazetteer;
use rulin::infrastructure::http::{AppState, HttpServer, ServerConfig};
use rulin::infrastructure::FileDatasetLoader;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},rulin={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 加载地名目录：配置了 TOML 文件则读取，否则使用内置目录
async fn load_gazetteer(path: Option<&Path>) -> anyhow::Result<Gazetteer> {
    let Some(path) = path else {
        return Ok(Gazetteer::builtin());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read gazetteer {:?}: {}", path, e))?;
    let gazetteer = Gazetteer::from_toml_str(&content)?;

    tracing::info!(
        locations = gazetteer.locations().len(),
        routes = gazetteer.routes().len(),
        "Loaded gazetteer from {:?}",
        path
    );
    Ok(gazetteer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Rulin - The Scholars spatial analysis dashboard");
    print_config(&config);

    let gazetteer = Arc::new(load_gazetteer(config.data.gazetteer.as_deref()).await?);
    let loader = Arc::new(FileDatasetLoader::new());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(loader, gazetteer, config.data.paths());

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
