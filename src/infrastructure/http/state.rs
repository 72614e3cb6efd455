//! Application State
//!
//! 只读：地名目录 + 带缓存的数据加载器，没有跨请求的可变状态

use std::sync::Arc;

use crate::application::{DataPaths, DatasetLoaderPort, LoadDashboardHandler};
use crate::domain::gazetteer::Gazetteer;

/// 应用状态
pub struct AppState {
    pub dashboard_handler: LoadDashboardHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        loader: Arc<dyn DatasetLoaderPort>,
        gazetteer: Arc<Gazetteer>,
        paths: DataPaths,
    ) -> Self {
        Self {
            dashboard_handler: LoadDashboardHandler::new(loader, gazetteer, paths),
        }
    }
}
