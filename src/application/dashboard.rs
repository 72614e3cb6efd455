//! Dashboard 数据装载
//!
//! 每次渲染前通过加载端口取得（已缓存的）数据表，检查必需文件，
//! 再做章节统计，产出所有面板共用的只读输入

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::application::error::ApplicationError;
use crate::application::ports::DatasetLoaderPort;
use crate::domain::chapter::{aggregate_chapters, ChapterInfo, ChapterRecord};
use crate::domain::gazetteer::{Gazetteer, MapPoint};

/// 必需文件缺失时展示给用户的提示
pub const MISSING_DATA_MESSAGE: &str =
    "Missing basic data files. Please check if csv and txt files are uploaded.";

/// 数据文件路径
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub locations_csv: PathBuf,
    pub corpus_txt: PathBuf,
    pub chapter_info: PathBuf,
    pub background_image: PathBuf,
}

/// 章节信息表格的装载状态
#[derive(Debug, Clone)]
pub enum ChapterInfoState {
    Loaded(Arc<Vec<ChapterInfo>>),
    Missing { path: PathBuf },
    /// 读取失败或列名不符，附带用户可见的提示
    Unreadable(String),
}

/// 所有面板共用的只读输入
#[derive(Debug, Clone)]
pub struct DashboardTables {
    pub gazetteer: Arc<Gazetteer>,
    pub map_points: Arc<Vec<MapPoint>>,
    pub corpus: Arc<String>,
    pub chapter_stats: Arc<Vec<ChapterRecord>>,
    pub chapter_info: ChapterInfoState,
}

/// 装载 Dashboard 查询
#[derive(Debug, Clone)]
pub struct LoadDashboard;

/// LoadDashboard Handler
pub struct LoadDashboardHandler {
    loader: Arc<dyn DatasetLoaderPort>,
    gazetteer: Arc<Gazetteer>,
    paths: DataPaths,
    /// 最近一次的章节统计，与产生它的原文 Arc 绑定
    stats: Mutex<Option<(Arc<String>, Arc<Vec<ChapterRecord>>)>>,
}

impl LoadDashboardHandler {
    pub fn new(
        loader: Arc<dyn DatasetLoaderPort>,
        gazetteer: Arc<Gazetteer>,
        paths: DataPaths,
    ) -> Self {
        Self {
            loader,
            gazetteer,
            paths,
            stats: Mutex::new(None),
        }
    }

    /// 原文来自按路径的缓存，同一个 Arc 的统计只做一次
    fn chapter_stats(&self, corpus: &Arc<String>) -> Arc<Vec<ChapterRecord>> {
        if let Ok(guard) = self.stats.lock() {
            if let Some((cached_corpus, stats)) = guard.as_ref() {
                if Arc::ptr_eq(cached_corpus, corpus) {
                    return stats.clone();
                }
            }
        }

        let stats = Arc::new(aggregate_chapters(corpus, self.gazetteer.locations()));
        if let Ok(mut guard) = self.stats.lock() {
            *guard = Some((corpus.clone(), stats.clone()));
        }
        stats
    }

    pub async fn handle(&self, _query: LoadDashboard) -> Result<DashboardTables, ApplicationError> {
        let map_points = self.loader.load_map_points(&self.paths.locations_csv).await?;
        let corpus = self.loader.load_corpus(&self.paths.corpus_txt).await?;

        let (Some(map_points), Some(corpus)) = (map_points, corpus) else {
            tracing::error!(
                locations_csv = %self.paths.locations_csv.display(),
                corpus_txt = %self.paths.corpus_txt.display(),
                "Mandatory data file missing, dashboard halted"
            );
            return Err(ApplicationError::MissingData(MISSING_DATA_MESSAGE.to_string()));
        };

        let chapter_info = match self.loader.load_chapter_info(&self.paths.chapter_info).await {
            Ok(Some(rows)) => ChapterInfoState::Loaded(rows),
            Ok(None) => ChapterInfoState::Missing {
                path: self.paths.chapter_info.clone(),
            },
            Err(e) => {
                tracing::warn!(
                    path = %self.paths.chapter_info.display(),
                    error = %e,
                    "Chapter info unavailable"
                );
                ChapterInfoState::Unreadable(e.to_string())
            }
        };

        let chapter_stats = self.chapter_stats(&corpus);

        Ok(DashboardTables {
            gazetteer: self.gazetteer.clone(),
            map_points,
            corpus,
            chapter_stats,
            chapter_info,
        })
    }

    /// 可选背景图片；任何失败都只记录日志
    pub async fn background(&self) -> Option<Arc<String>> {
        match self.loader.load_background(&self.paths.background_image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, "Background image unavailable");
                None
            }
        }
    }
}
