//! File Dataset Loader - 文件系统数据加载实现
//!
//! 实现 DatasetLoaderPort trait

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

use super::chapter_sheet::{parse_chapter_rows, read_first_sheet};
use super::file_cache::FileCache;
use super::map_points::parse_map_points;
use crate::application::ports::{DatasetLoaderPort, LoadError};
use crate::domain::chapter::ChapterInfo;
use crate::domain::gazetteer::MapPoint;

/// 文件系统数据加载器
///
/// 每类数据各有一个按路径的缓存
pub struct FileDatasetLoader {
    map_points: FileCache<Vec<MapPoint>>,
    corpus: FileCache<String>,
    chapter_info: FileCache<Vec<ChapterInfo>>,
    background: FileCache<String>,
}

impl FileDatasetLoader {
    pub fn new() -> Self {
        Self {
            map_points: FileCache::new("map_points"),
            corpus: FileCache::new("corpus"),
            chapter_info: FileCache::new("chapter_info"),
            background: FileCache::new("background"),
        }
    }
}

impl Default for FileDatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// 读取文件；不存在时返回 None
async fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>, LoadError> {
    match fs::read(path).await {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), size = bytes.len(), "Data file read");
            Ok(Some(bytes))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Data file not found");
            Ok(None)
        }
        Err(e) => Err(LoadError::io(path, e)),
    }
}

fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String, LoadError> {
    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8(path.to_path_buf()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[async_trait]
impl DatasetLoaderPort for FileDatasetLoader {
    async fn load_map_points(&self, path: &Path) -> Result<Option<Arc<Vec<MapPoint>>>, LoadError> {
        self.map_points
            .get_or_try_load(path, || async {
                let Some(bytes) = read_if_exists(path).await? else {
                    return Ok(None);
                };
                let text = decode_text(path, bytes)?;
                let points = parse_map_points(&text).map_err(|e| LoadError::Csv {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::info!(path = %path.display(), points = points.len(), "Map points loaded");
                Ok::<_, LoadError>(Some(points))
            })
            .await
    }

    async fn load_corpus(&self, path: &Path) -> Result<Option<Arc<String>>, LoadError> {
        self.corpus
            .get_or_try_load(path, || async {
                let Some(bytes) = read_if_exists(path).await? else {
                    return Ok(None);
                };
                let text = decode_text(path, bytes)?;
                tracing::info!(path = %path.display(), chars = text.chars().count(), "Corpus loaded");
                Ok::<_, LoadError>(Some(text))
            })
            .await
    }

    async fn load_chapter_info(
        &self,
        path: &Path,
    ) -> Result<Option<Arc<Vec<ChapterInfo>>>, LoadError> {
        self.chapter_info
            .get_or_try_load(path, || async {
                let Some(bytes) = read_if_exists(path).await? else {
                    return Ok(None);
                };
                let rows = tokio::task::spawn_blocking(move || read_first_sheet(bytes))
                    .await
                    .map_err(|e| LoadError::Spreadsheet(e.to_string()))??;
                let infos = parse_chapter_rows(&rows)?;
                tracing::info!(path = %path.display(), chapters = infos.len(), "Chapter info loaded");
                Ok::<_, LoadError>(Some(infos))
            })
            .await
    }

    async fn load_background(&self, path: &Path) -> Result<Option<Arc<String>>, LoadError> {
        self.background
            .get_or_try_load(path, || async {
                let Some(bytes) = read_if_exists(path).await? else {
                    return Ok(None);
                };
                Ok::<_, LoadError>(Some(STANDARD.encode(bytes)))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CSV: &str = "Name,Lon,Lat,Frequency,Type\nHangzhou,120.15,30.27,42,City\n";

    #[tokio::test]
    async fn test_missing_files_return_none() {
        let dir = TempDir::new().unwrap();
        let loader = FileDatasetLoader::new();

        assert!(loader.load_map_points(&dir.path().join("a.csv")).await.unwrap().is_none());
        assert!(loader.load_corpus(&dir.path().join("a.txt")).await.unwrap().is_none());
        assert!(loader
            .load_chapter_info(&dir.path().join("a.xlsx"))
            .await
            .unwrap()
            .is_none());
        assert!(loader.load_background(&dir.path().join("a.jpg")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_loaded_tables_are_memoized_by_path() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("cities.csv");
        std::fs::write(&csv_path, CSV).unwrap();

        let loader = FileDatasetLoader::new();
        let first = loader.load_map_points(&csv_path).await.unwrap().unwrap();

        // 文件删除后仍返回缓存
        std::fs::remove_file(&csv_path).unwrap();
        let second = loader.load_map_points(&csv_path).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].name, "Hangzhou");
    }

    #[tokio::test]
    async fn test_missing_file_rechecked_later() {
        let dir = TempDir::new().unwrap();
        let txt_path = dir.path().join("corpus.txt");
        let loader = FileDatasetLoader::new();

        assert!(loader.load_corpus(&txt_path).await.unwrap().is_none());
        std::fs::write(&txt_path, "\u{feff}*第一回 說楔子\n").unwrap();
        let corpus = loader.load_corpus(&txt_path).await.unwrap().unwrap();
        assert!(corpus.starts_with('*'));
    }

    #[tokio::test]
    async fn test_invalid_utf8_corpus_is_error() {
        let dir = TempDir::new().unwrap();
        let txt_path = dir.path().join("corpus.txt");
        std::fs::write(&txt_path, [0xff, 0xfe, 0x00]).unwrap();

        let loader = FileDatasetLoader::new();
        assert!(matches!(
            loader.load_corpus(&txt_path).await,
            Err(LoadError::InvalidUtf8(_))
        ));
    }

    #[tokio::test]
    async fn test_broken_spreadsheet_is_error() {
        let dir = TempDir::new().unwrap();
        let xlsx_path = dir.path().join("chapter_data.xlsx");
        std::fs::write(&xlsx_path, "CHAPTER,SUMMARY\n").unwrap();

        let loader = FileDatasetLoader::new();
        let err = loader.load_chapter_info(&xlsx_path).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read Excel"));
    }

    #[tokio::test]
    async fn test_background_base64() {
        let dir = TempDir::new().unwrap();
        let img_path = dir.path().join("BG.jpg");
        std::fs::write(&img_path, b"jpg").unwrap();

        let loader = FileDatasetLoader::new();
        let encoded = loader.load_background(&img_path).await.unwrap().unwrap();
        assert_eq!(encoded.as_str(), "anBn");
    }
}
