//! 按文件路径的进程级缓存
//!
//! 条目在进程生命周期内有效，没有淘汰策略；只缓存成功加载的存在文件

use dashmap::DashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileCache<T> {
    name: &'static str,
    entries: DashMap<PathBuf, Arc<T>>,
}

impl<T> FileCache<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, path: &Path) -> Option<Arc<T>> {
        self.entries.get(path).map(|entry| entry.value().clone())
    }

    /// 写入缓存；并发加载同一路径时保留先写入的值
    pub fn insert(&self, path: &Path, value: T) -> Arc<T> {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(value))
            .value()
            .clone()
    }

    /// 命中则直接返回，否则调用 `load`；`load` 返回 `None`（文件缺失）时不缓存
    pub async fn get_or_try_load<F, Fut, E>(&self, path: &Path, load: F) -> Result<Option<Arc<T>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        if let Some(hit) = self.get(path) {
            tracing::debug!(cache = self.name, path = %path.display(), "Cache hit");
            return Ok(Some(hit));
        }

        tracing::debug!(cache = self.name, path = %path.display(), "Cache miss");
        match load().await? {
            Some(value) => Ok(Some(self.insert(path, value))),
            None => Ok(None),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
