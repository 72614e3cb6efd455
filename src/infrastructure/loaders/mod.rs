//! Loaders - 数据文件加载适配器
//!
//! 实现 DatasetLoaderPort：按路径做进程级缓存，文件缺失返回 None

mod chapter_sheet;
mod file_cache;
mod file_loader;
mod map_points;

pub use chapter_sheet::{parse_chapter_rows, read_first_sheet};
pub use file_cache::FileCache;
pub use file_loader::FileDatasetLoader;
pub use map_points::parse_map_points;
