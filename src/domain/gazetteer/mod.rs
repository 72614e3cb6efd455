//! Gazetteer Context - 地名限界上下文
//!
//! 职责:
//! - 地名及其别名（用于原文统计）
//! - 地图点位（来自 CSV）
//! - 人物路线（手工整理的途经点）

mod catalog;
mod errors;
mod value_objects;

pub use catalog::Gazetteer;
pub use errors::GazetteerError;
pub use value_objects::{Location, MapPoint, Route, Waypoint};
