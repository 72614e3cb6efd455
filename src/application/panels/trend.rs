//! 章节地名热力图
//!
//! 将章节统计"熔化"为 (章节, 城市, 次数) 长表，并汇总为矩阵

use serde::Serialize;

use crate::application::dashboard::DashboardTables;

const COLOR_SCALE: &str = "Reds";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub chapter: String,
    pub full_title: String,
    pub city: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPanel {
    /// x 轴：去重后的章节短标题，按首次出现顺序
    pub chapters: Vec<String>,
    /// y 轴：地名目录顺序
    pub cities: Vec<String>,
    /// `z[city][chapter]`，同一短标题的多章累加
    pub z: Vec<Vec<u64>>,
    pub cells: Vec<HeatmapCell>,
    pub color_scale: &'static str,
}

pub fn build_trend_panel(tables: &DashboardTables) -> TrendPanel {
    let cities: Vec<String> = tables.gazetteer.location_names().map(str::to_string).collect();

    let mut chapters: Vec<String> = Vec::new();
    for record in tables.chapter_stats.iter() {
        if !chapters.contains(&record.label) {
            chapters.push(record.label.clone());
        }
    }

    let mut z = vec![vec![0u64; chapters.len()]; cities.len()];
    let mut cells = Vec::with_capacity(cities.len() * tables.chapter_stats.len());

    for (y, city) in cities.iter().enumerate() {
        for record in tables.chapter_stats.iter() {
            let count = record.count_for(city).unwrap_or(0);
            if let Some(x) = chapters.iter().position(|c| *c == record.label) {
                z[y][x] += count;
            }
            cells.push(HeatmapCell {
                chapter: record.label.clone(),
                full_title: record.full_title.clone(),
                city: city.clone(),
                count,
            });
        }
    }

    TrendPanel {
        chapters,
        cities,
        z,
        cells,
        color_scale: COLOR_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard::fixtures::sample_tables;
    use crate::domain::chapter::aggregate_chapters;
    use std::sync::Arc;

    #[test]
    fn test_matrix_shape_and_values() {
        let panel = build_trend_panel(&sample_tables());

        assert_eq!(panel.chapters, vec!["第十回", "第十四回", "第二十回"]);
        assert_eq!(panel.cities, vec!["Hangzhou", "Huzhou", "Beijing"]);
        assert_eq!(panel.z[0], vec![1, 2, 0]);
        assert_eq!(panel.z[1], vec![1, 0, 0]);
        assert_eq!(panel.z[2], vec![0, 0, 3]);
    }

    #[test]
    fn test_cells_melted_city_major() {
        let panel = build_trend_panel(&sample_tables());

        assert_eq!(panel.cells.len(), 9);
        assert_eq!(panel.cells[0].city, "Hangzhou");
        assert_eq!(panel.cells[0].chapter, "第十回");
        assert_eq!(panel.cells[3].city, "Huzhou");
    }

    #[test]
    fn test_duplicate_labels_are_summed() {
        let mut tables = sample_tables();
        tables.chapter_stats = Arc::new(aggregate_chapters(
            "*卷一 上\n杭州\n*卷一 下\n杭州杭州\n",
            tables.gazetteer.locations(),
        ));

        let panel = build_trend_panel(&tables);
        assert_eq!(panel.chapters, vec!["卷一"]);
        assert_eq!(panel.z[0], vec![3]);
        assert_eq!(panel.cells.iter().filter(|c| c.city == "Hangzhou").count(), 2);
    }
}
