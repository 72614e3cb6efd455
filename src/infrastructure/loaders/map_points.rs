//! 地图点位 CSV 解析
//!
//! 列: Name, Lon, Lat, Frequency, Type（多余的列忽略，允许 UTF-8 BOM）

use serde::Deserialize;

use crate::domain::gazetteer::MapPoint;

#[derive(Debug, Deserialize)]
struct MapPointRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Lon")]
    lon: f64,
    #[serde(rename = "Lat")]
    lat: f64,
    #[serde(rename = "Frequency")]
    frequency: f64,
    #[serde(rename = "Type", default)]
    kind: String,
}

impl From<MapPointRow> for MapPoint {
    fn from(row: MapPointRow) -> Self {
        Self {
            name: row.name,
            lon: row.lon,
            lat: row.lat,
            frequency: row.frequency,
            kind: row.kind,
        }
    }
}

pub fn parse_map_points(text: &str) -> Result<Vec<MapPoint>, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<MapPointRow>()
        .map(|row| row.map(MapPoint::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_bom_and_extra_columns() {
        let csv = "\u{feff}Name,Lon,Lat,Frequency,Type,Note\n\
Hangzhou,120.15,30.27,42,City,西湖\n\
Beijing, 116.40 ,39.90,12.0,Capital,\n";
        let points = parse_map_points(csv).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Hangzhou");
        assert_eq!(points[0].frequency, 42.0);
        assert_eq!(points[1].lon, 116.40);
        assert_eq!(points[1].kind, "Capital");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "Type,Frequency,Lat,Lon,Name\nCity,3,30.0,120.0,Huzhou\n";
        let points = parse_map_points(csv).unwrap();
        assert_eq!(points[0].name, "Huzhou");
        assert_eq!(points[0].lat, 30.0);
    }

    #[test]
    fn test_bad_number_is_error() {
        let csv = "Name,Lon,Lat,Frequency,Type\nHangzhou,east,30.27,42,City\n";
        assert!(parse_map_points(csv).is_err());
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_map_points("Name,Lon,Lat,Frequency,Type\n").unwrap().is_empty());
    }
}
