//! 章节信息表格解析
//!
//! 读取 xlsx 的第一个工作表，首行为列名；必需列 CHAPTER，
//! 其余列 CHARACTERS / MAIN PLOTS / SUMMARY 缺失时记为 "No Data"

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use std::io::Cursor;

use crate::application::ports::LoadError;
use crate::domain::chapter::{ChapterInfo, NO_DATA};

const COL_CHAPTER: &str = "CHAPTER";
const COL_CHARACTERS: &str = "CHARACTERS";
const COL_MAIN_PLOTS: &str = "MAIN PLOTS";
const COL_SUMMARY: &str = "SUMMARY";

/// 读取第一个工作表的所有单元格文本
pub fn read_first_sheet(bytes: Vec<u8>) -> Result<Vec<Vec<String>>, LoadError> {
    let mut workbook: Xlsx<Cursor<Vec<u8>>> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| LoadError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    Ok(range.rows().map(|row| row.iter().map(cell_text).collect()).collect())
}

/// 单元格文本；整数值的浮点单元格（如 10.0）显示为 "10"
fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

fn field(row: &[String], col: Option<usize>) -> String {
    col.and_then(|i| row.get(i))
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// 将表格行转换为章节信息；CHAPTER 为空的行跳过
pub fn parse_chapter_rows(rows: &[Vec<String>]) -> Result<Vec<ChapterInfo>, LoadError> {
    let header = rows.first().ok_or(LoadError::ColumnMismatch)?;
    let column = |name: &str| header.iter().position(|h| h.trim() == name);

    let chapter_col = column(COL_CHAPTER).ok_or(LoadError::ColumnMismatch)?;
    let characters_col = column(COL_CHARACTERS);
    let plots_col = column(COL_MAIN_PLOTS);
    let summary_col = column(COL_SUMMARY);

    Ok(rows[1..]
        .iter()
        .filter_map(|row| {
            let chapter = row.get(chapter_col)?.trim();
            if chapter.is_empty() {
                return None;
            }
            Some(ChapterInfo {
                chapter: chapter.to_string(),
                characters: field(row, characters_col),
                main_plots: field(row, plots_col),
                summary: field(row, summary_col),
            })
        })
        .collect())
}
