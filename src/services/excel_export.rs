use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::{Article, COLUMN_LABELS};

pub const SHEET_NAME: &str = "Apify Results";
pub const DOWNLOAD_FILE_NAME: &str = "Apify_Results.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serialize the result set to a single-sheet workbook in memory: header row
/// of column labels, one row per article, no index column. The cells come
/// from [`Article::cells`], the same source the HTML table renders from.
pub fn to_workbook_bytes(articles: &[Article]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    for (col, label) in COLUMN_LABELS.iter().enumerate() {
        worksheet.write(0, col as u16, *label)?;
    }

    for (row, article) in articles.iter().enumerate() {
        for (col, cell) in article.cells().iter().enumerate() {
            worksheet.write((row + 1) as u32, col as u16, cell.as_str())?;
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Data, Reader, Xlsx};
    use serde_json::json;

    use super::{to_workbook_bytes, SHEET_NAME};
    use crate::domain::{Article, COLUMN_LABELS};

    fn read_back(bytes: Vec<u8>) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    fn article(value: serde_json::Value) -> Article {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn header_row_matches_column_labels() {
        let articles = vec![article(json!({ "title": "t" }))];
        let range = read_back(to_workbook_bytes(&articles).unwrap());

        for (col, label) in COLUMN_LABELS.iter().enumerate() {
            assert_eq!(
                range.get_value((0, col as u32)),
                Some(&Data::String(label.to_string())),
                "header column {col}"
            );
        }
    }

    #[test]
    fn every_table_cell_survives_the_export_unmodified() {
        let articles = vec![
            article(json!({
                "content": "Body text",
                "date": "2025-03-01",
                "overseas_investment_related": true,
                "supporting_evidence": "quoted line",
                "title": "Plant opens",
                "url": "https://example.com/plant"
            })),
            article(json!({
                "title": "No date here",
                "url": "https://example.com/other"
            })),
        ];

        let range = read_back(to_workbook_bytes(&articles).unwrap());

        for (row, article) in articles.iter().enumerate() {
            for (col, cell) in article.cells().iter().enumerate() {
                assert_eq!(
                    range.get_value(((row + 1) as u32, col as u32)),
                    Some(&Data::String(cell.clone())),
                    "row {row} col {col}"
                );
            }
        }
    }

    #[test]
    fn missing_date_exports_as_a_blank_cell() {
        let articles = vec![article(json!({ "title": "No date here" }))];
        let range = read_back(to_workbook_bytes(&articles).unwrap());

        let date_col = COLUMN_LABELS.iter().position(|l| *l == "Date").unwrap() as u32;
        assert_eq!(
            range.get_value((1, date_col)),
            Some(&Data::String(String::new()))
        );
    }
}
