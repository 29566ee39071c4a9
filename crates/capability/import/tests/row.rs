use std::path::PathBuf;

use tokfix_import::{COLUMN_COUNT, IMPORT_HEADERS, ImportError, ImportSheet, build_row};

fn temp_workbook(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tokfix_{name}_{}.xlsx", std::process::id()))
}

#[test]
fn row_matches_header_width_and_is_constant() {
    let row = build_row();
    assert_eq!(row.len(), COLUMN_COUNT);
    assert_eq!(IMPORT_HEADERS.len(), COLUMN_COUNT);
    assert_eq!(row, build_row());
    assert_eq!(IMPORT_HEADERS[0], "Phone1");
    assert_eq!(IMPORT_HEADERS[COLUMN_COUNT - 1], "AddAdmin");
}

#[test]
fn values_are_positional_and_untouched() {
    let row = build_row();
    let column = |name: &str| {
        let index = IMPORT_HEADERS.iter().position(|h| *h == name).expect("header");
        row[index]
    };
    assert_eq!(column("Phone1"), "79884753064");
    assert_eq!(column("ChatID"), "-69257108032233");
    assert_eq!(column("Course"), "2");
    assert_eq!(column("AddAdmin"), "ИСТИНА");
}

#[test]
fn workbook_reads_back_and_verifies() {
    let path = temp_workbook("roundtrip");
    let sheet = ImportSheet::sample();
    sheet.write_xlsx(&path).expect("write");

    let read = ImportSheet::read_xlsx(&path).expect("read");
    std::fs::remove_file(&path).ok();
    // 数字样式的值以文本写入，读回保持原样
    assert_eq!(read, sheet);

    let report = read.verify().expect("verify");
    assert_eq!(report.header_columns, COLUMN_COUNT);
    assert_eq!(report.data_rows, 1);
}

#[test]
fn workbook_with_only_header_is_rejected() {
    let path = temp_workbook("header_only");
    let mut sheet = ImportSheet::sample();
    sheet.rows.clear();
    sheet.write_xlsx(&path).expect("write");

    let read = ImportSheet::read_xlsx(&path).expect("read");
    std::fs::remove_file(&path).ok();
    assert!(read.rows.is_empty());
    assert!(matches!(read.verify(), Err(ImportError::NoDataRows)));
}

#[test]
fn short_row_survives_read_back_and_is_reported() {
    let path = temp_workbook("short_row");
    let mut sheet = ImportSheet::sample();
    sheet.rows[0].truncate(5);
    sheet.write_xlsx(&path).expect("write");

    let read = ImportSheet::read_xlsx(&path).expect("read");
    std::fs::remove_file(&path).ok();
    assert!(matches!(
        read.verify(),
        Err(ImportError::ShortRow { row: 1, found: 5 })
    ));
}

#[test]
fn swapped_header_is_reported() {
    let mut sheet = ImportSheet::sample();
    sheet.headers.swap(0, 1);
    assert!(matches!(
        sheet.verify(),
        Err(ImportError::HeaderMismatch { index: 0, .. })
    ));
}

#[test]
fn missing_workbook_is_a_read_error() {
    let result = ImportSheet::read_xlsx(temp_workbook("does_not_exist"));
    assert!(matches!(result, Err(ImportError::Read(_))));
}

#[test]
fn tsv_uses_one_line_per_row() {
    let mut buffer = Vec::new();
    ImportSheet::sample().write_tsv(&mut buffer).expect("write");
    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split('\t').collect::<Vec<_>>(), IMPORT_HEADERS);
    assert_eq!(lines[1].split('\t').count(), COLUMN_COUNT);
}
