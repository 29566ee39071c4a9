use crate::{COLUMN_COUNT, IMPORT_HEADERS, ImportError, build_row};
use calamine::{Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;
use std::io::Write;
use std::path::Path;

const TSV_DELIMITER: &str = "\t";

/// 表头 + 数据行组成的导入表格。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// 回读检查结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub header_columns: usize,
    pub data_rows: usize,
}

impl ImportSheet {
    /// 固定表头加一行固定数据。
    pub fn sample() -> Self {
        Self {
            headers: IMPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: vec![build_row().iter().map(|v| v.to_string()).collect()],
        }
    }

    /// 写出 xlsx 工作簿（首个工作表，首行为表头），单元格均为文本。
    pub fn write_xlsx(&self, path: impl AsRef<Path>) -> Result<(), ImportError> {
        let path = path.as_ref();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (row_index, row) in std::iter::once(&self.headers).chain(&self.rows).enumerate() {
            let row_index = u32::try_from(row_index).map_err(|_| ImportError::TooLarge)?;
            for (col_index, value) in row.iter().enumerate() {
                let col_index = u16::try_from(col_index).map_err(|_| ImportError::TooLarge)?;
                worksheet.write_string(row_index, col_index, value)?;
            }
        }
        workbook.save(path)?;
        tracing::debug!(path = %path.display(), "import workbook saved");
        Ok(())
    }

    /// 读回 xlsx 的首个工作表，首行为表头。
    pub fn read_xlsx(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ImportError::NoSheets)?;
        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range.rows().map(|cells| {
            let mut row: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
            // 工作表区域是矩形，短行会被空单元格补齐
            while row.last().is_some_and(|value| value.is_empty()) {
                row.pop();
            }
            row
        });
        let headers = rows.next().ok_or(ImportError::Empty)?;
        let rows = rows.filter(|row| !row.is_empty()).collect();
        tracing::debug!(sheet = %sheet_name, "import workbook read");
        Ok(Self { headers, rows })
    }

    /// 以制表符分隔写出，供 stdout 使用（值中不含制表符，无需转义）。
    pub fn write_tsv<W: Write>(&self, mut writer: W) -> Result<(), ImportError> {
        writeln!(writer, "{}", self.headers.join(TSV_DELIMITER))?;
        for row in &self.rows {
            writeln!(writer, "{}", row.join(TSV_DELIMITER))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// 检查表头顺序与数据行列数（导入服务要求至少一行数据且不少于 18 列）。
    pub fn verify(&self) -> Result<SheetReport, ImportError> {
        if self.headers.is_empty() {
            return Err(ImportError::Empty);
        }
        for (index, expected) in IMPORT_HEADERS.into_iter().enumerate() {
            let found = self.headers.get(index).map(String::as_str).unwrap_or("");
            if found != expected {
                return Err(ImportError::HeaderMismatch {
                    index,
                    expected,
                    found: found.to_string(),
                });
            }
        }
        if self.rows.is_empty() {
            return Err(ImportError::NoDataRows);
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() < COLUMN_COUNT {
                return Err(ImportError::ShortRow {
                    row: index + 1,
                    found: row.len(),
                });
            }
        }
        tracing::debug!(rows = self.rows.len(), "import sheet verified");
        Ok(SheetReport {
            header_columns: self.headers.len(),
            data_rows: self.rows.len(),
        })
    }
}
