//! 批量导入测试用的固定表格行（与 token 签发无关）。

mod sheet;

pub use sheet::{ImportSheet, SheetReport};

/// 导入表头，顺序与数据行逐列对应。
pub const IMPORT_HEADERS: [&str; COLUMN_COUNT] = [
    "Phone1", "MaxID", "INN_Ref", "FOIV", "OrgName", "Branch", "INN", "KPP", "Faculty", "Course",
    "Group", "ChatName", "Phone2", "FileName", "ChatID", "Link", "AddUser", "AddAdmin",
];

pub const COLUMN_COUNT: usize = 18;

/// 导入表格相关错误。
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xlsx write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("xlsx read error: {0}")]
    Read(#[from] calamine::XlsxError),
    #[error("sheet exceeds xlsx row/column limits")]
    TooLarge,
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("sheet is empty")]
    Empty,
    #[error("sheet has a header but no data rows")]
    NoDataRows,
    #[error("header column {index} is {found:?}, expected {expected:?}")]
    HeaderMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("row {row} has {found} columns, expected at least 18")]
    ShortRow { row: usize, found: usize },
}

/// 一条导入记录；值原样透传，不做类型转换或校验。
pub fn build_row() -> [&'static str; COLUMN_COUNT] {
    [
        "79884753064",
        "496728250",
        "105014177",
        "Минобрнауки России",
        "МГТУ",
        "Головной филиал",
        "105014177",
        "10501001",
        "Политехнический колледж МГТУ",
        "2",
        "Колледж ИП-22",
        "Колледж ИП-22 (2024 ОФО МГТУ",
        "79884753064",
        "file.xlsx",
        "-69257108032233",
        "https://max.ru/join/test",
        "ИСТИНА",
        "ИСТИНА",
    ]
}
