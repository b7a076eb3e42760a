pub mod converter;
pub mod workbook;

pub use converter::{convert, extract, ConvertedFile, GstrWorkbook, OUTPUT_FILENAME, XLSX_CONTENT_TYPE};
pub use workbook::write_workbook;
