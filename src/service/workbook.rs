use crate::error::Result;
use crate::models::{Category, CellValue, SheetRow};
use crate::service::converter::GstrWorkbook;
use rust_xlsxwriter::{Workbook, Worksheet};

/// 将提取的行编码为 xlsx, 每个非空类别一个工作表
pub fn write_workbook(book: &GstrWorkbook) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    if !book.b2b.is_empty() {
        write_sheet(&mut workbook, Category::B2b.sheet_name(), &book.b2b)?;
    }
    if !book.cdnr.is_empty() {
        write_sheet(&mut workbook, Category::Cdnr.sheet_name(), &book.cdnr)?;
    }

    // xlsx 至少需要一个工作表; 没有数据时由 writer 自动添加空白默认表
    Ok(workbook.save_to_buffer()?)
}

/// 写入表头, 然后按顺序每条记录一行
pub fn write_sheet<R: SheetRow>(workbook: &mut Workbook, name: &str, rows: &[R]) -> Result<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    for (col, header) in R::HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, record) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, cell) in record.cells().into_iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell)?;
        }
    }

    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, value: &CellValue) -> Result<()> {
    match value {
        // 空值不写入单元格
        CellValue::Empty => {}
        CellValue::Text(s) => {
            ws.write_string(row, col, s)?;
        }
        CellValue::Number(n) => {
            ws.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            ws.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}
