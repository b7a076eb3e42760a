use crate::error::Result;
use crate::models::{B2bRow, Category, CdnrRow, LineItem, SourceDocument, SupplierFields};
use crate::service::workbook::write_workbook;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const OUTPUT_FILENAME: &str = "GSTR_Converted.xlsx";

/// 从一个导出文件提取的行 (编码前)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GstrWorkbook {
    pub b2b: Vec<B2bRow>,
    pub cdnr: Vec<CdnrRow>,
}

impl GstrWorkbook {
    /// 将要写入的工作表; 空类别不生成工作表
    pub fn sheet_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if !self.b2b.is_empty() {
            names.push(Category::B2b.sheet_name());
        }
        if !self.cdnr.is_empty() {
            names.push(Category::Cdnr.sheet_name());
        }
        names
    }
}

/// 已编码的工作簿, 作为下载文件返回
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: &'static str,
    pub b2b_rows: usize,
    pub cdnr_rows: usize,
}

impl ConvertedFile {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// 解析上传的导出文件并展开两个类别
pub fn extract(raw: &[u8]) -> Result<GstrWorkbook> {
    let document = SourceDocument::parse(raw)?;
    extract_document(&document)
}

pub fn extract_document(document: &SourceDocument) -> Result<GstrWorkbook> {
    let b2b = collect_rows(document, Category::B2b, B2bRow::project)?;
    let cdnr = collect_rows(document, Category::Cdnr, CdnrRow::project)?;
    Ok(GstrWorkbook { b2b, cdnr })
}

/// 完整转换: 输入上传的字节, 输出 xlsx 下载文件
pub fn convert(raw: &[u8]) -> Result<ConvertedFile> {
    // 1. 解析并展开
    let book = extract(raw)?;

    // 2. 写入工作表并序列化
    let bytes = write_workbook(&book)?;

    Ok(ConvertedFile {
        bytes,
        content_type: XLSX_CONTENT_TYPE,
        filename: OUTPUT_FILENAME,
        b2b_rows: book.b2b.len(),
        cdnr_rows: book.cdnr.len(),
    })
}

fn collect_rows<R>(
    document: &SourceDocument,
    category: Category,
    project: impl Fn(&SupplierFields, &LineItem<'_>) -> Result<R>,
) -> Result<Vec<R>> {
    let mut rows = Vec::new();

    for supplier in document.suppliers(category)? {
        // 供应商字段只读取一次, 复制到该供应商的每一行
        let fields = SupplierFields::read(&supplier)?;
        for item in supplier.line_items(category.items_key())? {
            rows.push(project(&fields, &item)?);
        }
    }

    tracing::debug!("{}: {} rows extracted", category.sheet_name(), rows.len());
    Ok(rows)
}
