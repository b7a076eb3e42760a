use super::{CellValue, LineItem, SupplierEntry};
use crate::error::Result;

/// 按固定表头写出的扁平行
pub trait SheetRow {
    const HEADERS: &'static [&'static str];

    /// 按 `HEADERS` 顺序返回单元格
    fn cells(&self) -> Vec<&CellValue>;
}

/// 供应商级字段 (该供应商的每一行共享)
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierFields {
    pub gstin: CellValue,
    pub trade_name: CellValue,
    pub filing_date: CellValue,
}

impl SupplierFields {
    pub fn read(supplier: &SupplierEntry<'_>) -> Result<Self> {
        Ok(Self {
            gstin: supplier.field("ctin")?,
            trade_name: supplier.field("trdnm")?,
            filing_date: supplier.field("supfildt")?,
        })
    }
}

/// B2B 发票行 (`b2b[*].inv` 下的一张发票)
#[derive(Debug, Clone, PartialEq)]
pub struct B2bRow {
    pub gstin: CellValue,
    pub trade_name: CellValue,
    pub invoice_no: CellValue,
    pub date: CellValue,
    pub value: CellValue,
    pub taxable_value: CellValue,
    pub igst: CellValue,
    pub cgst: CellValue,
    pub sgst: CellValue,
    pub pos: CellValue,
    pub filing_date: CellValue,
}

impl B2bRow {
    pub fn project(supplier: &SupplierFields, inv: &LineItem<'_>) -> Result<Self> {
        Ok(Self {
            gstin: supplier.gstin.clone(),
            trade_name: supplier.trade_name.clone(),
            invoice_no: inv.field("inum")?,
            date: inv.field("dt")?,
            value: inv.field("val")?,
            taxable_value: inv.field("txval")?,
            igst: inv.tax("igst")?,
            cgst: inv.tax("cgst")?,
            sgst: inv.tax("sgst")?,
            pos: inv.field("pos")?,
            filing_date: supplier.filing_date.clone(),
        })
    }
}

impl SheetRow for B2bRow {
    const HEADERS: &'static [&'static str] = &[
        "GSTIN",
        "Trade Name",
        "Invoice No",
        "Date",
        "Value",
        "Taxable Val",
        "IGST",
        "CGST",
        "SGST",
        "POS",
        "Filing Date",
    ];

    fn cells(&self) -> Vec<&CellValue> {
        vec![
            &self.gstin,
            &self.trade_name,
            &self.invoice_no,
            &self.date,
            &self.value,
            &self.taxable_value,
            &self.igst,
            &self.cgst,
            &self.sgst,
            &self.pos,
            &self.filing_date,
        ]
    }
}

/// CDNR 票据行 (`cdnr[*].nt` 下的一张贷项/借项票据, 没有 POS 列)
#[derive(Debug, Clone, PartialEq)]
pub struct CdnrRow {
    pub gstin: CellValue,
    pub trade_name: CellValue,
    pub note_no: CellValue,
    pub note_date: CellValue,
    pub note_type: CellValue,
    pub value: CellValue,
    pub taxable_value: CellValue,
    pub igst: CellValue,
    pub cgst: CellValue,
    pub sgst: CellValue,
    pub filing_date: CellValue,
}

impl CdnrRow {
    pub fn project(supplier: &SupplierFields, nt: &LineItem<'_>) -> Result<Self> {
        Ok(Self {
            gstin: supplier.gstin.clone(),
            trade_name: supplier.trade_name.clone(),
            note_no: nt.field("ntnum")?,
            note_date: nt.field("dt")?,
            note_type: nt.field("nttyp")?,
            value: nt.field("val")?,
            taxable_value: nt.field("txval")?,
            igst: nt.tax("igst")?,
            cgst: nt.tax("cgst")?,
            sgst: nt.tax("sgst")?,
            filing_date: supplier.filing_date.clone(),
        })
    }
}

impl SheetRow for CdnrRow {
    const HEADERS: &'static [&'static str] = &[
        "GSTIN",
        "Trade Name",
        "Note No",
        "Note Date",
        "Note Type",
        "Value",
        "Taxable Val",
        "IGST",
        "CGST",
        "SGST",
        "Filing Date",
    ];

    fn cells(&self) -> Vec<&CellValue> {
        vec![
            &self.gstin,
            &self.trade_name,
            &self.note_no,
            &self.note_date,
            &self.note_type,
            &self.value,
            &self.taxable_value,
            &self.igst,
            &self.cgst,
            &self.sgst,
            &self.filing_date,
        ]
    }
}
