pub mod cell;
pub mod document;
pub mod row;

pub use cell::CellValue;
pub use document::{Category, LineItem, Record, SourceDocument, SupplierEntry};
pub use row::{B2bRow, CdnrRow, SheetRow, SupplierFields};
