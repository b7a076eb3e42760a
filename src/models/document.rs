use super::CellValue;
use crate::error::{ConvertError, Result};
use serde_json::{Map, Value};

pub type Record = Map<String, Value>;

/// 记录类别 (位于 `data.docdata` 下)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    B2b,
    Cdnr,
}

impl Category {
    /// `docdata` 中供应商列表的键
    pub fn key(self) -> &'static str {
        match self {
            Category::B2b => "b2b",
            Category::Cdnr => "cdnr",
        }
    }

    /// 供应商对象中明细列表的键
    pub fn items_key(self) -> &'static str {
        match self {
            Category::B2b => "inv",
            Category::Cdnr => "nt",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            Category::B2b => "B2B",
            Category::Cdnr => "CDNR",
        }
    }
}

/// 上传的 GSTR 导出文件 (只保留 `data.docdata` 块)
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    docdata: Record,
}

impl SourceDocument {
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::from_value(value)
    }

    /// 缺少 `data` 或 `docdata` 键时视为没有记录; 存在但不是对象 (包括 null) 则报错
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(ConvertError::shape("document", "an object"));
        };

        let mut data = match root.remove("data") {
            None => return Ok(Self::default()),
            Some(Value::Object(data)) => data,
            Some(_) => return Err(ConvertError::shape("data", "an object")),
        };

        match data.remove("docdata") {
            None => Ok(Self::default()),
            Some(Value::Object(docdata)) => Ok(Self { docdata }),
            Some(_) => Err(ConvertError::shape("data.docdata", "an object")),
        }
    }

    /// 按文档顺序返回某类别的供应商; 键缺失时为空
    pub fn suppliers(&self, category: Category) -> Result<Vec<SupplierEntry<'_>>> {
        let path = format!("data.docdata.{}", category.key());
        let Some(list) = self.docdata.get(category.key()) else {
            return Ok(Vec::new());
        };

        Ok(array_of_records(list, &path)?
            .into_iter()
            .map(|(path, record)| SupplierEntry { path, record })
            .collect())
    }
}

/// `b2b` 或 `cdnr` 下的单个供应商对象
#[derive(Debug, Clone)]
pub struct SupplierEntry<'a> {
    path: String,
    record: &'a Record,
}

impl<'a> SupplierEntry<'a> {
    pub fn field(&self, key: &str) -> Result<CellValue> {
        read_field(self.record, &self.path, key)
    }

    /// 按文档顺序返回明细; 键缺失时为空
    pub fn line_items(&self, items_key: &str) -> Result<Vec<LineItem<'a>>> {
        let path = format!("{}.{}", self.path, items_key);
        match self.record.get(items_key) {
            None => Ok(Vec::new()),
            Some(list) => Ok(array_of_records(list, &path)?
                .into_iter()
                .map(|(path, record)| LineItem { path, record })
                .collect()),
        }
    }
}

/// 单张发票 (`inv`) 或票据 (`nt`)
#[derive(Debug, Clone)]
pub struct LineItem<'a> {
    path: String,
    record: &'a Record,
}

impl LineItem<'_> {
    pub fn field(&self, key: &str) -> Result<CellValue> {
        read_field(self.record, &self.path, key)
    }

    /// 税额字段: 键缺失时为 0, 显式 null 保持为空
    pub fn tax(&self, key: &str) -> Result<CellValue> {
        if self.record.contains_key(key) {
            self.field(key)
        } else {
            Ok(CellValue::Number(0.0))
        }
    }
}

fn read_field(record: &Record, parent: &str, key: &str) -> Result<CellValue> {
    CellValue::from_json(record.get(key), &format!("{}.{}", parent, key))
}

fn array_of_records<'a>(value: &'a Value, path: &str) -> Result<Vec<(String, &'a Record)>> {
    let items = value
        .as_array()
        .ok_or_else(|| ConvertError::shape(path, "an array"))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item_path = format!("{}[{}]", path, idx);
            match item.as_object() {
                Some(record) => Ok((item_path, record)),
                None => Err(ConvertError::shape(item_path, "an object")),
            }
        })
        .collect()
}
