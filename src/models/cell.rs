use crate::error::{ConvertError, Result};
use serde_json::{Number, Value};

/// 单元格值 (原样复制导出文件中的标量, 不做数值规范化)
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// f64 能精确表示的最大整数 (2^53)
const MAX_EXACT_INT: u64 = 1 << 53;

impl CellValue {
    /// 将 `path` 处读取的 JSON 节点投影为单元格; 缺失或 null 为 `Empty`
    pub fn from_json(value: Option<&Value>, path: &str) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::Empty),
            Some(Value::String(s)) => Ok(Self::Text(s.clone())),
            Some(Value::Bool(b)) => Ok(Self::Bool(*b)),
            Some(Value::Number(n)) => Ok(Self::from_number(n)),
            Some(Value::Array(_)) | Some(Value::Object(_)) => {
                Err(ConvertError::shape(path, "a scalar value"))
            }
        }
    }

    /// 超出 f64 精确范围的整数保留为文本, 避免静默丢失精度
    fn from_number(n: &Number) -> Self {
        let exact = match (n.as_u64(), n.as_i64()) {
            (Some(u), _) => u <= MAX_EXACT_INT,
            (None, Some(i)) => i.unsigned_abs() <= MAX_EXACT_INT,
            (None, None) => true,
        };

        match n.as_f64() {
            Some(f) if exact => Self::Number(f),
            _ => Self::Text(n.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_copied_verbatim() {
        let text = json!("29ABCDE1234F1Z5");
        let number = json!(1180);
        let numeric_string = json!("1180.50");
        assert_eq!(
            CellValue::from_json(Some(&text), "ctin").unwrap(),
            CellValue::from("29ABCDE1234F1Z5")
        );
        assert_eq!(
            CellValue::from_json(Some(&number), "val").unwrap(),
            CellValue::Number(1180.0)
        );
        // 不做数值规范化
        assert_eq!(
            CellValue::from_json(Some(&numeric_string), "val").unwrap(),
            CellValue::from("1180.50")
        );
        assert_eq!(
            CellValue::from_json(Some(&json!(true)), "flag").unwrap(),
            CellValue::Bool(true)
        );
    }

    #[test]
    fn absent_and_null_are_empty() {
        assert!(CellValue::from_json(None, "pos").unwrap().is_empty());
        assert!(CellValue::from_json(Some(&Value::Null), "pos").unwrap().is_empty());
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = CellValue::from_json(Some(&json!({"a": 1})), "b2b[0].inv[0].val").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected shape at b2b[0].inv[0].val: expected a scalar value"
        );
        assert!(CellValue::from_json(Some(&json!([1, 2])), "dt").is_err());
    }

    #[test]
    fn large_integers_keep_every_digit() {
        let big = json!(12345678901234567890u64);
        assert_eq!(
            CellValue::from_json(Some(&big), "inum").unwrap(),
            CellValue::from("12345678901234567890")
        );

        let negative = json!(-9007199254740993i64);
        assert_eq!(
            CellValue::from_json(Some(&negative), "val").unwrap(),
            CellValue::from("-9007199254740993")
        );

        let edge = json!(9007199254740992u64);
        assert_eq!(
            CellValue::from_json(Some(&edge), "val").unwrap(),
            CellValue::Number(9007199254740992.0)
        );
        assert_eq!(
            CellValue::from_json(Some(&json!(59.5)), "val").unwrap(),
            CellValue::Number(59.5)
        );
    }
}
