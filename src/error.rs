use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 转换错误
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 请求中没有文件, 或文件名为空
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),

    /// 读取到的节点结构与导出格式不符
    #[error("unexpected shape at {path}: expected {expected}")]
    Shape { path: String, expected: &'static str },

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn shape(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
        }
    }

    /// 客户端错误 (在任何处理开始前拒绝)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let err = ConvertError::invalid_request("No file uploaded");
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No file uploaded");
    }

    #[test]
    fn json_errors_keep_parser_message() {
        let parse_err = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let expected = parse_err.to_string();
        let err = ConvertError::from(parse_err);
        assert!(!err.is_client_error());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn shape_errors_name_the_path() {
        let err = ConvertError::shape("b2b[2].inv", "an array");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "unexpected shape at b2b[2].inv: expected an array"
        );
    }
}
