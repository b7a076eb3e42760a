use crate::error::{ConvertError, Result};
use crate::service::{self, ConvertedFile};
use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// 携带导出文件的 multipart 字段名
pub const FILE_FIELD: &str = "file";

/// 从上传表单中取出的 JSON 文件
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// 存活检查页面
pub async fn home() -> Html<&'static str> {
    Html("<h1>Backend is running successfully!</h1>")
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 转换接口: 上传 GSTR JSON 导出文件, 返回 xlsx 下载
pub async fn convert_upload(multipart: std::result::Result<Multipart, MultipartRejection>) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!("Rejected upload: {}", e);
            return e.into_response();
        }
    };

    tracing::info!("Converting {} ({} bytes)", upload.filename, upload.bytes.len());

    match service::convert(&upload.bytes) {
        Ok(file) => {
            tracing::info!(
                "Converted {}: {} B2B rows, {} CDNR rows",
                upload.filename,
                file.b2b_rows,
                file.cdnr_rows
            );
            attachment(file)
        }
        Err(e) => {
            tracing::error!("Conversion of {} failed: {}", upload.filename, e);
            e.into_response()
        }
    }
}

/// 查找 `file` 文件字段 (同名的普通表单字段忽略)
pub async fn read_upload(multipart: std::result::Result<Multipart, MultipartRejection>) -> Result<Upload> {
    let mut multipart = multipart.map_err(|_| ConvertError::invalid_request("No file uploaded"))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ConvertError::invalid_request(format!("Failed to read upload: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(ConvertError::invalid_request("No file selected"));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ConvertError::invalid_request(format!("Failed to read file data: {}", e)))?;
        return Ok(Upload { filename, bytes });
    }

    Err(ConvertError::invalid_request("No file uploaded"))
}

fn attachment(file: ConvertedFile) -> Response {
    let disposition = file.content_disposition();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}
