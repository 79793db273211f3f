//! 请求参数错误处理器
//!
//! 让 JSON 体和查询串的反序列化错误也走统一的 ApiResponse 包装。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidInput,
        format!("Invalid JSON payload: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidInput,
        format!("Invalid query parameters: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
