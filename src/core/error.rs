//! 核心错误处理模块

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 应用错误类型
///
/// 每个请求要么正常完成，要么恰好落入一个终端错误分支。
#[derive(Debug)]
pub enum AppError {
    /// 资源不存在 (404)
    NotFound(String),
    /// 请求体字段校验失败 (400)
    Validation(String),
    /// API key 缺失或不匹配 (401)
    Authentication(String),
    /// 请求体不是合法 JSON (400)
    InvalidJson,
    /// 路由或方法不匹配 (404)
    RouteNotFound { method: Method, path: String },
    /// 其他未知错误 (500)，细节只进日志
    Internal(String),
}

/// 错误响应结构
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "statusCode")]
    status_code: u16,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::InvalidJson => {
                (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string())
            }
            AppError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("Route {} {} not found", method, path),
            ),
            AppError::Internal(detail) => {
                // 内部细节不外泄
                error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let envelope = ErrorEnvelope {
            success: false,
            error: ErrorBody {
                message,
                status_code: status.as_u16(),
            },
        };

        (status, axum::Json(envelope)).into_response()
    }
}

/// 未匹配路由的兜底处理器
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
