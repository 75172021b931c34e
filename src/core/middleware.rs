//! 核心中间件模块

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::info;

use super::error::AppError;
use crate::infrastructure::config::AppConfig;

/// 请求日志中间件
///
/// 记录每个入站请求的时间戳、方法、路径、状态码和耗时。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "[{}] {} {} - {} - {}ms",
        chrono::Utc::now().to_rfc3339(),
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
}

/// API key 认证中间件
///
/// 只读请求（GET）直接放行，其余请求必须携带 `x-api-key` 头。
pub async fn require_api_key(
    State(config): State<Arc<AppConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::GET {
        return Ok(next.run(req).await);
    }

    let api_key = req
        .headers()
        .get("x-api-key")
        .and_then(|h| h.to_str().ok());

    match api_key {
        None => Err(AppError::Authentication("API key is required".to_string())),
        Some(key) if constant_time_eq(key.as_bytes(), config.api_key.as_bytes()) => {
            Ok(next.run(req).await)
        }
        Some(_) => Err(AppError::Authentication("Invalid API key".to_string())),
    }
}

/// 常数时间字节比较，避免通过响应耗时猜测 key
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secre"));
        assert!(constant_time_eq(b"", b""));
    }
}
