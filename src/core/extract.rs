//! 核心提取器模块

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
};

use super::error::AppError;

/// JSON 请求体提取器
///
/// 与 `axum::Json` 相同，但解析失败时返回统一的 400 错误信封，
/// 而不是 axum 默认的纯文本响应。
pub struct BodyJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BodyJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::InvalidJson)?;
        Ok(Self(value))
    }
}
