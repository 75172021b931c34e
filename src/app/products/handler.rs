//! 产品路由处理器
//!
//! 处理器保持薄：解析查询参数、调校验、调服务、套响应信封。

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use super::model::{
    ListQuery, Product, ProductListResponse, ProductPayload, ProductStats, SearchQuery,
    SearchResponse,
};
use super::service::ProductService;
use super::validation::{validate_partial_product, validate_product};
use crate::core::error::AppError;
use crate::core::extract::BodyJson;
use crate::core::response::ApiResponse;
use crate::infrastructure::config::AppConfig;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub config: Arc<AppConfig>,
}

/// GET / - 欢迎信息和端点列表
pub async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Welcome to the Product API!",
        "endpoints": {
            "GET /api/products": "Get all products",
            "GET /api/products/:id": "Get a specific product",
            "POST /api/products": "Create a new product",
            "PUT /api/products/:id": "Update a product",
            "DELETE /api/products/:id": "Delete a product",
            "GET /api/products/search": "Search products by name",
            "GET /api/products/stats": "Get product statistics"
        }
    }))
}

/// GET /api/products - 过滤 + 分页列表
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductListResponse> {
    let page = parse_positive(query.page.as_deref(), 1);
    let limit = parse_positive(query.limit.as_deref(), 10);
    let in_stock = query.in_stock.as_deref().map(|v| v == "true");

    let (data, pagination) =
        state
            .products
            .list(query.category.as_deref(), in_stock, page, limit);

    Json(ProductListResponse {
        success: true,
        data,
        pagination,
    })
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state.products.get(&id)?;
    Ok(Json(ApiResponse::success(product)))
}

/// POST /api/products - 完整校验后创建
pub async fn create_product(
    State(state): State<AppState>,
    BodyJson(payload): BodyJson<ProductPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let new = validate_product(&payload)?;
    let product = state.products.create(new);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// PUT /api/products/:id - 部分校验后合并
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    BodyJson(payload): BodyJson<ProductPayload>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let patch = validate_partial_product(&payload)?;
    let product = state.products.update(&id, patch)?;

    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state.products.delete(&id)?;

    Ok(Json(ApiResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

/// GET /api/products/search?q= - 子串搜索
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = query.q.filter(|q| !q.is_empty()).ok_or_else(|| {
        AppError::Validation("Search query parameter \"q\" is required".to_string())
    })?;

    let data = state.products.search(&term);

    Ok(Json(SearchResponse {
        success: true,
        count: data.len() as u64,
        data,
        search_term: term,
    }))
}

/// GET /api/products/stats
pub async fn product_stats(State(state): State<AppState>) -> Json<ApiResponse<ProductStats>> {
    Json(ApiResponse::success(state.products.stats()))
}

/// 解析 page/limit：非数字或小于 1 的值回落到默认值
fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n as u64)
        .unwrap_or(default)
}
