//! # 产品目录 API
//!
//! 内存产品目录的 HTTP CRUD 服务，模块化分层架构：
//! - `app/`            应用层（产品领域：模型、存储、服务、处理器、校验）
//! - `core/`           核心层（错误、响应信封、提取器、中间件）
//! - `infrastructure/` 基础设施层（配置、日志）

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::products::handler::{
    api_info, create_product, delete_product, get_product, list_products, product_stats,
    search_products, update_product, AppState,
};
use crate::core::error::route_not_found;
use crate::core::middleware::{request_logging_middleware, require_api_key};

/// 组装完整路由
///
/// 静态段 `search`/`stats` 与 `:id` 捕获共存，axum 优先匹配静态段。
/// API key 守卫只挂在带写方法的路由上，方法不匹配时走 404 兜底而非 401。
pub fn router(state: AppState) -> Router {
    let api_key_guard =
        middleware::from_fn_with_state(state.config.clone(), require_api_key);

    Router::new()
        .route(
            "/api/products",
            get(list_products)
                .post(create_product)
                .route_layer(api_key_guard.clone())
                .fallback(route_not_found),
        )
        .route(
            "/api/products/search",
            get(search_products).fallback(route_not_found),
        )
        .route(
            "/api/products/stats",
            get(product_stats).fallback(route_not_found),
        )
        .route(
            "/api/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .route_layer(api_key_guard)
                .fallback(route_not_found),
        )
        .route("/", get(api_info))
        .fallback(route_not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
