//! 服务器入口

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use product_catalog_api::app::products::handler::AppState;
use product_catalog_api::app::products::service::ProductService;
use product_catalog_api::app::products::store::ProductStore;
use product_catalog_api::infrastructure::config::AppConfig;
use product_catalog_api::infrastructure::logger::Logger;
use product_catalog_api::router;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动产品目录 API 服务器...");

    let config = Arc::new(AppConfig::from_env());

    // 创建共享状态，预置 3 条示例数据
    let state = AppState {
        products: ProductService::new(ProductStore::seeded()),
        config: config.clone(),
    };

    let app = router(state);

    // 绑定地址
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await.expect("无法绑定监听地址");

    info!("🚀 产品目录 API 运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /                         - 欢迎信息");
    info!("   GET    /api/products             - 产品列表 (支持 category/inStock/page/limit)");
    info!("   GET    /api/products/:id         - 获取单个产品");
    info!("   POST   /api/products             - 创建产品 (需要 x-api-key)");
    info!("   PUT    /api/products/:id         - 更新产品 (需要 x-api-key)");
    info!("   DELETE /api/products/:id         - 删除产品 (需要 x-api-key)");
    info!("   GET    /api/products/search?q=   - 搜索产品");
    info!("   GET    /api/products/stats       - 产品统计");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
