//! 配置基础设施

use std::env;

/// 进程级配置，全部来自环境变量
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 监听端口，默认 3000
    pub port: u16,
    /// 写操作共享密钥，默认值仅用于本地开发
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let api_key =
            env::var("API_KEY").unwrap_or_else(|_| "your-secret-api-key".to_string());

        Self { port, api_key }
    }
}
