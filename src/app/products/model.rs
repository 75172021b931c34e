//! 产品数据模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 产品记录
///
/// 库中的记录永远满足全部字段约束：非空字符串已去除首尾空白，
/// category 已小写化，price 非负。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// 原始请求体
///
/// 每个字段按 `Option<Value>` 接收，使校验能区分"字段缺失"和
/// "字段类型错误"，并给出逐字段的提示信息。
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub category: Option<Value>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<Value>,
}

/// 通过完整校验的新产品字段（尚未归一化）
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// 通过部分校验的更新字段，只合并出现的字段
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// 列表查询参数
///
/// page/limit 按原始字符串接收，解析失败回落到默认值，
/// 不因非法数字而拒绝整个请求。
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// 搜索查询参数
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// 分页元数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

/// 列表响应
#[derive(Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// 搜索响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub search_term: String,
    pub count: u64,
}

/// 统计数据，每次请求对全库实时计算
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total: u64,
    pub in_stock: u64,
    pub out_of_stock: u64,
    pub categories: BTreeMap<String, u64>,
    pub average_price: f64,
}
