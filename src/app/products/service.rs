//! 产品业务服务
//!
//! 包装注入的内存库，持有进程内唯一的共享可变状态。

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::model::{NewProduct, Pagination, Product, ProductPatch, ProductStats};
use super::store::ProductStore;
use crate::core::error::AppError;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<Mutex<ProductStore>>,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// 过滤 + 分页
    ///
    /// category 精确匹配（大小写不敏感），in_stock 精确匹配；
    /// 返回过滤结果的 `[(page-1)*limit, (page-1)*limit+limit)` 切片。
    pub fn list(
        &self,
        category: Option<&str>,
        in_stock: Option<bool>,
        page: u64,
        limit: u64,
    ) -> (Vec<Product>, Pagination) {
        let store = self.store.lock().unwrap();

        let filtered: Vec<Product> = store
            .all()
            .iter()
            .filter(|p| match category {
                Some(wanted) => p.category.eq_ignore_ascii_case(wanted),
                None => true,
            })
            .filter(|p| match in_stock {
                Some(wanted) => p.in_stock == wanted,
                None => true,
            })
            .cloned()
            .collect();

        let total = filtered.len() as u64;
        let pages = total.div_ceil(limit);
        let start = page.saturating_sub(1).saturating_mul(limit);

        let data: Vec<Product> = filtered
            .into_iter()
            .skip(start as usize)
            .take(limit as usize)
            .collect();

        (
            data,
            Pagination {
                page,
                limit,
                total,
                pages,
            },
        )
    }

    pub fn get(&self, id: &str) -> Result<Product, AppError> {
        let store = self.store.lock().unwrap();
        store
            .find(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub fn create(&self, new: NewProduct) -> Product {
        let mut store = self.store.lock().unwrap();
        store.insert(new)
    }

    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, AppError> {
        let mut store = self.store.lock().unwrap();
        store.merge(id, patch).ok_or_else(|| not_found(id))
    }

    pub fn delete(&self, id: &str) -> Result<Product, AppError> {
        let mut store = self.store.lock().unwrap();
        store.remove(id).ok_or_else(|| not_found(id))
    }

    /// 名称或描述包含查询串（大小写不敏感），不分页
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        let store = self.store.lock().unwrap();

        store
            .all()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// 全库实时统计
    pub fn stats(&self) -> ProductStats {
        let store = self.store.lock().unwrap();
        let products = store.all();

        let mut categories: BTreeMap<String, u64> = BTreeMap::new();
        for product in products {
            *categories.entry(product.category.clone()).or_insert(0) += 1;
        }

        let in_stock = products.iter().filter(|p| p.in_stock).count() as u64;
        let total = products.len() as u64;

        let average_price = if products.is_empty() {
            0.0
        } else {
            let sum: f64 = products.iter().map(|p| p.price).sum();
            (sum / products.len() as f64 * 100.0).round() / 100.0
        };

        ProductStats {
            total,
            in_stock,
            out_of_stock: total - in_stock,
            categories,
            average_price,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product with ID {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ProductService {
        ProductService::new(ProductStore::seeded())
    }

    #[test]
    fn list_unfiltered_returns_everything() {
        let (data, pagination) = service().list(None, None, 1, 10);
        assert_eq!(data.len(), 3);
        assert_eq!(
            pagination,
            Pagination {
                page: 1,
                limit: 10,
                total: 3,
                pages: 1
            }
        );
    }

    #[test]
    fn list_filters_category_case_insensitively() {
        let (data, pagination) = service().list(Some("ELECTRONICS"), None, 1, 10);
        assert_eq!(data.len(), 2);
        assert_eq!(pagination.total, 2);
        assert!(data.iter().all(|p| p.category == "electronics"));
    }

    #[test]
    fn list_filters_stock_status() {
        let (data, _) = service().list(None, Some(false), 1, 10);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].name, "Coffee Maker");
    }

    #[test]
    fn pagination_slices_the_second_page() {
        let (data, pagination) = service().list(None, None, 2, 1);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, "2");
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.pages, 3);
    }

    #[test]
    fn pagination_past_the_end_is_empty() {
        let (data, pagination) = service().list(None, None, 5, 10);
        assert!(data.is_empty());
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.pages, 1);
    }

    #[test]
    fn get_missing_id_mentions_it() {
        let err = service().get("does-not-exist").unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains("does-not-exist")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let service = service();
        let created = service.create(NewProduct {
            name: "Blender".to_string(),
            description: "500W blender".to_string(),
            price: 75.0,
            category: "Kitchen".to_string(),
            in_stock: true,
        });

        assert_eq!(created.category, "kitchen");
        assert_eq!(service.get(&created.id).unwrap(), created);
    }

    #[test]
    fn update_merges_partial_patch() {
        let service = service();
        let updated = service
            .update(
                "1",
                ProductPatch {
                    price: Some(999.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 999.0);
        assert_eq!(updated.name, "Laptop");
        assert!(updated.in_stock);
    }

    #[test]
    fn delete_removes_the_record() {
        let service = service();
        let removed = service.delete("3").unwrap();
        assert_eq!(removed.name, "Coffee Maker");
        assert!(matches!(service.get("3"), Err(AppError::NotFound(_))));
        assert!(matches!(service.delete("3"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn search_matches_name_and_description() {
        let service = service();

        let by_name = service.search("lap");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Laptop");

        let by_description = service.search("TIMER");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Coffee Maker");

        assert!(service.search("zzz").is_empty());
    }

    #[test]
    fn stats_over_seed_data() {
        let stats = service().stats();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.categories.get("electronics"), Some(&2));
        assert_eq!(stats.categories.get("kitchen"), Some(&1));
        assert_eq!(stats.average_price, 683.33);
    }

    #[test]
    fn stats_on_empty_store() {
        let stats = ProductService::new(ProductStore::new()).stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_price, 0.0);
        assert!(stats.categories.is_empty());
    }
}
