//! 内存产品库
//!
//! 有序集合，保持插入顺序，进程退出即销毁。
//! 写入路径负责归一化：字符串去首尾空白，category 小写化。

use uuid::Uuid;

use super::model::{NewProduct, Product, ProductPatch};

pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// 启动时的 3 条示例数据
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product {
                    id: "1".to_string(),
                    name: "Laptop".to_string(),
                    description: "High-performance laptop with 16GB RAM".to_string(),
                    price: 1200.0,
                    category: "electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: "2".to_string(),
                    name: "Smartphone".to_string(),
                    description: "Latest model with 128GB storage".to_string(),
                    price: 800.0,
                    category: "electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: "3".to_string(),
                    name: "Coffee Maker".to_string(),
                    description: "Programmable coffee maker with timer".to_string(),
                    price: 50.0,
                    category: "kitchen".to_string(),
                    in_stock: false,
                },
            ],
        }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 生成新 id，归一化字段后追加到末尾
    pub fn insert(&mut self, new: NewProduct) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            description: new.description.trim().to_string(),
            price: new.price,
            category: new.category.trim().to_lowercase(),
            in_stock: new.in_stock,
        };
        self.products.push(product.clone());
        product
    }

    /// 只合并补丁中出现的字段，归一化规则与插入一致
    pub fn merge(&mut self, id: &str, patch: ProductPatch) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;

        if let Some(name) = patch.name {
            product.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            product.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category.trim().to_lowercase();
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }

        Some(product.clone())
    }

    /// 删除并返回被删除的记录
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
