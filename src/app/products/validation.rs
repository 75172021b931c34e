//! 产品请求体校验
//!
//! 纯函数：完整模式要求全部字段在场，部分模式只校验出现的字段。
//! 任何违规都汇总成一条 Validation 错误，不存在部分成功。

use serde_json::Value;

use super::model::{NewProduct, ProductPatch, ProductPayload};
use crate::core::error::AppError;

/// 完整校验，用于创建
pub fn validate_product(payload: &ProductPayload) -> Result<NewProduct, AppError> {
    let mut errors = Vec::new();

    let name = match string_field(&payload.name) {
        Some(name) => Some(name),
        None => {
            errors.push("Name is required and must be a non-empty string");
            None
        }
    };

    let description = match string_field(&payload.description) {
        Some(description) => Some(description),
        None => {
            errors.push("Description is required and must be a non-empty string");
            None
        }
    };

    let price = match number_field(&payload.price) {
        Some(price) => Some(price),
        None => {
            errors.push("Price is required and must be a non-negative number");
            None
        }
    };

    let category = match string_field(&payload.category) {
        Some(category) => Some(category),
        None => {
            errors.push("Category is required and must be a non-empty string");
            None
        }
    };

    let in_stock = match bool_field(&payload.in_stock) {
        Some(in_stock) => Some(in_stock),
        None => {
            errors.push("InStock is required and must be a boolean");
            None
        }
    };

    if !errors.is_empty() {
        return Err(validation_error(&errors));
    }

    Ok(NewProduct {
        name: name.unwrap(),
        description: description.unwrap(),
        price: price.unwrap(),
        category: category.unwrap(),
        in_stock: in_stock.unwrap(),
    })
}

/// 部分校验，用于更新
pub fn validate_partial_product(payload: &ProductPayload) -> Result<ProductPatch, AppError> {
    let mut errors = Vec::new();
    let mut patch = ProductPatch::default();

    if payload.name.is_some() {
        match string_field(&payload.name) {
            Some(name) => patch.name = Some(name),
            None => errors.push("Name must be a non-empty string"),
        }
    }

    if payload.description.is_some() {
        match string_field(&payload.description) {
            Some(description) => patch.description = Some(description),
            None => errors.push("Description must be a non-empty string"),
        }
    }

    if payload.price.is_some() {
        match number_field(&payload.price) {
            Some(price) => patch.price = Some(price),
            None => errors.push("Price must be a non-negative number"),
        }
    }

    if payload.category.is_some() {
        match string_field(&payload.category) {
            Some(category) => patch.category = Some(category),
            None => errors.push("Category must be a non-empty string"),
        }
    }

    if payload.in_stock.is_some() {
        match bool_field(&payload.in_stock) {
            Some(in_stock) => patch.in_stock = Some(in_stock),
            None => errors.push("InStock must be a boolean"),
        }
    }

    if !errors.is_empty() {
        return Err(validation_error(&errors));
    }

    Ok(patch)
}

fn validation_error(errors: &[&str]) -> AppError {
    AppError::Validation(format!("Validation failed: {}", errors.join(", ")))
}

/// 在场且为非空字符串（按去除首尾空白后判断）
fn string_field(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// 在场且为非负数字
fn number_field(value: &Option<Value>) -> Option<f64> {
    match value.as_ref().and_then(Value::as_f64) {
        Some(n) if n >= 0.0 => Some(n),
        _ => None,
    }
}

/// 在场且为布尔值
fn bool_field(value: &Option<Value>) -> Option<bool> {
    match value {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: Value) -> ProductPayload {
        serde_json::from_value(body).unwrap()
    }

    fn full_payload() -> ProductPayload {
        payload(json!({
            "name": "Desk Lamp",
            "description": "Adjustable LED lamp",
            "price": 35.5,
            "category": "Furniture",
            "inStock": true
        }))
    }

    #[test]
    fn full_payload_passes() {
        let new = validate_product(&full_payload()).unwrap();
        assert_eq!(new.name, "Desk Lamp");
        assert_eq!(new.price, 35.5);
        assert!(new.in_stock);
    }

    #[test]
    fn missing_price_mentions_price() {
        let body = payload(json!({
            "name": "Desk Lamp",
            "description": "Adjustable LED lamp",
            "category": "Furniture",
            "inStock": true
        }));

        let err = validate_product(&body).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.starts_with("Validation failed:"));
                assert!(msg.contains("Price is required and must be a non-negative number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let body = payload(json!({
            "name": "Desk Lamp",
            "description": "Adjustable LED lamp",
            "price": -1,
            "category": "Furniture",
            "inStock": true
        }));

        assert!(validate_product(&body).is_err());
    }

    #[test]
    fn wrong_types_collect_every_violation() {
        let body = payload(json!({
            "name": 42,
            "description": "",
            "price": "free",
            "category": "   ",
            "inStock": "yes"
        }));

        let err = validate_product(&body).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("Name is required"));
                assert!(msg.contains("Description is required"));
                assert!(msg.contains("Price is required"));
                assert!(msg.contains("Category is required"));
                assert!(msg.contains("InStock is required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn partial_skips_absent_fields() {
        let body = payload(json!({ "price": 99 }));
        let patch = validate_partial_product(&body).unwrap();

        assert_eq!(patch.price, Some(99.0));
        assert!(patch.name.is_none());
        assert!(patch.in_stock.is_none());
    }

    #[test]
    fn partial_rejects_invalid_present_field() {
        let body = payload(json!({ "price": -5 }));
        let err = validate_partial_product(&body).unwrap_err();

        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Validation failed: Price must be a non-negative number");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn partial_with_empty_body_is_empty_patch() {
        let patch = validate_partial_product(&ProductPayload::default()).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.description.is_none());
        assert!(patch.price.is_none());
        assert!(patch.category.is_none());
        assert!(patch.in_stock.is_none());
    }

    #[test]
    fn integer_price_is_accepted() {
        let body = payload(json!({
            "name": "Kettle",
            "description": "Electric kettle",
            "price": 20,
            "category": "kitchen",
            "inStock": false
        }));

        let new = validate_product(&body).unwrap();
        assert_eq!(new.price, 20.0);
    }
}
