use regex::Regex;
use serde_json::{Map, Value};

use crate::config::SchemaConfig;

pub const INGREDIENT_REQUIRED_FIELDS: [&str; 5] =
    ["name", "function", "safetyRating", "irritationRisk", "benefits"];

pub const PRODUCT_REQUIRED_FIELDS: [&str; 5] = ["id", "name", "brand", "category", "ingredients"];

/// Schema checks over raw records. Pure: never mutates its input and never
/// fails on malformed-but-present fields; every problem becomes a
/// human-readable violation string prefixed with the record key/id.
pub struct FieldValidator {
    schema: SchemaConfig,
    delimiters: Regex,
}

impl FieldValidator {
    pub fn new(schema: SchemaConfig) -> Self {
        // ASCII and full-width list delimiters seen in scraped ingredient strings
        let delimiters = Regex::new(r"[,，、;；]").expect("delimiter regex is valid");
        FieldValidator { schema, delimiters }
    }

    /// Validate a single ingredient record keyed by its slug.
    pub fn validate_ingredient(&self, key: &str, ingredient: &Value) -> Vec<String> {
        let mut errors = Vec::new();

        let Some(map) = ingredient.as_object() else {
            errors.push(format!("[{}] record is not a JSON object", key));
            return errors;
        };

        for field in INGREDIENT_REQUIRED_FIELDS {
            match map.get(field) {
                None => errors.push(format!("[{}] missing required field: {}", key, field)),
                Some(value) if is_empty_value(value) => {
                    errors.push(format!("[{}] empty field: {}", key, field))
                }
                Some(_) => {}
            }
        }

        if let Some(func) = map.get("function") {
            match func.as_str() {
                Some(f) if self.schema.is_valid_function(f) => {}
                _ => errors.push(format!(
                    "[{}] invalid function: {}, expected one of {:?}",
                    key, func, self.schema.ingredient_functions
                )),
            }
        }

        if let Some(raw) = map.get("safetyRating") {
            match as_integer(raw) {
                Some(rating) if (1..=10).contains(&rating) => {}
                Some(rating) => {
                    errors.push(format!("[{}] safetyRating out of range [1-10]: {}", key, rating))
                }
                None => errors.push(format!("[{}] safetyRating is not a valid number: {}", key, raw)),
            }
        }

        if let Some(risk) = map.get("irritationRisk") {
            match risk.as_str() {
                Some(r) if self.schema.is_valid_irritation_level(r) => {}
                _ => errors.push(format!(
                    "[{}] invalid irritationRisk: {}, expected one of {:?}",
                    key, risk, self.schema.irritation_levels
                )),
            }
        }

        if let Some(benefits) = map.get("benefits") {
            match benefits.as_array() {
                Some(list) if list.is_empty() => {
                    errors.push(format!("[{}] benefits must not be an empty array", key))
                }
                Some(_) => {}
                None => errors.push(format!("[{}] benefits must be an array", key)),
            }
        }

        if let Some(warnings) = map.get("warnings") {
            if !warnings.is_null() && !warnings.is_array() {
                errors.push(format!("[{}] warnings must be an array or null", key));
            }
        }

        errors
    }

    /// Validate a single product record.
    pub fn validate_product(&self, product: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        let id = product_id(product);

        let Some(map) = product.as_object() else {
            errors.push(format!("[{}] record is not a JSON object", id));
            return errors;
        };

        for field in PRODUCT_REQUIRED_FIELDS {
            if !map.contains_key(field) {
                errors.push(format!("[{}] missing required field: {}", id, field));
            }
        }

        if let Some(category) = map.get("category") {
            match category.as_str() {
                Some(c) if self.schema.is_valid_category(c) => {}
                _ => errors.push(format!(
                    "[{}] invalid category: {}, expected one of {:?}",
                    id, category, self.schema.product_categories
                )),
            }
        }

        if let Some(price_range) = map.get("priceRange") {
            match price_range.as_str() {
                Some(pr) if self.schema.is_valid_price_range(pr) => {}
                _ => errors.push(format!(
                    "[{}] invalid priceRange: {}, expected one of {:?}",
                    id, price_range, self.schema.price_ranges
                )),
            }
        }

        if let Some(ingredients) = map.get("ingredients") {
            match ingredients {
                Value::String(s) => {
                    if s.trim().is_empty() {
                        errors.push(format!("[{}] ingredients is an empty string", id));
                    } else if self.split_count(s) < 3 {
                        errors.push(format!(
                            "[{}] fewer than 3 ingredients (possibly incomplete)",
                            id
                        ));
                    }
                }
                Value::Array(list) => {
                    if list.is_empty() {
                        errors.push(format!("[{}] ingredients is an empty array", id));
                    } else if list.len() < 3 {
                        errors.push(format!(
                            "[{}] fewer than 3 ingredients (possibly incomplete)",
                            id
                        ));
                    }
                }
                _ => errors.push(format!(
                    "[{}] ingredients has the wrong format (expected string or array)",
                    id
                )),
            }
        }

        if let Some(raw) = map.get("averageRating") {
            match as_float(raw) {
                Some(rating) if (0.0..=5.0).contains(&rating) => {}
                Some(rating) => {
                    errors.push(format!("[{}] averageRating out of range [0-5]: {}", id, rating))
                }
                None => errors.push(format!("[{}] averageRating is not a valid number", id)),
            }
        }

        errors
    }

    /// Per-record validation over the whole ingredient collection, then one
    /// aggregate violation listing any duplicated names.
    pub fn validate_ingredient_collection(&self, data: &Map<String, Value>) -> Vec<String> {
        let mut errors = Vec::new();

        for (key, ingredient) in data {
            errors.extend(self.validate_ingredient(key, ingredient));
        }

        let names: Vec<&str> = data
            .values()
            .map(|ing| ing.get("name").and_then(Value::as_str).unwrap_or(""))
            .collect();
        let duplicates = find_duplicates(&names);
        if !duplicates.is_empty() {
            errors.push(format!("duplicate ingredient names found: {:?}", duplicates));
        }

        errors
    }

    /// Per-record validation over the product list, then one aggregate
    /// violation listing any duplicated ids.
    pub fn validate_product_collection(&self, products: &[Value]) -> Vec<String> {
        let mut errors = Vec::new();

        for product in products {
            errors.extend(self.validate_product(product));
        }

        let ids: Vec<&str> = products
            .iter()
            .map(|p| p.get("id").and_then(Value::as_str).unwrap_or(""))
            .collect();
        let duplicates = find_duplicates(&ids);
        if !duplicates.is_empty() {
            errors.push(format!("duplicate product ids found: {:?}", duplicates));
        }

        errors
    }

    fn split_count(&self, s: &str) -> usize {
        self.delimiters.split(s).count()
    }
}

/// Best-effort display id for a product record.
pub fn product_id(product: &Value) -> String {
    match product.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "unknown".to_string(),
    }
}

/// Present-but-empty semantics for required fields: null, empty string,
/// empty array/object, zero, or false.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
    }
}

/// Integer reading used for safetyRating: JSON numbers truncate, numeric
/// strings must parse as integers.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Float reading used for averageRating.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Values appearing more than once, listed once each in first-seen order.
fn find_duplicates<'a>(values: &[&'a str]) -> Vec<&'a str> {
    let mut duplicates = Vec::new();
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) && !duplicates.contains(value) {
            duplicates.push(*value);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> FieldValidator {
        FieldValidator::new(SchemaConfig::new())
    }

    fn valid_ingredient() -> Value {
        json!({
            "name": "Niacinamide",
            "function": "brightening",
            "safetyRating": 9,
            "irritationRisk": "low",
            "benefits": ["Evens skin tone", "Minimizes pores"]
        })
    }

    #[test]
    fn test_valid_ingredient_passes() {
        let v = validator();
        assert!(v.validate_ingredient("niacinamide", &valid_ingredient()).is_empty());
    }

    #[test]
    fn test_missing_vs_empty_field() {
        let v = validator();

        let mut ing = valid_ingredient();
        ing.as_object_mut().unwrap().remove("function");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("missing required field: function")));

        let mut ing = valid_ingredient();
        ing["name"] = json!("");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("empty field: name")));
    }

    #[test]
    fn test_safety_rating_type_vs_range() {
        let v = validator();

        let mut ing = valid_ingredient();
        ing["safetyRating"] = json!(12);
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("safetyRating out of range")));

        let mut ing = valid_ingredient();
        ing["safetyRating"] = json!("very safe");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("safetyRating is not a valid number")));

        // Numeric string is fine
        let mut ing = valid_ingredient();
        ing["safetyRating"] = json!("7");
        assert!(v.validate_ingredient("x", &ing).is_empty());
    }

    #[test]
    fn test_enum_violations() {
        let v = validator();

        let mut ing = valid_ingredient();
        ing["function"] = json!("antioxidant");
        ing["irritationRisk"] = json!("Minimal");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("invalid function")));
        assert!(errors.iter().any(|e| e.contains("invalid irritationRisk")));
    }

    #[test]
    fn test_benefits_and_warnings_shape() {
        let v = validator();

        let mut ing = valid_ingredient();
        ing["benefits"] = json!("hydrating");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("benefits must be an array")));

        let mut ing = valid_ingredient();
        ing["warnings"] = json!("patch test first");
        let errors = v.validate_ingredient("x", &ing);
        assert!(errors.iter().any(|e| e.contains("warnings must be an array or null")));

        let mut ing = valid_ingredient();
        ing["warnings"] = json!(null);
        assert!(v.validate_ingredient("x", &ing).is_empty());
    }

    #[test]
    fn test_validator_does_not_mutate() {
        let v = validator();
        let ing = json!({"name": "", "safetyRating": "bad"});
        let before = ing.clone();
        let _ = v.validate_ingredient("x", &ing);
        assert_eq!(ing, before);
    }

    fn valid_product() -> Value {
        json!({
            "id": "product-001",
            "name": "Hydrating Serum",
            "brand": "The Ordinary",
            "category": "serum",
            "ingredients": ["Water", "Niacinamide", "Glycerin"]
        })
    }

    #[test]
    fn test_valid_product_passes() {
        let v = validator();
        assert!(v.validate_product(&valid_product()).is_empty());
    }

    #[test]
    fn test_missing_category_single_violation() {
        let v = validator();
        let mut p = valid_product();
        p.as_object_mut().unwrap().remove("category");
        let errors = v.validate_product(&p);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "[product-001] missing required field: category");
    }

    #[test]
    fn test_ingredient_list_rules() {
        let v = validator();

        let mut p = valid_product();
        p["ingredients"] = json!("Water, Glycerin");
        let errors = v.validate_product(&p);
        assert!(errors.iter().any(|e| e.contains("possibly incomplete")));

        // Full-width delimiters count too
        let mut p = valid_product();
        p["ingredients"] = json!("水；甘油；烟酰胺");
        assert!(v.validate_product(&p).is_empty());

        let mut p = valid_product();
        p["ingredients"] = json!("   ");
        let errors = v.validate_product(&p);
        assert!(errors.iter().any(|e| e.contains("empty string")));

        let mut p = valid_product();
        p["ingredients"] = json!(42);
        let errors = v.validate_product(&p);
        assert!(errors.iter().any(|e| e.contains("wrong format")));
    }

    #[test]
    fn test_average_rating_bounds() {
        let v = validator();

        let mut p = valid_product();
        p["averageRating"] = json!(5.5);
        let errors = v.validate_product(&p);
        assert!(errors.iter().any(|e| e.contains("averageRating out of range")));

        let mut p = valid_product();
        p["averageRating"] = json!("five stars");
        let errors = v.validate_product(&p);
        assert!(errors.iter().any(|e| e.contains("not a valid number")));
    }

    #[test]
    fn test_duplicate_names_single_aggregate_violation() {
        let v = validator();

        let mut data = Map::new();
        let mut a = valid_ingredient();
        a["name"] = json!("Niacinamide");
        let mut b = valid_ingredient();
        b["name"] = json!("Niacinamide");
        data.insert("niacinamide".to_string(), a);
        data.insert("niacinamide2".to_string(), b);

        let errors = v.validate_ingredient_collection(&data);
        let dup_errors: Vec<_> = errors.iter().filter(|e| e.contains("duplicate")).collect();
        assert_eq!(dup_errors.len(), 1);
        assert!(dup_errors[0].contains("Niacinamide"));
    }

    #[test]
    fn test_duplicate_product_ids() {
        let v = validator();
        let products = vec![valid_product(), valid_product()];
        let errors = v.validate_product_collection(&products);
        let dup_errors: Vec<_> = errors.iter().filter(|e| e.contains("duplicate")).collect();
        assert_eq!(dup_errors.len(), 1);
        assert!(dup_errors[0].contains("product-001"));
    }
}
