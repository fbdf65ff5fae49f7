use regex::Regex;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::{slugify, SchemaConfig};
use crate::processor::field_validator::product_id;

const DEFAULT_SAFETY_RATING: i64 = 5;
const DEFAULT_AVERAGE_RATING: f64 = 0.0;
const DEFAULT_FUNCTION: &str = "other";
const DEFAULT_IRRITATION_RISK: &str = "low";
const DEFAULT_CATEGORY: &str = "other";

/// Best-effort record normalization. Always returns a cleaned copy, never
/// fails: unparseable numerics fall back to fixed defaults, off-schema enum
/// values go through the synonym tables and then a per-field default.
/// Missing fields are left missing, only existing values get remapped.
pub struct FieldCleaner {
    schema: SchemaConfig,
    delimiters: Regex,
}

impl FieldCleaner {
    pub fn new(schema: SchemaConfig) -> Self {
        let delimiters = Regex::new(r"[,，、;；]").expect("delimiter regex is valid");
        FieldCleaner { schema, delimiters }
    }

    /// Clean a single ingredient record keyed by its slug.
    pub fn clean_ingredient(&self, key: &str, ingredient: &Value) -> Value {
        let Some(map) = ingredient.as_object() else {
            return ingredient.clone();
        };
        let mut cleaned = map.clone();

        // Slug mismatches are reported, never auto-corrected
        if let Some(name) = cleaned.get("name").and_then(Value::as_str) {
            let standard_key = slugify(name);
            if standard_key != key {
                info!(
                    "key '{}' does not match name '{}', suggested key: '{}'",
                    key, name, standard_key
                );
            }
        }

        if let Some(raw) = cleaned.get("safetyRating") {
            let rating = match as_integer(raw) {
                Some(n) => n.clamp(1, 10),
                None => {
                    warn!(
                        "[{}] cannot convert safetyRating {}, using default {}",
                        key, raw, DEFAULT_SAFETY_RATING
                    );
                    DEFAULT_SAFETY_RATING
                }
            };
            cleaned.insert("safetyRating".to_string(), json!(rating));
        }

        if let Some(func) = cleaned.get("function").cloned() {
            let canonical = self.canonical_function(key, &func);
            cleaned.insert("function".to_string(), json!(canonical));
        }

        if let Some(risk) = cleaned.get("irritationRisk").cloned() {
            let canonical = self.canonical_irritation_risk(key, &risk);
            cleaned.insert("irritationRisk".to_string(), json!(canonical));
        }

        if let Some(Value::Array(aliases)) = cleaned.get("aliases") {
            let normalized = dedup_preserving_order(
                aliases
                    .iter()
                    .filter_map(Value::as_str)
                    .map(slugify)
                    .filter(|a| !a.is_empty()),
            );
            cleaned.insert("aliases".to_string(), json!(normalized));
        }

        if let Some(Value::Array(benefits)) = cleaned.get("benefits") {
            let normalized = dedup_preserving_order(
                benefits
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string),
            );
            cleaned.insert("benefits".to_string(), json!(normalized));
        }

        if let Some(warnings) = cleaned.get("warnings") {
            if !warnings.is_null() {
                let normalized = match warnings.as_array() {
                    Some(list) => {
                        let trimmed: Vec<String> = list
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::trim)
                            .filter(|w| !w.is_empty())
                            .map(str::to_string)
                            .collect();
                        // No warnings left is an explicit null, not []
                        if trimmed.is_empty() { Value::Null } else { json!(trimmed) }
                    }
                    None => Value::Null,
                };
                cleaned.insert("warnings".to_string(), normalized);
            }
        }

        Value::Object(cleaned)
    }

    /// Clean a single product record.
    pub fn clean_product(&self, product: &Value) -> Value {
        let Some(map) = product.as_object() else {
            return product.clone();
        };
        let mut cleaned = map.clone();
        let id = product_id(product);

        if let Some(category) = cleaned.get("category").cloned() {
            let canonical = self.canonical_category(&id, &category);
            cleaned.insert("category".to_string(), json!(canonical));
        }

        if let Some(Value::String(raw)) = cleaned.get("ingredients") {
            let list: Vec<String> = self
                .delimiters
                .split(raw)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            cleaned.insert("ingredients".to_string(), json!(list));
        }

        if let Some(raw) = cleaned.get("price").cloned() {
            match parse_price(&raw) {
                Some(price) => {
                    cleaned.insert("price".to_string(), json!(price));
                }
                None => warn!("[{}] cannot parse price {}, keeping original value", id, raw),
            }
        }

        // priceRange is only ever derived, never overwritten
        if !cleaned.contains_key("priceRange") {
            if let Some(price) = cleaned.get("price").and_then(Value::as_f64) {
                let tier = price_tier(price);
                info!("[{}] inferred priceRange = '{}' (price: ${})", id, tier, price);
                cleaned.insert("priceRange".to_string(), json!(tier));
            }
        }

        if let Some(raw) = cleaned.get("averageRating") {
            let rating = match as_float(raw) {
                Some(r) => {
                    let rounded = (r * 10.0).round() / 10.0;
                    rounded.clamp(0.0, 5.0)
                }
                None => {
                    warn!(
                        "[{}] invalid averageRating {}, using default {}",
                        id, raw, DEFAULT_AVERAGE_RATING
                    );
                    DEFAULT_AVERAGE_RATING
                }
            };
            cleaned.insert("averageRating".to_string(), json!(rating));
        }

        Value::Object(cleaned)
    }

    fn canonical_function(&self, key: &str, value: &Value) -> String {
        if let Some(s) = value.as_str() {
            if self.schema.is_valid_function(s) {
                return s.to_string();
            }
            let lower = s.to_lowercase();
            if let Some(mapped) = self.schema.function_synonyms.get(lower.as_str()) {
                info!("[{}] mapped function '{}' -> '{}'", key, s, mapped);
                return (*mapped).to_string();
            }
        }
        DEFAULT_FUNCTION.to_string()
    }

    fn canonical_irritation_risk(&self, key: &str, value: &Value) -> String {
        if let Some(s) = value.as_str() {
            if self.schema.is_valid_irritation_level(s) {
                return s.to_string();
            }
            let lower = s.to_lowercase();
            if let Some(mapped) = self.schema.risk_synonyms.get(lower.as_str()) {
                info!("[{}] mapped irritationRisk '{}' -> '{}'", key, s, mapped);
                return (*mapped).to_string();
            }
            if self.schema.is_valid_irritation_level(lower.as_str()) {
                return lower;
            }
        }
        DEFAULT_IRRITATION_RISK.to_string()
    }

    fn canonical_category(&self, id: &str, value: &Value) -> String {
        if let Some(s) = value.as_str() {
            if self.schema.is_valid_category(s) {
                return s.to_string();
            }
            let lower = s.to_lowercase();
            // Ordered substring scan, first hit wins
            for (pattern, canonical) in &self.schema.category_synonyms {
                if lower.contains(pattern) {
                    info!("[{}] mapped category '{}' -> '{}'", id, s, canonical);
                    return (*canonical).to_string();
                }
            }
        }
        DEFAULT_CATEGORY.to_string()
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

// Strings like "nan" and "inf" parse as f64 but have no JSON number
// representation, so they count as unparseable here.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Parse a price that may carry a currency symbol and thousands separators.
fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned = s.replace('$', "").replace(',', "");
            cleaned.trim().parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Fixed tier thresholds: inclusive lower bound, exclusive upper bound.
fn price_tier(price: f64) -> &'static str {
    if price < 50.0 {
        "budget"
    } else if price < 150.0 {
        "midRange"
    } else if price < 300.0 {
        "premium"
    } else {
        "luxury"
    }
}

fn dedup_preserving_order(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
