use serde::{Deserialize, Serialize};

/// Top-level shape of the raw scrape extract consumed by convert_products.
#[derive(Debug, Deserialize)]
pub struct RawExtract {
    #[serde(rename = "skincareProducts")]
    pub skincare_products: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productDescription", default)]
    pub product_description: String,
    // Reviews are kept as raw JSON so the capped sample round-trips verbatim
    #[serde(rename = "userReviews", default)]
    pub user_reviews: Vec<serde_json::Value>,
    #[serde(rename = "productName_citation", default)]
    pub source_url: String,
}

/// Normalized product record emitted by the converter.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub skin_types: Vec<String>,
    pub concerns: Vec<String>,
    pub price_range: String,
    pub ingredients: Vec<String>,
    pub average_rating: f64,
    pub sample_size: usize,
    pub description: String,
    pub source_url: String,
    pub user_reviews: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ProductCollection {
    pub products: Vec<Product>,
}
