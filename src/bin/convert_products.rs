use std::fs;

use anyhow::{Context, Result};
use serde_json::Value;

#[path = "../config/mod.rs"]
mod config;

#[path = "../models/mod.rs"]
mod models;

#[path = "../processor/keyword_classifier.rs"]
mod keyword_classifier;

use config::KeywordConfig;
use keyword_classifier::KeywordClassifier;
use models::{Product, ProductCollection, RawExtract, RawProduct};

const INPUT_PATH: &str = "extracted_products.json";
const OUTPUT_PATH: &str = "products_converted.json";
const MAX_REVIEW_SAMPLE: usize = 3;

/// One-shot converter from the raw scrape extract to the product schema.
/// Fixed paths, no flags; malformed input is a fatal error before any
/// conversion runs.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let raw = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("input file not found: {}", INPUT_PATH))?;
    let extract: RawExtract = serde_json::from_str(&raw)
        .with_context(|| format!("{} is missing or malformed 'skincareProducts' data", INPUT_PATH))?;

    let classifier = KeywordClassifier::new(KeywordConfig::new());

    println!("Converting {} products...\n", extract.skincare_products.len());

    let products: Vec<Product> = extract
        .skincare_products
        .iter()
        .enumerate()
        .map(|(idx, raw_product)| convert_product(idx, raw_product, &classifier))
        .collect();

    for (idx, product) in products.iter().enumerate() {
        println!("{}. {}", idx + 1, product.name);
        println!("   brand: {}", product.brand);
        println!("   category: {}", product.category);
        println!("   ingredients: {}", product.ingredients.len());
        println!("   rating: {}/5 ({} reviews)", product.average_rating, product.sample_size);
        println!();
    }

    let collection = ProductCollection { products };
    let serialized = serde_json::to_string_pretty(&collection)?;
    fs::write(OUTPUT_PATH, serialized)
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;

    println!("✅ Conversion complete, saved to: {}", OUTPUT_PATH);
    print_summary(&collection.products);

    Ok(())
}

/// Build one normalized product from a raw scrape entry. Ids are 1-based,
/// zero-padded sequence numbers.
fn convert_product(idx: usize, raw: &RawProduct, classifier: &KeywordClassifier) -> Product {
    let name = &raw.product_name;
    let description = &raw.product_description;
    let reviews = &raw.user_reviews;

    let brand = classifier.extract_brand(name);
    let price_range = classifier.infer_price_range(name, &brand);

    Product {
        id: format!("product-{:03}", idx + 1),
        name: name.clone(),
        brand,
        category: classifier.infer_category(name, description),
        skin_types: classifier.infer_skin_types(description, reviews),
        concerns: classifier.infer_concerns(description, reviews),
        price_range,
        ingredients: classifier.extract_ingredients(description),
        average_rating: average_rating(reviews),
        sample_size: reviews.len(),
        description: description.clone(),
        source_url: raw.source_url.clone(),
        user_reviews: reviews.iter().take(MAX_REVIEW_SAMPLE).cloned().collect(),
    }
}

/// Mean of the non-zero review ratings, rounded to 1 decimal. 0.0 when there
/// are no usable ratings.
fn average_rating(reviews: &[Value]) -> f64 {
    let ratings: Vec<f64> = reviews
        .iter()
        .filter_map(|r| r.get("rating").and_then(Value::as_f64))
        .filter(|r| *r != 0.0)
        .collect();

    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

fn print_summary(products: &[Product]) {
    println!("\nSummary:");
    println!("  total products: {}", products.len());

    if !products.is_empty() {
        let mean_ingredients = products.iter().map(|p| p.ingredients.len()).sum::<usize>() as f64
            / products.len() as f64;
        println!("  mean ingredient count: {:.1}", mean_ingredients);
    }

    let rated: Vec<f64> = products
        .iter()
        .map(|p| p.average_rating)
        .filter(|r| *r != 0.0)
        .collect();
    if !rated.is_empty() {
        let mean = rated.iter().sum::<f64>() / rated.len() as f64;
        println!("  mean rating: {:.2}/5", mean);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_product() -> RawProduct {
        serde_json::from_value(json!({
            "productName": "CeraVe Hydrating Facial Cleanser",
            "productDescription": "A gentle cleanser with ceramides and hyaluronic acid for dry skin.",
            "userReviews": [
                {"rating": 5, "reviewText": "So gentle on my sensitive skin"},
                {"rating": 4, "reviewText": "Good"},
                {"rating": 0, "reviewText": "unrated"},
                {"rating": 3, "reviewText": "ok"},
                {"rating": 4, "reviewText": "fine"}
            ],
            "productName_citation": "https://example.com/cerave"
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_product() {
        let classifier = KeywordClassifier::new(KeywordConfig::new());
        let product = convert_product(0, &raw_product(), &classifier);

        assert_eq!(product.id, "product-001");
        assert_eq!(product.brand, "CeraVe");
        assert_eq!(product.category, "cleanser");
        assert_eq!(product.price_range, "budget");
        assert!(product.skin_types.contains(&"dry".to_string()));
        assert!(product.ingredients.contains(&"Ceramide".to_string()));
        assert!(product.ingredients.contains(&"Hyaluronic Acid".to_string()));
        // Sample capped at 3, sample size counts all reviews
        assert_eq!(product.user_reviews.len(), 3);
        assert_eq!(product.sample_size, 5);
        assert_eq!(product.source_url, "https://example.com/cerave");
    }

    #[test]
    fn test_average_rating_skips_zero_ratings() {
        let reviews = vec![
            json!({"rating": 5}),
            json!({"rating": 4}),
            json!({"rating": 0}),
            json!({"reviewText": "no rating"}),
        ];
        assert_eq!(average_rating(&reviews), 4.5);
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_sequence_ids_are_zero_padded() {
        let classifier = KeywordClassifier::new(KeywordConfig::new());
        let product = convert_product(41, &raw_product(), &classifier);
        assert_eq!(product.id, "product-042");
    }
}
