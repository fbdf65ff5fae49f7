use serde_json::Value;

use crate::config::KeywordConfig;

/// Rule-based classifier over free product text.
///
/// Matching is plain substring containment on lowercased text. A keyword like
/// "oil" will also hit inside unrelated words containing it; that imprecision
/// is accepted, the dictionaries are tuned around it.
pub struct KeywordClassifier {
    keywords: KeywordConfig,
}

impl KeywordClassifier {
    pub fn new(keywords: KeywordConfig) -> Self {
        KeywordClassifier { keywords }
    }

    /// First category whose any keyword occurs in name + description,
    /// in dictionary declaration order. Falls back to "other".
    pub fn infer_category(&self, name: &str, description: &str) -> String {
        let combined = format!("{} {}", name, description).to_lowercase();

        for (category, kws) in &self.keywords.category_keywords {
            if kws.iter().any(|kw| combined.contains(kw)) {
                return (*category).to_string();
            }
        }
        "other".to_string()
    }

    /// All skin types whose keywords occur in description + review bodies.
    /// Never empty: defaults to ["normal"] when nothing matched.
    pub fn infer_skin_types(&self, description: &str, reviews: &[Value]) -> Vec<String> {
        let combined = self.combined_review_text(description, reviews);

        let mut skin_types: Vec<String> = self
            .keywords
            .skin_type_keywords
            .iter()
            .filter(|(_, kws)| kws.iter().any(|kw| combined.contains(kw)))
            .map(|(tag, _)| (*tag).to_string())
            .collect();

        if skin_types.is_empty() {
            skin_types.push("normal".to_string());
        }
        skin_types
    }

    /// All concerns whose keywords occur in description + review bodies.
    /// May be empty.
    pub fn infer_concerns(&self, description: &str, reviews: &[Value]) -> Vec<String> {
        let combined = self.combined_review_text(description, reviews);

        self.keywords
            .concern_keywords
            .iter()
            .filter(|(_, kws)| kws.iter().any(|kw| combined.contains(kw)))
            .map(|(tag, _)| (*tag).to_string())
            .collect()
    }

    /// Known-ingredient mentions in the description, first-seen order,
    /// deduplicated.
    pub fn extract_ingredients(&self, description: &str) -> Vec<String> {
        let desc_lower = description.to_lowercase();

        let mut ingredients = Vec::new();
        for (keyword, display_name) in &self.keywords.known_ingredients {
            if desc_lower.contains(keyword) && !ingredients.contains(&display_name.to_string()) {
                ingredients.push((*display_name).to_string());
            }
        }
        ingredients
    }

    /// Brand from the explicit brand list, else the first token of the name.
    pub fn extract_brand(&self, product_name: &str) -> String {
        let name_lower = product_name.to_lowercase();

        for brand in &self.keywords.known_brands {
            if name_lower.contains(&brand.to_lowercase()) {
                return (*brand).to_string();
            }
        }

        product_name
            .split_whitespace()
            .next()
            .unwrap_or("other")
            .to_string()
    }

    /// Price tier from the brand tier lists, checked luxury -> premium ->
    /// budget against both the brand and the product name. Defaults to
    /// midRange.
    pub fn infer_price_range(&self, product_name: &str, brand: &str) -> String {
        let name_lower = product_name.to_lowercase();
        let brand_lower = brand.to_lowercase();

        let tiers = [
            (&self.keywords.luxury_brands, "luxury"),
            (&self.keywords.premium_brands, "premium"),
            (&self.keywords.budget_brands, "budget"),
        ];

        for (brands, tier) in tiers {
            for known in brands {
                let known_lower = known.to_lowercase();
                if brand_lower.contains(&known_lower) || name_lower.contains(&known_lower) {
                    return (*tier).to_string();
                }
            }
        }
        "midRange".to_string()
    }

    fn combined_review_text(&self, description: &str, reviews: &[Value]) -> String {
        let mut combined = description.to_lowercase();
        for review in reviews {
            if let Some(text) = review.get("reviewText").and_then(Value::as_str) {
                combined.push(' ');
                combined.push_str(&text.to_lowercase());
            }
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::new(KeywordConfig::new())
    }

    #[test]
    fn test_category_first_match_wins() {
        let c = classifier();

        assert_eq!(c.infer_category("Hydrating Facial Cleanser", ""), "cleanser");
        assert_eq!(c.infer_category("Vitamin C Serum", "brightening treatment"), "serum");

        // "body cream" hits the moisturizer "cream" keyword before the
        // catch-all entry that lists "body cream" explicitly
        assert_eq!(c.infer_category("Firming Body Cream", ""), "moisturizer");

        // "essence" is a toner keyword and toner comes before serum
        assert_eq!(c.infer_category("Treatment Essence", ""), "toner");

        assert_eq!(c.infer_category("Pimple Patch", "hydrocolloid dots"), "other");
        assert_eq!(c.infer_category("Mystery Item", "no keywords here"), "other");
    }

    #[test]
    fn test_skin_types_collects_all_matches() {
        let c = classifier();

        let reviews = vec![json!({"rating": 4, "reviewText": "Perfect for my oily T-zone"})];
        let types = c.infer_skin_types("Gentle hydrating formula for dry skin", &reviews);
        assert!(types.contains(&"dry".to_string()));
        assert!(types.contains(&"oily".to_string()));
        assert!(types.contains(&"sensitive".to_string())); // "gentle"
    }

    #[test]
    fn test_skin_types_falls_back_to_normal() {
        let c = classifier();
        assert_eq!(c.infer_skin_types("A product.", &[]), vec!["normal"]);
    }

    #[test]
    fn test_concerns_may_be_empty() {
        let c = classifier();
        assert!(c.infer_concerns("A product.", &[]).is_empty());

        let concerns = c.infer_concerns("Fights acne and fades dark spots", &[]);
        assert!(concerns.contains(&"acne".to_string()));
        assert!(concerns.contains(&"pigmentation".to_string()));
    }

    #[test]
    fn test_extract_ingredients_dedups_in_order() {
        let c = classifier();

        let ings = c.extract_ingredients(
            "Niacinamide and hyaluronic acid, plus more niacinamide and glycerin",
        );
        assert_eq!(ings, vec!["Hyaluronic Acid", "Niacinamide", "Glycerin"]);
    }

    #[test]
    fn test_extract_brand() {
        let c = classifier();

        assert_eq!(c.extract_brand("CeraVe Foaming Cleanser"), "CeraVe");
        assert_eq!(c.extract_brand("The Ordinary Niacinamide 10%"), "The Ordinary");
        // Unknown brand: first token
        assert_eq!(c.extract_brand("Mystery Glow Serum"), "Mystery");
    }

    #[test]
    fn test_infer_price_range() {
        let c = classifier();

        assert_eq!(c.infer_price_range("Crème de la Mer", "La Mer"), "luxury");
        assert_eq!(c.infer_price_range("Protini Cream", "Drunk Elephant"), "premium");
        assert_eq!(c.infer_price_range("Hydrating Cleanser", "CeraVe"), "budget");
        assert_eq!(c.infer_price_range("Glow Serum", "Unknown"), "midRange");
    }
}
