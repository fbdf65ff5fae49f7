use std::collections::HashMap;

/// Canonical enum sets and synonym tables for the validation/cleaning schema.
///
/// Built once at process start and passed into the validator and cleaner, so
/// tests can swap in their own tables. The category synonym table is an
/// ordered list because it is scanned by substring containment and the first
/// hit wins.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    pub ingredient_functions: Vec<&'static str>,
    pub irritation_levels: Vec<&'static str>,
    pub product_categories: Vec<&'static str>,
    pub price_ranges: Vec<&'static str>,
    pub function_synonyms: HashMap<&'static str, &'static str>,
    pub risk_synonyms: HashMap<&'static str, &'static str>,
    pub category_synonyms: Vec<(&'static str, &'static str)>,
}

impl SchemaConfig {
    pub fn new() -> Self {
        let ingredient_functions = vec![
            "moisturizing",
            "brightening",
            "antiAging",
            "acneFighting",
            "soothing",
            "exfoliating",
            "sunProtection",
            "preservative",
            "fragrance",
            "other",
        ];

        let irritation_levels = vec!["none", "low", "medium", "high"];

        let product_categories = vec![
            "cleanser",
            "toner",
            "serum",
            "moisturizer",
            "sunscreen",
            "mask",
            "exfoliant",
            "eyeCream",
            "other",
        ];

        let price_ranges = vec!["budget", "midRange", "premium", "luxury"];

        // Common off-schema values seen in scraped data, keyed lowercase
        let mut function_synonyms = HashMap::new();
        function_synonyms.insert("solvent", "other");
        function_synonyms.insert("humectant", "moisturizing");
        function_synonyms.insert("emollient", "moisturizing");
        function_synonyms.insert("whitening", "brightening");
        function_synonyms.insert("anti-aging", "antiAging");
        function_synonyms.insert("antioxidant", "antiAging");

        let mut risk_synonyms = HashMap::new();
        risk_synonyms.insert("minimal", "none");
        risk_synonyms.insert("very low", "low");
        risk_synonyms.insert("moderate", "medium");
        risk_synonyms.insert("severe", "high");

        // Matched by substring containment, in this order
        let category_synonyms = vec![
            ("face wash", "cleanser"),
            ("facial cleanser", "cleanser"),
            ("essence", "serum"),
            ("cream", "moisturizer"),
            ("lotion", "moisturizer"),
            ("sun protection", "sunscreen"),
            ("spf", "sunscreen"),
            ("sheet mask", "mask"),
            ("eye", "eyeCream"),
        ];

        SchemaConfig {
            ingredient_functions,
            irritation_levels,
            product_categories,
            price_ranges,
            function_synonyms,
            risk_synonyms,
            category_synonyms,
        }
    }

    pub fn is_valid_function(&self, value: &str) -> bool {
        self.ingredient_functions.contains(&value)
    }

    pub fn is_valid_irritation_level(&self, value: &str) -> bool {
        self.irritation_levels.contains(&value)
    }

    pub fn is_valid_category(&self, value: &str) -> bool {
        self.product_categories.contains(&value)
    }

    pub fn is_valid_price_range(&self, value: &str) -> bool {
        self.price_ranges.contains(&value)
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize an ingredient name into its slug form: lowercased with
/// everything but ASCII letters and digits stripped.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_membership() {
        let schema = SchemaConfig::new();

        assert!(schema.is_valid_function("moisturizing"));
        assert!(!schema.is_valid_function("antioxidant"));
        assert!(schema.is_valid_irritation_level("none"));
        assert!(!schema.is_valid_irritation_level("Minimal"));
        assert!(schema.is_valid_category("eyeCream"));
        assert!(!schema.is_valid_category("eye cream"));
        assert!(schema.is_valid_price_range("midRange"));
    }

    #[test]
    fn test_synonym_tables() {
        let schema = SchemaConfig::new();

        assert_eq!(schema.function_synonyms.get("antioxidant"), Some(&"antiAging"));
        assert_eq!(schema.risk_synonyms.get("very low"), Some(&"low"));

        // First containment hit wins, so "cream" must come before "eye"
        let cream_pos = schema
            .category_synonyms
            .iter()
            .position(|(k, _)| *k == "cream")
            .unwrap();
        let eye_pos = schema
            .category_synonyms
            .iter()
            .position(|(k, _)| *k == "eye")
            .unwrap();
        assert!(cream_pos < eye_pos);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hyaluronic Acid"), "hyaluronicacid");
        assert_eq!(slugify("Vitamin C (L-Ascorbic)"), "vitaminclascorbic");
        assert_eq!(slugify("SPF 50+"), "spf50");
    }
}
