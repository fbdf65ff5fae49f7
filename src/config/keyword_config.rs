/// Keyword dictionaries for the converter's rule-based classification.
///
/// Every table is an ordered list of (tag, keywords) pairs. Classification is
/// first-match-wins over this declared order, so reordering entries changes
/// results on ambiguous inputs (e.g. "body cream" hits the moisturizer
/// "cream" keyword before the catch-all "body cream" entry). Keep the order
/// as-is.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub category_keywords: Vec<(&'static str, Vec<&'static str>)>,
    pub skin_type_keywords: Vec<(&'static str, Vec<&'static str>)>,
    pub concern_keywords: Vec<(&'static str, Vec<&'static str>)>,
    pub known_ingredients: Vec<(&'static str, &'static str)>,
    pub known_brands: Vec<&'static str>,
    pub luxury_brands: Vec<&'static str>,
    pub premium_brands: Vec<&'static str>,
    pub budget_brands: Vec<&'static str>,
}

impl KeywordConfig {
    pub fn new() -> Self {
        let category_keywords = vec![
            (
                "cleanser",
                vec!["cleanser", "cleansing", "face wash", "facial cleanser", "mousse", "cream-to-foam"],
            ),
            ("toner", vec!["toner", "essence", "lotion p50", "exfoliating toner"]),
            (
                "serum",
                vec!["serum", "treatment", "oil", "facial oil", "elixir", "dew drops", "boosters"],
            ),
            (
                "moisturizer",
                vec!["moisturizer", "cream", "lotion", "emulsion", "gel", "hydrating"],
            ),
            ("sunscreen", vec!["sunscreen", "spf", "glow screen", "mineral sunscreen"]),
            ("mask", vec!["mask", "facial mist"]),
            ("exfoliant", vec!["exfoliant", "peel", "polish", "micro polish"]),
            ("eyeCream", vec!["eye cream", "eye", "undereye"]),
            ("other", vec!["patch", "dots", "ointment", "lip", "body cream", "bum bum"]),
        ];

        let skin_type_keywords = vec![
            ("dry", vec!["dry", "dehydrated", "moisture", "hydrat"]),
            ("oily", vec!["oily", "oil control", "shine control", "sebum"]),
            ("sensitive", vec!["sensitive", "gentle", "soothing", "calm"]),
            ("combination", vec!["combination", "balanced"]),
        ];

        let concern_keywords = vec![
            ("acne", vec!["acne", "breakout", "blemish", "pimple", "cystic"]),
            ("aging", vec!["aging", "anti-aging", "wrinkle", "fine line", "firm"]),
            ("pigmentation", vec!["pigment", "dark spot", "discoloration", "brighten", "radiance"]),
            ("sensitivity", vec!["sensitive", "irritation", "redness", "soothing"]),
            ("dryness", vec!["dry", "dehydrat", "moisture", "hydrat"]),
            ("pores", vec!["pore", "clog", "blackhead"]),
        ];

        // keyword -> display name
        let known_ingredients = vec![
            ("hyaluronic acid", "Hyaluronic Acid"),
            ("niacinamide", "Niacinamide"),
            ("vitamin c", "Vitamin C"),
            ("vitamin e", "Vitamin E"),
            ("retinol", "Retinol"),
            ("ceramide", "Ceramide"),
            ("peptide", "Peptides"),
            ("glycerin", "Glycerin"),
            ("salicylic acid", "Salicylic Acid"),
            ("azelaic acid", "Azelaic Acid"),
            ("lactic acid", "Lactic Acid"),
            ("benzoyl peroxide", "Benzoyl Peroxide"),
            ("zinc", "Zinc Oxide"),
            ("panthenol", "Panthenol"),
            ("squalane", "Squalane"),
            ("caffeine", "Caffeine"),
            ("aha", "AHA"),
            ("bha", "BHA"),
        ];

        let known_brands = vec![
            "CeraVe",
            "The Ordinary",
            "Olay",
            "SkinCeuticals",
            "La Roche-Posay",
            "Drunk Elephant",
            "Peach & Lily",
            "Differin",
            "Rhode",
            "Hero Cosmetics",
            "Lancôme",
            "Tula Skincare",
            "Laneige",
            "La Mer",
            "Neutrogena",
            "Supergoop",
            "Vintner's Daughter",
            "Eve Lom",
            "Shiseido",
            "Philosophy",
            "Caudalie",
            "Dr. Dennis Gross",
            "Shani Darden",
            "EADEM",
            "MAC",
            "Clinique",
            "Dr. Loretta",
            "Estée Lauder",
            "Eau Thermale Avène",
            "Mother Science",
            "KraveBeauty",
            "The Outset",
            "Blue Lagoon",
            "Dermalogica",
            "Aestura",
            "Matter of Fact",
            "Neocutis",
            "Peace Out",
            "Sol de Janeiro",
            "Tatcha",
            "Glow Recipe",
            "Topicals",
            "Biologique Recherche",
        ];

        let luxury_brands = vec![
            "La Mer",
            "SK-II",
            "Estée Lauder",
            "Lancôme",
            "Shiseido",
            "SkinCeuticals",
            "Vintner",
            "Tatcha",
        ];

        let premium_brands = vec![
            "Drunk Elephant",
            "Dr. Dennis Gross",
            "Paula's Choice",
            "Biologique Recherche",
            "Neocutis",
            "Eve Lom",
            "Mother Science",
        ];

        let budget_brands = vec!["CeraVe", "Neutrogena", "Aquaphor", "Differin", "Hero Cosmetics"];

        KeywordConfig {
            category_keywords,
            skin_type_keywords,
            concern_keywords,
            known_ingredients,
            known_brands,
            luxury_brands,
            premium_brands,
            budget_brands,
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_order_is_stable() {
        let keywords = KeywordConfig::new();

        // Declaration order drives first-match-wins classification
        let tags: Vec<&str> = keywords.category_keywords.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            tags,
            vec![
                "cleanser",
                "toner",
                "serum",
                "moisturizer",
                "sunscreen",
                "mask",
                "exfoliant",
                "eyeCream",
                "other"
            ]
        );
    }

    #[test]
    fn test_brand_tiers_are_disjoint_from_default() {
        let keywords = KeywordConfig::new();
        assert!(!keywords.luxury_brands.is_empty());
        assert!(!keywords.premium_brands.is_empty());
        assert!(!keywords.budget_brands.is_empty());
    }
}
