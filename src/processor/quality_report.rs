use serde_json::{Map, Value};

const MAX_DISPLAYED_ERRORS: usize = 20;

const INGREDIENT_REPORT_FIELDS: [&str; 6] =
    ["name", "aliases", "function", "safetyRating", "benefits", "warnings"];

const PRODUCT_REPORT_FIELDS: [&str; 8] = [
    "id",
    "name",
    "brand",
    "category",
    "priceRange",
    "ingredients",
    "averageRating",
    "description",
];

/// Prints the data-quality summary for a cleaned collection: enum frequency
/// tables, numeric stats, field completeness, then the violation list.
/// Purely observational, never affects the pipeline outcome.
pub struct QualityReport;

impl QualityReport {
    pub fn print_ingredient_report(&self, data: &Map<String, Value>, errors: &[String]) {
        println!("\n{}", "=".repeat(60));
        println!("Data quality report (ingredient)");
        println!("{}", "=".repeat(60));

        let total = data.len();
        println!("\nTotal ingredients: {}", total);

        println!("\nFunction distribution:");
        for (tag, count) in frequency_counts(data.values().map(|ing| ing.get("function"))) {
            println!("  {}: {}", tag, count);
        }

        println!("\nIrritation risk distribution:");
        for (tag, count) in frequency_counts(data.values().map(|ing| ing.get("irritationRisk"))) {
            println!("  {}: {}", tag, count);
        }

        let ratings: Vec<i64> = data
            .values()
            .map(|ing| ing.get("safetyRating").and_then(Value::as_i64).unwrap_or(0))
            .collect();
        if let Some(stats) = int_stats(&ratings) {
            println!(
                "\nSafety rating: mean {:.1}, range [{}, {}]",
                stats.mean, stats.min, stats.max
            );
        }

        println!("\nField completeness:");
        for field in INGREDIENT_REPORT_FIELDS {
            let count = data.values().filter(|ing| has_value(ing, field)).count();
            println!("  {}: {}/{} ({:.1}%)", field, count, total, percentage(count, total));
        }

        self.print_errors(errors);
    }

    pub fn print_product_report(&self, products: &[Value], errors: &[String]) {
        println!("\n{}", "=".repeat(60));
        println!("Data quality report (product)");
        println!("{}", "=".repeat(60));

        let total = products.len();
        println!("\nTotal products: {}", total);

        println!("\nCategory distribution:");
        for (tag, count) in frequency_counts(products.iter().map(|p| p.get("category"))) {
            println!("  {}: {}", tag, count);
        }

        println!("\nPrice range distribution:");
        for (tag, count) in frequency_counts(products.iter().map(|p| p.get("priceRange"))) {
            println!("  {}: {}", tag, count);
        }

        let ingredient_counts: Vec<i64> = products
            .iter()
            .filter_map(|p| p.get("ingredients").and_then(Value::as_array))
            .map(|list| list.len() as i64)
            .collect();
        if let Some(stats) = int_stats(&ingredient_counts) {
            println!(
                "\nIngredients per product: mean {:.1}, range [{}, {}]",
                stats.mean, stats.min, stats.max
            );
        }

        let ratings: Vec<f64> = products
            .iter()
            .filter_map(|p| p.get("averageRating").and_then(Value::as_f64))
            .filter(|r| *r > 0.0)
            .collect();
        if !ratings.is_empty() {
            let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
            println!("\nMean rating: {:.2}", mean);
        }

        println!("\nField completeness:");
        for field in PRODUCT_REPORT_FIELDS {
            let count = products.iter().filter(|p| has_value(p, field)).count();
            println!("  {}: {}/{} ({:.1}%)", field, count, total, percentage(count, total));
        }

        self.print_errors(errors);
    }

    fn print_errors(&self, errors: &[String]) {
        println!("\nFound {} issues:", errors.len());
        if errors.is_empty() {
            println!("  ✓ data validation passed");
        } else {
            for (i, error) in errors.iter().take(MAX_DISPLAYED_ERRORS).enumerate() {
                println!("  {}. {}", i + 1, error);
            }
            if errors.len() > MAX_DISPLAYED_ERRORS {
                println!("  ... {} more issues", errors.len() - MAX_DISPLAYED_ERRORS);
            }
        }
        println!("\n{}\n", "=".repeat(60));
    }
}

struct IntStats {
    min: i64,
    max: i64,
    mean: f64,
}

fn int_stats(values: &[i64]) -> Option<IntStats> {
    if values.is_empty() {
        return None;
    }
    let min = *values.iter().min().expect("non-empty");
    let max = *values.iter().max().expect("non-empty");
    let mean = values.iter().sum::<i64>() as f64 / values.len() as f64;
    Some(IntStats { min, max, mean })
}

/// Frequency table sorted descending by count; ties keep first-seen order.
/// Missing or non-string values are bucketed as "(missing)".
pub fn frequency_counts<'a>(values: impl Iterator<Item = Option<&'a Value>>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        let tag = value.and_then(Value::as_str).unwrap_or("(missing)").to_string();
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn has_value(record: &Value, field: &str) -> bool {
    match record.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Bool(b)) => *b,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total as f64
}
