use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{json, Value};
use tracing::{error, info};

mod config;
mod processor;

use config::SchemaConfig;
use processor::{FieldCleaner, FieldValidator, QualityReport};

/// Validate and clean scraped skincare data against the fixed schema.
#[derive(Debug, Parser)]
#[command(name = "validate_data")]
struct Args {
    /// Input JSON file path
    #[arg(long)]
    input: PathBuf,

    /// Output JSON file path
    #[arg(long)]
    output: PathBuf,

    /// Data type of the input collection
    #[arg(long, value_enum)]
    r#type: DataType,

    /// Strict mode: do not write output when any violation was found
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DataType {
    Ingredient,
    Product,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Reading input file: {}", args.input.display());
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("input file not found: {}", args.input.display()))?;
    let data: Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in {}", args.input.display()))?;

    let schema = SchemaConfig::new();
    let validator = FieldValidator::new(schema.clone());
    let cleaner = FieldCleaner::new(schema);
    let report = QualityReport;

    let (errors, cleaned) = match args.r#type {
        DataType::Ingredient => process_ingredients(&data, &validator, &cleaner, &report)?,
        DataType::Product => process_products(&data, &validator, &cleaner, &report)?,
    };

    if !errors.is_empty() && args.strict {
        error!("strict mode: {} violations found, output not written", errors.len());
        process::exit(1);
    }

    info!("Writing output file: {}", args.output.display());
    let serialized = serde_json::to_string_pretty(&cleaned)?;
    fs::write(&args.output, serialized)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("✅ Done, cleaned data saved to {}", args.output.display());

    if errors.is_empty() {
        Ok(())
    } else {
        // Output was still written; the non-zero status flags the violations
        process::exit(1);
    }
}

/// Validate and clean a slug-keyed ingredient collection. Validation and
/// cleaning are independent passes over the same raw input.
fn process_ingredients(
    data: &Value,
    validator: &FieldValidator,
    cleaner: &FieldCleaner,
    report: &QualityReport,
) -> Result<(Vec<String>, Value)> {
    let Some(map) = data.as_object() else {
        bail!("expected a top-level JSON object mapping slugs to ingredients");
    };

    info!("Validating {} ingredients", map.len());
    let errors = validator.validate_ingredient_collection(map);

    let mut cleaned = serde_json::Map::new();
    for (key, ingredient) in map {
        cleaned.insert(key.clone(), cleaner.clean_ingredient(key, ingredient));
    }

    report.print_ingredient_report(&cleaned, &errors);

    Ok((errors, Value::Object(cleaned)))
}

/// Validate and clean a product collection under the "products" root key.
fn process_products(
    data: &Value,
    validator: &FieldValidator,
    cleaner: &FieldCleaner,
    report: &QualityReport,
) -> Result<(Vec<String>, Value)> {
    let Some(products) = data.get("products").and_then(Value::as_array) else {
        bail!("JSON is missing the 'products' root key");
    };

    info!("Validating {} products", products.len());
    let errors = validator.validate_product_collection(products);

    let cleaned_products: Vec<Value> = products.iter().map(|p| cleaner.clean_product(p)).collect();

    report.print_product_report(&cleaned_products, &errors);

    Ok((errors, json!({ "products": cleaned_products })))
}
