//! Test fixture creation for the content directory

use super::constants::*;
use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_collection(root: &Path, dir: &str, file: &str, records: Value) -> Result<()> {
    let dir = root.join(dir);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(file), serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

fn calculator(id: &str, slug: &str, category: &str, locale: &str, title: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "category": category,
        "locale": locale,
        "title": title,
        "description": format!("{} description", title),
        "inputs": [{ "name": "value", "label": "Value" }],
        "outputs": [{ "name": "result", "label": "Result" }]
    })
}

/// Creates a temporary content directory.
///
/// English has every record. Spanish translates two calculators and the
/// percent guide. Russian translates only the percentage calculator, and no
/// standard is translated at all.
pub fn create_test_content() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_collection(
        root,
        "calculators",
        "en.json",
        json!([
            calculator(PERCENT_OF_ID, "percentage-calculator", "percentages", "en", PERCENT_OF_TITLE_EN),
            calculator(PERCENT_CHANGE_ID, "percent-change", "percentages", "en", "Percent Change Calculator"),
            calculator(VAT_ID, "vat-calculator", "finance", "en", "VAT Calculator"),
        ]),
    )?;
    write_collection(
        root,
        "calculators",
        "es.json",
        json!([
            calculator(PERCENT_OF_ID, PERCENT_OF_SLUG_ES, "percentages", "es", PERCENT_OF_TITLE_ES),
            calculator(VAT_ID, "calculadora-iva", "finance", "es", "Calculadora de IVA"),
        ]),
    )?;
    write_collection(
        root,
        "calculators",
        "ru.json",
        json!([calculator(
            PERCENT_OF_ID,
            "procent-ot-chisla",
            "percentages",
            "ru",
            "Калькулятор процентов"
        )]),
    )?;

    write_collection(
        root,
        "articles",
        "en.json",
        json!([
            {
                "id": PERCENT_GUIDE_ID,
                "slug": PERCENT_GUIDE_SLUG_EN,
                "locale": "en",
                "title": "How percentages work",
                "description": "Percent of a number and percent change",
                "related_calculators": [PERCENT_OF_ID, MISSING_CALCULATOR_ID],
                "related_standards": [ISO_80000_ID],
                "published": PERCENT_GUIDE_PUBLISHED
            },
            {
                "id": VAT_EXPLAINED_ID,
                "slug": "vat-explained",
                "locale": "en",
                "title": "VAT explained",
                "description": "Net & gross prices",
                "related_calculators": [VAT_ID]
            }
        ]),
    )?;
    write_collection(
        root,
        "articles",
        "es.json",
        json!([{
            "id": PERCENT_GUIDE_ID,
            "slug": "como-funcionan-los-porcentajes",
            "locale": "es",
            "title": "Cómo funcionan los porcentajes",
            "description": "Porcentaje de un número",
            "related_calculators": [PERCENT_OF_ID]
        }]),
    )?;

    write_collection(
        root,
        "standards",
        "en.json",
        json!([
            {
                "id": ISO_80000_ID,
                "slug": "iso-80000-1",
                "country": "INT",
                "locale": "en",
                "title": "ISO 80000-1 Quantities and units",
                "description": "Writing numbers and the percent sign",
                "related_calculators": [PERCENT_OF_ID]
            },
            {
                "id": DIN_1333_ID,
                "slug": "din-1333",
                "country": "de",
                "locale": "en",
                "title": "DIN 1333 Number presentation",
                "description": "Rounding of numbers",
                "related_calculators": [VAT_ID]
            }
        ]),
    )?;

    Ok(dir)
}
