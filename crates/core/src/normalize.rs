//! Input normalizer: turns the four raw user strings into a canonical
//! inches/pounds record, or fails the whole request.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::product::{NormalizedProduct, RawProductInput};
use crate::errors::NormalizeError;

const CM_TO_IN: f64 = 0.393701;
const KG_TO_LB: f64 = 2.20462;
const G_TO_LB: f64 = 0.00220462;
const OZ_TO_LB: f64 = 0.0625;

fn decimal_token() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("decimal token pattern is valid"))
}

fn integer_token() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("integer token pattern is valid"))
}

/// Parse and validate a raw input record.
///
/// Rules are applied independently per field; the first failure aborts the
/// whole operation, so no partial record can escape. Output dimensions and
/// weight are rounded to one decimal place on the way into the record; the
/// calculator operates on those rounded values by contract.
pub fn normalize(raw: &RawProductInput) -> Result<NormalizedProduct, NormalizeError> {
    let (length, width, height) = normalize_dimensions(&raw.dimensions)?;
    let weight = normalize_weight(&raw.weight)?;
    let fragility = normalize_fragility(&raw.fragility)?;
    let quantity = normalize_quantity(&raw.quantity)?;

    Ok(NormalizedProduct { length, width, height, weight, fragility, quantity })
}

fn normalize_dimensions(input: &str) -> Result<(f64, f64, f64), NormalizeError> {
    if input.trim().is_empty() {
        return Err(NormalizeError::MissingField("dimensions"));
    }

    let tokens: Vec<f64> = decimal_token()
        .find_iter(input)
        .filter_map(|token| token.as_str().parse().ok())
        .collect();
    if tokens.len() != 3 {
        return Err(NormalizeError::DimensionCount(tokens.len()));
    }

    // Substring check, not whole-word: "25x12x8 cm" and "25cm x 12cm x 8cm"
    // both convert.
    let factor = if input.to_ascii_lowercase().contains("cm") { CM_TO_IN } else { 1.0 };

    Ok((
        round1(tokens[0] * factor),
        round1(tokens[1] * factor),
        round1(tokens[2] * factor),
    ))
}

fn normalize_weight(input: &str) -> Result<f64, NormalizeError> {
    if input.trim().is_empty() {
        return Err(NormalizeError::MissingField("weight"));
    }

    let parsed: f64 = decimal_token()
        .find(input)
        .and_then(|token| token.as_str().parse().ok())
        .ok_or(NormalizeError::InvalidWeight)?;
    if parsed <= 0.0 {
        return Err(NormalizeError::InvalidWeight);
    }

    // Order-sensitive substring tests: "kg" wins over its "g" suffix, and
    // "oz" only applies when "lbs" is absent.
    let lower = input.to_ascii_lowercase();
    let pounds = if lower.contains("kg") {
        parsed * KG_TO_LB
    } else if lower.contains('g') {
        parsed * G_TO_LB
    } else if lower.contains("oz") && !lower.contains("lbs") {
        parsed * OZ_TO_LB
    } else {
        parsed
    };

    Ok(round1(pounds))
}

fn normalize_fragility(input: &str) -> Result<u8, NormalizeError> {
    if input.trim().is_empty() {
        return Err(NormalizeError::MissingField("fragility"));
    }

    let level: u8 = integer_token()
        .find(input)
        .and_then(|token| token.as_str().parse().ok())
        .ok_or(NormalizeError::FragilityOutOfRange)?;
    if !(1..=5).contains(&level) {
        return Err(NormalizeError::FragilityOutOfRange);
    }

    Ok(level)
}

fn normalize_quantity(input: &str) -> Result<u32, NormalizeError> {
    if input.trim().is_empty() {
        return Err(NormalizeError::MissingField("quantity"));
    }

    let quantity: u32 = integer_token()
        .find(input)
        .and_then(|token| token.as_str().parse().ok())
        .ok_or(NormalizeError::InvalidQuantity)?;
    if quantity == 0 {
        return Err(NormalizeError::InvalidQuantity);
    }

    Ok(quantity)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
