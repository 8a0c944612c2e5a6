use serde::{Deserialize, Serialize};

/// The four free-form strings exactly as a user supplied them.
///
/// No invariants hold here; every field may be empty or malformed. The
/// normalizer is the only consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProductInput {
    pub dimensions: String,
    pub weight: String,
    pub fragility: String,
    pub quantity: String,
}

/// Canonical, unit-consistent product record: inches, pounds, fragility in
/// 1..=5, quantity >= 1.
///
/// Dimensions and weight are stored already rounded to one decimal place.
/// That truncation is part of the contract: the calculator operates on the
/// rounded values, not the raw parsed ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub fragility: u8,
    pub quantity: u32,
}
