//! End-to-end coverage of the normalize -> estimate path.

use packwise_core::{
    estimate_with_tables, normalize, BoxGrade, NormalizeError, RawProductInput, ReferenceTables,
    WeightCategory,
};

fn raw(dimensions: &str, weight: &str, fragility: &str, quantity: &str) -> RawProductInput {
    RawProductInput {
        dimensions: dimensions.to_string(),
        weight: weight.to_string(),
        fragility: fragility.to_string(),
        quantity: quantity.to_string(),
    }
}

#[test]
fn glassware_order_flows_from_raw_strings_to_a_priced_estimate() {
    let tables = ReferenceTables::default();
    let product = normalize(&raw("10x5x3", "5", "3", "100")).expect("valid input");

    assert_eq!(product.length, 10.0);
    assert_eq!(product.weight, 5.0);
    assert_eq!(product.fragility, 3);
    assert_eq!(product.quantity, 100);

    let result = estimate_with_tables(&product, &tables);

    // Fragility 3 pads 1.8" per side: 13.6 x 8.6 x 6.6 outer box.
    assert_eq!(result.box_size.to_string(), "13.6x8.6x6.6");
    assert_eq!(result.padding_per_side, 1.8);
    assert_eq!(result.box_grade, BoxGrade::DoubleWall);
    assert_eq!(result.box_strength, "275 lb test Double Wall");

    assert!(result.materials.iter().any(|m| m.contains("Bubble Wrap")));
    assert!(result.materials.iter().any(|m| m.contains("Void Fill")));
    assert!(!result.materials.iter().any(|m| m.contains("Foam Inserts")));

    assert_eq!(result.discount_percent, 12);
    assert_eq!(result.discount_tier, 100);
    assert_eq!(result.unit_cost, 2.15);
    assert_eq!(result.total_cost, 215.0);

    assert_eq!(result.shipping_weight, 5.3);
    assert_eq!(result.weight_category, WeightCategory::Standard);
    assert_eq!(result.recycled_content, 65);
    assert_eq!(result.sustainability_score, 14);
}

#[test]
fn metric_input_converts_before_the_estimate() {
    let tables = ReferenceTables::default();
    let product = normalize(&raw("25x12x8 cm", "2kg", "2", "25")).expect("valid input");

    assert_eq!((product.length, product.width, product.height), (9.8, 4.7, 3.1));
    assert_eq!(product.weight, 4.4);

    let result = estimate_with_tables(&product, &tables);
    assert_eq!(result.box_grade, BoxGrade::SingleWall);
    assert_eq!(result.discount_percent, 5);
}

#[test]
fn invalid_inputs_never_reach_the_calculator() {
    let cases = [
        (raw("10x5", "5", "3", "100"), NormalizeError::DimensionCount(2)),
        (raw("10x5x3", "abc", "3", "100"), NormalizeError::InvalidWeight),
        (raw("10x5x3", "5", "7", "100"), NormalizeError::FragilityOutOfRange),
        (raw("10x5x3", "5", "3", "0"), NormalizeError::InvalidQuantity),
    ];

    for (input, expected) in cases {
        let error = normalize(&input).expect_err("input should be rejected");
        assert_eq!(error, expected);
    }
}
