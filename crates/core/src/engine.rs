//! Packaging calculator: a pure function of a validated product record and
//! the immutable reference tables.

use crate::domain::packaging::{BoxDimensions, BoxGrade, PackagingResult, WeightCategory};
use crate::domain::product::NormalizedProduct;
use crate::reference::ReferenceTables;

const SQ_IN_PER_SQ_FT: f64 = 144.0;
const CU_IN_PER_CU_FT: f64 = 1728.0;

pub trait PackagingEngine: Send + Sync {
    fn estimate(&self, product: &NormalizedProduct) -> PackagingResult;
}

/// The production engine: deterministic math over an injected table set.
#[derive(Clone, Debug, Default)]
pub struct DeterministicPackagingEngine {
    tables: ReferenceTables,
}

impl DeterministicPackagingEngine {
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }
}

impl PackagingEngine for DeterministicPackagingEngine {
    fn estimate(&self, product: &NormalizedProduct) -> PackagingResult {
        estimate_with_tables(product, &self.tables)
    }
}

/// Derive the full packaging specification and cost breakdown.
///
/// Total over validated input: every `NormalizedProduct` yields a complete
/// result. Internal math runs at full precision; rounding happens only while
/// assembling the returned record.
pub fn estimate_with_tables(
    product: &NormalizedProduct,
    tables: &ReferenceTables,
) -> PackagingResult {
    let profile = tables.fragility_profile(product.fragility);
    let padding = profile.padding_in;

    // Padding is applied symmetrically on every side of every axis.
    let outer_length = product.length + padding * 2.0;
    let outer_width = product.width + padding * 2.0;
    let outer_height = product.height + padding * 2.0;

    let volume = outer_length * outer_width * outer_height;
    let surface_area = 2.0
        * (outer_length * outer_width
            + outer_width * outer_height
            + outer_height * outer_length);

    // Ordered decision chain, first match wins: a light but fragile product
    // still escalates past single wall.
    let catalog = &tables.materials;
    let (stock, grade) = if product.weight <= 10.0 && product.fragility <= 2 {
        (&catalog.single_wall, BoxGrade::SingleWall)
    } else if product.weight <= 40.0 && product.fragility <= 4 {
        (&catalog.double_wall, BoxGrade::DoubleWall)
    } else {
        (&catalog.heavy_duty, BoxGrade::HeavyDuty)
    };

    // Volume scaling never drops below the base cost.
    let box_cost = stock.base_cost + stock.size_multiplier * (volume / 1000.0).max(1.0);

    // Cushioning thresholds are cumulative: higher fragility adds materials
    // on top of the lower tiers.
    let mut materials = vec![stock.name.clone()];
    let mut padding_cost = 0.0;

    if product.fragility >= 2 {
        materials.push(catalog.bubble_wrap.name.clone());
        padding_cost += catalog.bubble_wrap.unit_cost * (surface_area / SQ_IN_PER_SQ_FT)
            / catalog.bubble_wrap.coverage;
    }
    if product.fragility >= 3 {
        materials.push(catalog.void_fill.name.clone());
        padding_cost +=
            catalog.void_fill.unit_cost * (volume / CU_IN_PER_CU_FT) / catalog.void_fill.coverage;
    }
    if product.fragility >= 4 {
        materials.push(catalog.corrugated_inserts.name.clone());
        padding_cost += catalog.corrugated_inserts.unit_cost;
    }
    // Exact match, not >=: historical behavior kept as-is. With the scale
    // closed at 5 the two readings coincide in practice.
    if product.fragility == 5 {
        materials.push(catalog.foam_inserts.name.clone());
        padding_cost += catalog.foam_inserts.unit_cost;
    }

    let tape_cost = catalog.packing_tape.unit_cost;
    let label_cost = catalog.shipping_labels.unit_cost;
    materials.push(catalog.packing_tape.name.clone());
    materials.push(catalog.shipping_labels.name.clone());

    let unit_cost_before_discount = box_cost + padding_cost + tape_cost + label_cost;

    let tier = tables.discounts.resolve(product.quantity);
    let discount_percent = ((1.0 - tier.multiplier) * 100.0).round() as u32;

    // The displayed unit price is rounded first and the order total is
    // derived from it, so the two figures always agree.
    let unit_cost = round2(unit_cost_before_discount * tier.multiplier);
    let total_cost = round2(unit_cost * f64::from(product.quantity));

    // Crude proxy, not a physical model: the weight-category thresholds are
    // calibrated against these exact coefficients.
    let packaging_weight = (volume / CU_IN_PER_CU_FT) * 0.5 + padding_cost * 0.1;
    let shipping_weight = product.weight + packaging_weight;
    let weight_category = WeightCategory::for_weight(shipping_weight);

    let recycled_content: u8 = if product.fragility <= 2 {
        70
    } else if product.fragility <= 4 {
        65
    } else {
        60
    };
    // Unclamped on purpose; the score can leave the conventional 0-10 band.
    let sustainability_score = (f64::from(recycled_content) / 10.0
        + (10.0 - f64::from(product.fragility)))
    .round() as i32;

    PackagingResult {
        box_size: BoxDimensions {
            length: round1(outer_length),
            width: round1(outer_width),
            height: round1(outer_height),
        },
        box_grade: grade,
        box_type: stock.name.clone(),
        box_strength: stock.strength.clone(),
        materials,
        padding_per_side: round1(padding),
        box_unit_cost: round2(box_cost),
        padding_unit_cost: round2(padding_cost),
        unit_cost_before_discount: round2(unit_cost_before_discount),
        discount_percent,
        discount_tier: tier.min_quantity,
        unit_cost,
        total_cost,
        volume: round1(volume),
        surface_area: round1(surface_area),
        shipping_weight: round1(shipping_weight),
        weight_category,
        recycled_content,
        sustainability_score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{estimate_with_tables, DeterministicPackagingEngine, PackagingEngine};
    use crate::domain::packaging::{BoxGrade, WeightCategory};
    use crate::domain::product::NormalizedProduct;
    use crate::reference::ReferenceTables;

    fn product(weight: f64, fragility: u8, quantity: u32) -> NormalizedProduct {
        NormalizedProduct { length: 10.0, width: 5.0, height: 3.0, weight, fragility, quantity }
    }

    #[test]
    fn outer_dimensions_exceed_inner_by_twice_the_padding() {
        let tables = ReferenceTables::default();

        for profile in &tables.fragility {
            let result = estimate_with_tables(&product(5.0, profile.level, 1), &tables);
            let expected = profile.padding_in * 2.0;

            assert_eq!(result.box_size.length, 10.0 + expected);
            assert_eq!(result.box_size.width, 5.0 + expected);
            assert_eq!(result.box_size.height, 3.0 + expected);
        }
    }

    #[test]
    fn light_sturdy_products_get_single_wall() {
        let tables = ReferenceTables::default();
        let result = estimate_with_tables(&product(5.0, 1, 1), &tables);

        assert_eq!(result.box_grade, BoxGrade::SingleWall);
        assert_eq!(result.box_strength, "200 lb test Single Wall");
    }

    #[test]
    fn fragility_alone_escalates_past_single_wall() {
        let tables = ReferenceTables::default();
        let result = estimate_with_tables(&product(5.0, 3, 1), &tables);

        assert_eq!(result.box_grade, BoxGrade::DoubleWall);
    }

    #[test]
    fn weight_alone_escalates_to_heavy_duty() {
        let tables = ReferenceTables::default();
        let result = estimate_with_tables(&product(50.0, 1, 1), &tables);

        assert_eq!(result.box_grade, BoxGrade::HeavyDuty);
    }

    #[test]
    fn cushioning_accumulates_with_fragility() {
        let tables = ReferenceTables::default();

        let level1 = estimate_with_tables(&product(5.0, 1, 1), &tables);
        assert!(!level1.materials.iter().any(|m| m.contains("Bubble Wrap")));

        let level2 = estimate_with_tables(&product(5.0, 2, 1), &tables);
        assert!(level2.materials.iter().any(|m| m.contains("Bubble Wrap")));
        assert!(!level2.materials.iter().any(|m| m.contains("Void Fill")));

        let level3 = estimate_with_tables(&product(5.0, 3, 1), &tables);
        assert!(level3.materials.iter().any(|m| m.contains("Bubble Wrap")));
        assert!(level3.materials.iter().any(|m| m.contains("Void Fill")));

        let level4 = estimate_with_tables(&product(5.0, 4, 1), &tables);
        assert!(level4.materials.iter().any(|m| m.contains("Corrugated Inserts")));
        assert!(!level4.materials.iter().any(|m| m.contains("Foam Inserts")));
    }

    // Pins the historical exact-match condition: foam inserts appear at
    // level 5 and only at level 5, even though every other tier uses >=.
    #[test]
    fn foam_inserts_require_exact_level_five() {
        let tables = ReferenceTables::default();

        let level4 = estimate_with_tables(&product(5.0, 4, 1), &tables);
        assert!(!level4.materials.iter().any(|m| m.contains("Foam Inserts")));

        let level5 = estimate_with_tables(&product(5.0, 5, 1), &tables);
        assert!(level5.materials.iter().any(|m| m.contains("Foam Inserts")));
        assert!(level5.materials.iter().any(|m| m.contains("Corrugated Inserts")));
    }

    #[test]
    fn discount_tiers_resolve_by_largest_threshold_not_exceeding_quantity() {
        let tables = ReferenceTables::default();

        assert_eq!(estimate_with_tables(&product(5.0, 3, 1), &tables).discount_percent, 0);
        assert_eq!(estimate_with_tables(&product(5.0, 3, 100), &tables).discount_percent, 12);
        assert_eq!(estimate_with_tables(&product(5.0, 3, 2500), &tables).discount_percent, 35);

        let below = estimate_with_tables(&product(5.0, 3, 2499), &tables);
        assert_eq!(below.discount_percent, 30);
        assert_eq!(below.discount_tier, 1000);
    }

    #[test]
    fn total_cost_is_consistent_with_the_displayed_unit_price() {
        let tables = ReferenceTables::default();
        let result = estimate_with_tables(&product(5.0, 3, 100), &tables);

        assert_eq!(result.unit_cost, 2.15);
        assert_eq!(result.total_cost, 215.0);
        assert_eq!(result.unit_cost_before_discount, 2.45);
        assert_eq!(result.box_unit_cost, 1.63);
        assert_eq!(result.padding_unit_cost, 0.69);
    }

    #[test]
    fn box_cost_volume_scaling_never_drops_below_base() {
        let tables = ReferenceTables::default();
        let tiny = NormalizedProduct {
            length: 1.0,
            width: 1.0,
            height: 1.0,
            weight: 1.0,
            fragility: 1,
            quantity: 1,
        };

        let result = estimate_with_tables(&tiny, &tables);
        let floor =
            tables.materials.single_wall.base_cost + tables.materials.single_wall.size_multiplier;
        assert_eq!(result.box_unit_cost, (floor * 100.0).round() / 100.0);
    }

    #[test]
    fn shipping_weight_uses_the_crude_packaging_proxy() {
        let tables = ReferenceTables::default();
        let result = estimate_with_tables(&product(5.0, 3, 100), &tables);

        // 13.6 x 8.6 x 6.6 outer box: volume 771.936, padding cost 0.685...
        assert_eq!(result.shipping_weight, 5.3);
        assert_eq!(result.weight_category, WeightCategory::Standard);
        assert_eq!(result.volume, 771.9);
        assert_eq!(result.surface_area, 527.0);
    }

    #[test]
    fn sustainability_score_is_a_step_function_and_unclamped() {
        let tables = ReferenceTables::default();

        let level1 = estimate_with_tables(&product(5.0, 1, 1), &tables);
        assert_eq!(level1.recycled_content, 70);
        assert_eq!(level1.sustainability_score, 16);

        let level3 = estimate_with_tables(&product(5.0, 3, 1), &tables);
        assert_eq!(level3.recycled_content, 65);
        assert_eq!(level3.sustainability_score, 14);

        let level5 = estimate_with_tables(&product(5.0, 5, 1), &tables);
        assert_eq!(level5.recycled_content, 60);
        assert_eq!(level5.sustainability_score, 11);
    }

    #[test]
    fn estimate_is_deterministic_for_identical_input() {
        let engine = DeterministicPackagingEngine::new(ReferenceTables::default());
        let input = product(5.0, 3, 100);

        let first = engine.estimate(&input);
        let second = engine.estimate(&input);
        assert_eq!(first, second);
    }
}
