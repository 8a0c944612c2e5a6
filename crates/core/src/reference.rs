//! Static reference data for the packaging calculator: fragility profiles,
//! the material catalog, and the bulk discount schedule.
//!
//! The tables are immutable configuration loaded once at process start. The
//! defaults below are the canonical values; deployments may deserialize a
//! replacement set from TOML, but every set must pass [`ReferenceTables::validate`]
//! before it reaches the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cushioning requirements for one fragility level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FragilityProfile {
    pub level: u8,
    pub label: String,
    /// Inches of cushioning added per side of every axis.
    pub padding_in: f64,
    pub protection: String,
}

/// A box-stock catalog entry. `size_multiplier` scales cost with outer
/// volume, floored so it never reduces cost below `base_cost`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxStock {
    pub name: String,
    /// Display-only strength rating, e.g. "275 lb test Double Wall".
    pub strength: String,
    pub base_cost: f64,
    pub size_multiplier: f64,
}

/// A cushioning catalog entry priced per covered square or cubic foot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CushioningStock {
    pub name: String,
    pub unit_cost: f64,
    pub coverage: f64,
}

/// A flat-cost sealing or finishing entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatStock {
    pub name: String,
    pub unit_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    pub single_wall: BoxStock,
    pub double_wall: BoxStock,
    pub heavy_duty: BoxStock,
    pub bubble_wrap: CushioningStock,
    pub air_cushioning: CushioningStock,
    pub paper_fill: CushioningStock,
    pub corrugated_inserts: CushioningStock,
    pub foam_inserts: CushioningStock,
    pub void_fill: CushioningStock,
    pub packing_tape: FlatStock,
    pub shipping_labels: FlatStock,
}

/// One bulk-pricing tier: orders of at least `min_quantity` units pay
/// `multiplier` times the list unit cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_quantity: u32,
    pub multiplier: f64,
}

/// Quantity-indexed bulk pricing, ordered by ascending threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    pub fn new(tiers: Vec<DiscountTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Effective tier for an order: the highest threshold not exceeding
    /// `quantity`, falling back to the undiscounted 1-unit tier.
    pub fn resolve(&self, quantity: u32) -> DiscountTier {
        self.tiers
            .iter()
            .rev()
            .find(|tier| quantity >= tier.min_quantity)
            .copied()
            .unwrap_or(DiscountTier { min_quantity: 1, multiplier: 1.0 })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReferenceTableError {
    #[error("fragility profiles must cover levels 1 through 5 in order")]
    FragilityLevels,
    #[error("fragility padding must increase strictly with level")]
    PaddingNotIncreasing,
    #[error("discount schedule must contain at least the 1-unit tier")]
    EmptySchedule,
    #[error("discount schedule must open with the 1-unit tier at multiplier 1.0")]
    MissingBaseTier,
    #[error("discount thresholds must increase strictly")]
    ThresholdsNotIncreasing,
    #[error("discount multipliers must decrease strictly and stay within (0, 1]")]
    MultipliersNotDecreasing,
    #[error("material catalog entry `{0}` must have a positive cost")]
    NonPositiveCost(String),
    #[error("cushioning entry `{0}` must have positive coverage")]
    NonPositiveCoverage(String),
}

/// The three reference tables bundled as one injectable structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub fragility: Vec<FragilityProfile>,
    pub materials: MaterialCatalog,
    pub discounts: DiscountSchedule,
}

impl ReferenceTables {
    /// Profile lookup for a validated fragility level. Levels outside 1..=5
    /// cannot be produced by the normalizer; clamping keeps the lookup total.
    pub fn fragility_profile(&self, level: u8) -> &FragilityProfile {
        let index = usize::from(level.clamp(1, 5) - 1);
        &self.fragility[index.min(self.fragility.len() - 1)]
    }

    pub fn validate(&self) -> Result<(), ReferenceTableError> {
        if self.fragility.len() != 5
            || self.fragility.iter().enumerate().any(|(i, p)| usize::from(p.level) != i + 1)
        {
            return Err(ReferenceTableError::FragilityLevels);
        }
        let strictly_increasing =
            self.fragility.windows(2).all(|pair| pair[0].padding_in < pair[1].padding_in);
        if !strictly_increasing || self.fragility[0].padding_in <= 0.0 {
            return Err(ReferenceTableError::PaddingNotIncreasing);
        }

        self.materials.validate()?;

        let tiers = self.discounts.tiers();
        let first = tiers.first().ok_or(ReferenceTableError::EmptySchedule)?;
        if first.min_quantity != 1 || first.multiplier != 1.0 {
            return Err(ReferenceTableError::MissingBaseTier);
        }
        for pair in tiers.windows(2) {
            if pair[1].min_quantity <= pair[0].min_quantity {
                return Err(ReferenceTableError::ThresholdsNotIncreasing);
            }
            if pair[1].multiplier >= pair[0].multiplier || pair[1].multiplier <= 0.0 {
                return Err(ReferenceTableError::MultipliersNotDecreasing);
            }
        }

        Ok(())
    }
}

impl MaterialCatalog {
    fn validate(&self) -> Result<(), ReferenceTableError> {
        let boxes = [&self.single_wall, &self.double_wall, &self.heavy_duty];
        for stock in boxes {
            if stock.base_cost <= 0.0 || stock.size_multiplier <= 0.0 {
                return Err(ReferenceTableError::NonPositiveCost(stock.name.clone()));
            }
        }

        let cushioning = [
            &self.bubble_wrap,
            &self.air_cushioning,
            &self.paper_fill,
            &self.corrugated_inserts,
            &self.foam_inserts,
            &self.void_fill,
        ];
        for stock in cushioning {
            if stock.unit_cost <= 0.0 {
                return Err(ReferenceTableError::NonPositiveCost(stock.name.clone()));
            }
            if stock.coverage <= 0.0 {
                return Err(ReferenceTableError::NonPositiveCoverage(stock.name.clone()));
            }
        }

        for flat in [&self.packing_tape, &self.shipping_labels] {
            if flat.unit_cost <= 0.0 {
                return Err(ReferenceTableError::NonPositiveCost(flat.name.clone()));
            }
        }

        Ok(())
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            fragility: vec![
                profile(1, "Very Low (Books, Clothing, Non-fragile items)", 0.5, "Minimal protection needed"),
                profile(2, "Low (Small electronics, Toys)", 1.0, "Basic protection required"),
                profile(3, "Medium (Glassware, Medium electronics)", 1.8, "Standard cushioning needed"),
                profile(4, "High (Large electronics, Artwork)", 2.5, "Enhanced protection required"),
                profile(5, "Very High (Precision instruments, Antiques)", 3.2, "Maximum protection essential"),
            ],
            materials: MaterialCatalog {
                single_wall: BoxStock {
                    name: "Single Wall Corrugated (200 lb test)".to_string(),
                    strength: "200 lb test Single Wall".to_string(),
                    base_cost: 0.85,
                    size_multiplier: 0.12,
                },
                double_wall: BoxStock {
                    name: "Double Wall Corrugated (275 lb test)".to_string(),
                    strength: "275 lb test Double Wall".to_string(),
                    base_cost: 1.45,
                    size_multiplier: 0.18,
                },
                heavy_duty: BoxStock {
                    name: "Heavy Duty Double Wall (500 lb test)".to_string(),
                    strength: "500 lb test Heavy Duty".to_string(),
                    base_cost: 2.25,
                    size_multiplier: 0.25,
                },
                bubble_wrap: cushioning("Bubble Wrap (3/16\" small bubble)", 0.35, 2.0),
                air_cushioning: cushioning("Air Bubble Cushioning (1/2\" large bubble)", 0.45, 1.8),
                paper_fill: cushioning("Crinkle Paper Fill", 0.15, 3.0),
                corrugated_inserts: cushioning("Corrugated Inserts/Dividers", 0.65, 1.0),
                foam_inserts: cushioning("Custom Foam Inserts", 1.25, 1.0),
                void_fill: cushioning("Biodegradable Void Fill", 0.25, 2.5),
                packing_tape: FlatStock { name: "2\" Packing Tape".to_string(), unit_cost: 0.08 },
                shipping_labels: FlatStock { name: "Shipping Labels".to_string(), unit_cost: 0.05 },
            },
            discounts: DiscountSchedule::new(vec![
                DiscountTier { min_quantity: 1, multiplier: 1.0 },
                DiscountTier { min_quantity: 25, multiplier: 0.95 },
                DiscountTier { min_quantity: 100, multiplier: 0.88 },
                DiscountTier { min_quantity: 250, multiplier: 0.82 },
                DiscountTier { min_quantity: 500, multiplier: 0.76 },
                DiscountTier { min_quantity: 1000, multiplier: 0.70 },
                DiscountTier { min_quantity: 2500, multiplier: 0.65 },
            ]),
        }
    }
}

fn profile(level: u8, label: &str, padding_in: f64, protection: &str) -> FragilityProfile {
    FragilityProfile {
        level,
        label: label.to_string(),
        padding_in,
        protection: protection.to_string(),
    }
}

fn cushioning(name: &str, unit_cost: f64, coverage: f64) -> CushioningStock {
    CushioningStock { name: name.to_string(), unit_cost, coverage }
}

#[cfg(test)]
mod tests {
    use super::{DiscountSchedule, DiscountTier, ReferenceTableError, ReferenceTables};

    #[test]
    fn default_tables_pass_validation() {
        ReferenceTables::default().validate().expect("canonical tables should be valid");
    }

    #[test]
    fn padding_increases_strictly_across_levels() {
        let tables = ReferenceTables::default();
        for levels in tables.fragility.windows(2) {
            assert!(
                levels[0].padding_in < levels[1].padding_in,
                "padding for level {} should exceed level {}",
                levels[1].level,
                levels[0].level
            );
        }
    }

    #[test]
    fn resolve_picks_highest_threshold_not_exceeding_quantity() {
        let schedule = ReferenceTables::default().discounts;

        assert_eq!(schedule.resolve(1).min_quantity, 1);
        assert_eq!(schedule.resolve(24).min_quantity, 1);
        assert_eq!(schedule.resolve(25).min_quantity, 25);
        assert_eq!(schedule.resolve(100).multiplier, 0.88);
        assert_eq!(schedule.resolve(2499).min_quantity, 1000);
        assert_eq!(schedule.resolve(2500).multiplier, 0.65);
        assert_eq!(schedule.resolve(u32::MAX).multiplier, 0.65);
    }

    #[test]
    fn resolve_defaults_to_undiscounted_tier_below_all_thresholds() {
        let schedule = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 50, multiplier: 0.9 },
            DiscountTier { min_quantity: 200, multiplier: 0.8 },
        ]);

        let tier = schedule.resolve(10);
        assert_eq!(tier.min_quantity, 1);
        assert_eq!(tier.multiplier, 1.0);
    }

    #[test]
    fn validation_rejects_non_monotonic_padding() {
        let mut tables = ReferenceTables::default();
        tables.fragility[3].padding_in = 0.4;

        assert_eq!(tables.validate(), Err(ReferenceTableError::PaddingNotIncreasing));
    }

    #[test]
    fn validation_rejects_unordered_thresholds() {
        let mut tables = ReferenceTables::default();
        tables.discounts = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 1, multiplier: 1.0 },
            DiscountTier { min_quantity: 100, multiplier: 0.9 },
            DiscountTier { min_quantity: 100, multiplier: 0.8 },
        ]);

        assert_eq!(tables.validate(), Err(ReferenceTableError::ThresholdsNotIncreasing));
    }

    #[test]
    fn validation_rejects_rising_multipliers() {
        let mut tables = ReferenceTables::default();
        tables.discounts = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 1, multiplier: 1.0 },
            DiscountTier { min_quantity: 100, multiplier: 0.8 },
            DiscountTier { min_quantity: 500, multiplier: 0.85 },
        ]);

        assert_eq!(tables.validate(), Err(ReferenceTableError::MultipliersNotDecreasing));
    }

    #[test]
    fn validation_requires_the_base_tier() {
        let mut tables = ReferenceTables::default();
        tables.discounts =
            DiscountSchedule::new(vec![DiscountTier { min_quantity: 25, multiplier: 0.95 }]);

        assert_eq!(tables.validate(), Err(ReferenceTableError::MissingBaseTier));
    }

    #[test]
    fn tables_round_trip_through_toml() {
        let tables = ReferenceTables::default();
        let rendered = toml::to_string(&tables).expect("tables should serialize");
        let restored: ReferenceTables = toml::from_str(&rendered).expect("tables should parse");

        assert_eq!(restored, tables);
        restored.validate().expect("round-tripped tables should stay valid");
    }
}
