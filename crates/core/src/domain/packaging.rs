use std::fmt;

use serde::{Deserialize, Serialize};

/// Outer box dimensions in inches, rounded to one decimal place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for BoxDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x{:.1}x{:.1}", self.length, self.width, self.height)
    }
}

/// Box-stock class selected by the weight/fragility decision chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxGrade {
    SingleWall,
    DoubleWall,
    HeavyDuty,
}

/// Shipping weight class. Boundaries are inclusive on the lower category:
/// exactly 10.0 lbs is still a standard package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightCategory {
    #[serde(rename = "Light Package")]
    Light,
    #[serde(rename = "Standard Package")]
    Standard,
    #[serde(rename = "Heavy Package")]
    Heavy,
    #[serde(rename = "Freight Package")]
    Freight,
}

impl WeightCategory {
    pub fn for_weight(shipping_weight_lb: f64) -> Self {
        if shipping_weight_lb <= 1.0 {
            Self::Light
        } else if shipping_weight_lb <= 10.0 {
            Self::Standard
        } else if shipping_weight_lb <= 50.0 {
            Self::Heavy
        } else {
            Self::Freight
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Package",
            Self::Standard => "Standard Package",
            Self::Heavy => "Heavy Package",
            Self::Freight => "Freight Package",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete packaging estimate for one product and order quantity.
///
/// This struct is the presentation boundary: monetary fields are rounded to
/// two decimal places and the remaining floats to one, while the calculator
/// keeps full precision internally. Wire names stay camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingResult {
    pub box_size: BoxDimensions,
    pub box_grade: BoxGrade,
    pub box_type: String,
    pub box_strength: String,
    pub materials: Vec<String>,
    pub padding_per_side: f64,
    pub box_unit_cost: f64,
    pub padding_unit_cost: f64,
    pub unit_cost_before_discount: f64,
    pub discount_percent: u32,
    pub discount_tier: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub volume: f64,
    pub surface_area: f64,
    pub shipping_weight: f64,
    pub weight_category: WeightCategory,
    pub recycled_content: u8,
    pub sustainability_score: i32,
}
