//! Plain-text analysis brief rendered from a finished estimate.
//!
//! The brief is the deterministic hand-off document for downstream prose
//! tooling; it contains only presentation-rounded figures, never the
//! calculator's full-precision internals.

use std::collections::HashMap;

use tera::{Context, Tera};

use crate::domain::packaging::PackagingResult;
use crate::domain::product::NormalizedProduct;
use crate::reference::ReferenceTables;

const BRIEF_TEMPLATE: &str = include_str!("../../../templates/brief.txt");

pub struct BriefRenderer {
    tera: Tera,
}

impl BriefRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.register_filter("money", money_filter);
        tera.add_raw_template("brief.txt", BRIEF_TEMPLATE)?;

        Ok(Self { tera })
    }

    pub fn render(
        &self,
        product: &NormalizedProduct,
        packaging: &PackagingResult,
        tables: &ReferenceTables,
    ) -> Result<String, tera::Error> {
        let profile = tables.fragility_profile(product.fragility);

        let mut context = Context::new();
        context.insert("product", product);
        context.insert("packaging", packaging);
        context.insert("box_size", &packaging.box_size.to_string());
        context.insert("materials_line", &packaging.materials.join(", "));
        context.insert("fragility_label", &profile.label);
        context.insert("protection", &profile.protection);

        self.tera.render("brief.txt", &context)
    }
}

/// Two-decimal money formatting: `amount | money`.
fn money_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let amount = match value {
        tera::Value::Number(number) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(tera::Value::String(format!("{amount:.2}")))
}
