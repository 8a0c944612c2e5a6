use packwise_core::{
    estimate_with_tables, normalize, BriefRenderer, RawProductInput, ReferenceTables,
};
use serde_json::json;

use super::CommandResult;

pub fn run(
    dimensions: &str,
    weight: &str,
    fragility: &str,
    quantity: &str,
    brief: bool,
) -> CommandResult {
    let raw = RawProductInput {
        dimensions: dimensions.to_string(),
        weight: weight.to_string(),
        fragility: fragility.to_string(),
        quantity: quantity.to_string(),
    };

    let product = match normalize(&raw) {
        Ok(product) => product,
        Err(error) => {
            return CommandResult::failure("estimate", "invalid_input", error.to_string(), 2)
        }
    };

    let tables = ReferenceTables::default();
    let packaging = estimate_with_tables(&product, &tables);

    if brief {
        let rendered = BriefRenderer::new()
            .and_then(|renderer| renderer.render(&product, &packaging, &tables));
        return match rendered {
            Ok(text) => CommandResult { exit_code: 0, output: text },
            Err(error) => {
                CommandResult::failure("estimate", "brief_render", error.to_string(), 3)
            }
        };
    }

    CommandResult::success_with_data(
        "estimate",
        "packaging estimate calculated",
        json!({ "normalized": product, "packaging": packaging }),
    )
}
