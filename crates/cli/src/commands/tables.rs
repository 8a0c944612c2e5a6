use packwise_core::ReferenceTables;

use super::CommandResult;

pub fn run() -> CommandResult {
    let tables = ReferenceTables::default();
    if let Err(error) = tables.validate() {
        return CommandResult::failure("tables", "reference_validation", error.to_string(), 2);
    }

    match serde_json::to_value(&tables) {
        Ok(data) => CommandResult::success_with_data("tables", "effective reference tables", data),
        Err(error) => CommandResult::failure("tables", "serialization", error.to_string(), 3),
    }
}
