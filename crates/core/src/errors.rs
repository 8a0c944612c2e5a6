use thiserror::Error;

/// Validation failures raised by the input normalizer.
///
/// The calculator has no error conditions of its own: a `NormalizedProduct`
/// always yields a complete estimate. Normalization is all-or-nothing, so a
/// single variant describes the whole failed request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("expected exactly three dimension values, found {0}")]
    DimensionCount(usize),
    #[error("weight must be a positive number")]
    InvalidWeight,
    #[error("fragility must be an integer from 1 to 5")]
    FragilityOutOfRange,
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
}

#[cfg(test)]
mod tests {
    use super::NormalizeError;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            NormalizeError::MissingField("weight").to_string(),
            "missing required field `weight`"
        );
        assert_eq!(
            NormalizeError::DimensionCount(2).to_string(),
            "expected exactly three dimension values, found 2"
        );
    }
}
