//! Structured error types for heatview.
//!
//! Only view-model construction can fail. Picking never returns an error:
//! a miss is an empty collection or `None`.

/// All errors that can occur while assembling a heatmap view model.
#[derive(Debug, thiserror::Error)]
pub enum HeatviewError {
    /// Viewport dimensions are negative, non-finite, or zero while data is present.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Temporal `min_interval` is not a positive finite number.
    #[error("Invalid temporal interval: {0}")]
    InvalidInterval(f64),

    /// Temporal domain bounds are missing or not numeric.
    #[error("Temporal domain error: {0}")]
    TemporalDomain(String),

    /// Expanding a temporal domain would produce more ticks than allowed.
    #[error("Temporal domain expands to {count} ticks (limit {limit})")]
    TooManyTicks {
        /// Number of ticks the expansion would produce.
        count: usize,
        /// Configured upper bound.
        limit: usize,
    },

    /// Cell size after removing the border gap is negative.
    #[error("Degenerate cell: {0}")]
    DegenerateCell(String),

    /// Merged configuration could not be deserialized.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatviewError>;

impl From<HeatviewError> for wasm_bindgen::JsValue {
    fn from(e: HeatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_ticks_message_names_limit() {
        let err = HeatviewError::TooManyTicks {
            count: 200_001,
            limit: 100_000,
        };
        assert_eq!(
            err.to_string(),
            "Temporal domain expands to 200001 ticks (limit 100000)"
        );
    }
}
