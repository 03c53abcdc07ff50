//! Error types for nutricore
//!
//! The computation core is total and never errors; these variants cover the
//! decode boundary used by the JSON conveniences and the CLI.

use thiserror::Error;

/// Errors that can occur while decoding inputs
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("Unknown objective: {0}")]
    UnknownObjective(String),

    #[error("Unknown meal slot: {0}")]
    UnknownMealSlot(String),
}
