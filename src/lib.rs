//! Nutricore - Computation engine for family nutrition tracking
//!
//! Nutricore turns user profiles and logged food entries into daily targets,
//! intake totals, and advice through pure, deterministic functions:
//! profile → targets, entries → daily totals → progress/alerts.
//!
//! ## Modules
//!
//! - **Targets**: Harris-Benedict energy expenditure and macro/micronutrient
//!   targets from a profile
//! - **Intake**: per-day aggregation of logged entries, progress ratios,
//!   per-food contribution breakdowns
//! - **Advice**: deficiency alerts, ranked recommendations, educational tips
//! - **Planning**: weekly shopping lists and meal-plan day totals

pub mod advice;
pub mod error;
pub mod intake;
pub mod pipeline;
pub mod planning;
pub mod report;
pub mod targets;
pub mod types;

pub use advice::{deficiency_alerts, ranked_recommendations, tip_of_day};
pub use error::NutritionError;
pub use intake::{IntakeAggregator, ProgressStatus};
pub use pipeline::{daily_report, daily_report_from_json, targets_from_profile_json};
pub use report::{DailyReport, ReportEncoder};
pub use targets::TargetCalculator;

/// Engine version embedded in every report
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report provenance
pub const PRODUCER_NAME: &str = "nutricore";
