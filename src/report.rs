//! Daily report encoding
//!
//! This module encodes a day's aggregate into a serializable report: one
//! progress row per nutrient plus the active alerts, with producer metadata
//! for provenance. This is the JSON surface consumed by the CLI and by UI
//! layers.

use crate::advice::{deficiency_alerts, Alert};
use crate::error::NutritionError;
use crate::intake::{IntakeAggregator, ProgressStatus};
use crate::types::{DailyIntake, Nutrient};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report producer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// One nutrient's progress row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProgress {
    pub nutrient: Nutrient,
    pub label: String,
    pub unit: String,
    /// Absolute amount consumed
    pub current: f64,
    /// Absolute daily target
    pub target: f64,
    /// current/target as a percentage, uncapped
    pub ratio_pct: f64,
    pub status: ProgressStatus,
}

/// A complete daily report for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub date: String,
    #[serde(rename = "userId")]
    pub profile_id: String,
    pub computed_at_utc: String,
    pub nutrients: Vec<NutrientProgress>,
    pub alerts: Vec<Alert>,
}

/// Report encoder producing the daily JSON surface
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Encode a daily aggregate into a report
    pub fn encode(&self, intake: &DailyIntake) -> DailyReport {
        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let nutrients = Nutrient::ALL
            .iter()
            .map(|&nutrient| {
                let current = intake.total_nutrients.amount(nutrient);
                let target = intake.targets.amount(nutrient);
                let ratio_pct = IntakeAggregator::progress_ratio(current, target);
                NutrientProgress {
                    nutrient,
                    label: nutrient.label().to_string(),
                    unit: nutrient.unit().to_string(),
                    current,
                    target,
                    ratio_pct,
                    status: ProgressStatus::from_ratio(ratio_pct),
                }
            })
            .collect();

        let alerts = deficiency_alerts(&intake.total_nutrients, &intake.targets);

        DailyReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            date: intake.date.to_string(),
            profile_id: intake.profile_id.clone(),
            computed_at_utc: Utc::now().to_rfc3339(),
            nutrients,
            alerts,
        }
    }

    /// Encode to a pretty JSON string
    pub fn encode_to_json(&self, intake: &DailyIntake) -> Result<String, NutritionError> {
        let report = self.encode(intake);
        serde_json::to_string_pretty(&report).map_err(NutritionError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ActivityLevel, FoodEntry, Gender, MealSlot, NutrientData, Objective, UserProfile, WeekMode,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_intake() -> DailyIntake {
        let profile = UserProfile {
            id: "profile-1".to_string(),
            first_name: "Claire".to_string(),
            gender: Gender::Female,
            age: 30,
            height: 165.0,
            weight: 60.0,
            activity_level: ActivityLevel::Moderate,
            objective: Objective::Maintain,
            custom_calorie_delta: None,
            week_mode: WeekMode::Normal,
        };
        let entry = FoodEntry {
            id: "entry-1".to_string(),
            food_id: "food-rice".to_string(),
            food_name: "Rice".to_string(),
            quantity: 150.0,
            meal_slot: MealSlot::Lunch,
            nutritional_values: NutrientData {
                kcal: 130.0,
                proteins: 2.7,
                carbohydrates: 28.0,
                lipids: 0.3,
                fibers: 0.4,
                ..Default::default()
            },
            date: Utc.with_ymd_and_hms(2024, 3, 2, 12, 30, 0).unwrap(),
            profile_id: "profile-1".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        IntakeAggregator::daily_intake(&profile, &[entry], date)
    }

    #[test]
    fn test_report_has_one_row_per_nutrient() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let report = encoder.encode(&make_intake());

        assert_eq!(report.nutrients.len(), Nutrient::ALL.len());
        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.producer.name, PRODUCER_NAME);
        assert_eq!(report.producer.instance_id, "test-instance");
        assert_eq!(report.date, "2024-03-02");
    }

    #[test]
    fn test_report_rows_carry_ratio_and_status() {
        let encoder = ReportEncoder::new();
        let report = encoder.encode(&make_intake());

        let energy = report
            .nutrients
            .iter()
            .find(|row| row.nutrient == Nutrient::Energy)
            .unwrap();

        // 195 kcal of a ~2352 kcal target
        assert!((energy.current - 195.0).abs() < 1e-9);
        assert!(energy.target > 2000.0);
        assert!(energy.ratio_pct < 80.0);
        assert_eq!(energy.status, ProgressStatus::Deficient);
        assert_eq!(energy.unit, "kcal");
    }

    #[test]
    fn test_report_includes_alerts_for_sparse_day() {
        let encoder = ReportEncoder::new();
        let report = encoder.encode(&make_intake());

        // A lone portion of rice trips protein, iron, and calcium alerts
        assert_eq!(report.alerts.len(), 3);
    }

    #[test]
    fn test_report_json_shape() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let json = encoder.encode_to_json(&make_intake()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["reportVersion"], "1.0.0");
        assert_eq!(value["userId"], "profile-1");
        assert_eq!(value["nutrients"][0]["nutrient"], "energy");
        assert!(value["nutrients"][0]["ratioPct"].is_f64());
        assert_eq!(value["alerts"][0]["kind"], "deficiency");
    }
}
