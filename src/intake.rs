//! Intake aggregation
//!
//! This module reduces dated, quantified food records into per-day nutrient
//! totals and compares totals against targets:
//! - Summation of snapshot vectors scaled by quantity
//! - Calendar-day and meal-slot filtering
//! - Progress ratios and the uniform three-way status band
//! - Per-food contribution breakdowns for a single nutrient

use crate::targets::TargetCalculator;
use crate::types::{
    DailyIntake, FoodEntry, MealSlot, Nutrient, NutrientData, PlannedFood, UserProfile,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Below this percentage of target a nutrient displays as deficient
pub const DEFICIENT_BELOW_PCT: f64 = 80.0;

/// Above this percentage of target a nutrient displays as excessive
pub const EXCESSIVE_ABOVE_PCT: f64 = 110.0;

/// Anything with a gram quantity and a per-100 g nutrient vector.
///
/// Logged entries and planned foods both aggregate the same way; the snapshot
/// vector travels with the record, never with the catalogue food.
pub trait Portion {
    fn food_name(&self) -> &str;
    /// Quantity in grams
    fn quantity_g(&self) -> f64;
    /// Nutrients per 100 g, captured when the record was created
    fn nutrients_per_100g(&self) -> &NutrientData;
}

impl Portion for FoodEntry {
    fn food_name(&self) -> &str {
        &self.food_name
    }

    fn quantity_g(&self) -> f64 {
        self.quantity
    }

    fn nutrients_per_100g(&self) -> &NutrientData {
        &self.nutritional_values
    }
}

impl Portion for PlannedFood {
    fn food_name(&self) -> &str {
        &self.food_name
    }

    fn quantity_g(&self) -> f64 {
        self.quantity
    }

    fn nutrients_per_100g(&self) -> &NutrientData {
        &self.nutritional_values
    }
}

/// Display status of a nutrient against its target.
///
/// One uniform band for every progress consumer: below 80% deficient, above
/// 110% excessive, optimal in between. The deficiency-alert thresholds in
/// [`crate::advice`] are a separate, stricter policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Deficient,
    Optimal,
    Excessive,
}

impl ProgressStatus {
    /// Classify a progress percentage
    pub fn from_ratio(ratio_pct: f64) -> Self {
        if ratio_pct < DEFICIENT_BELOW_PCT {
            ProgressStatus::Deficient
        } else if ratio_pct > EXCESSIVE_ABOVE_PCT {
            ProgressStatus::Excessive
        } else {
            ProgressStatus::Optimal
        }
    }
}

/// One food's share of a single nutrient's daily total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodContribution {
    pub food_name: String,
    /// Grams consumed
    pub quantity: f64,
    /// Absolute amount contributed, in the nutrient's unit
    pub contribution: f64,
    /// Share of the day's total for this nutrient (0-100)
    pub percentage_of_total: f64,
}

/// Intake aggregator reducing entry collections to totals and breakdowns
pub struct IntakeAggregator;

impl IntakeAggregator {
    /// Sum portion vectors into an absolute total.
    ///
    /// Each portion's per-100 g vector is scaled by quantity/100 and
    /// accumulated over every nutrient key. The result carries every key,
    /// zero where nothing contributed. Order-independent up to float
    /// rounding; no portion is skipped.
    pub fn sum_nutrients<P: Portion>(portions: &[P]) -> NutrientData {
        let mut total = NutrientData::zeroed();

        for portion in portions {
            let factor = portion.quantity_g() / 100.0;
            let per100 = portion.nutrients_per_100g();
            for nutrient in Nutrient::ALL {
                let sum = total.amount(nutrient) + per100.amount(nutrient) * factor;
                total.set(nutrient, sum);
            }
        }

        total
    }

    /// Entries whose calendar day equals `date`.
    ///
    /// Calendar-day boundary, not a rolling 24 h window: entries at 23:59 and
    /// 00:01 on consecutive days land in different totals.
    pub fn filter_by_date(entries: &[FoodEntry], date: NaiveDate) -> Vec<FoodEntry> {
        entries
            .iter()
            .filter(|entry| entry.date.date_naive() == date)
            .cloned()
            .collect()
    }

    /// Entries for one meal slot
    pub fn filter_by_meal(entries: &[FoodEntry], slot: MealSlot) -> Vec<FoodEntry> {
        entries
            .iter()
            .filter(|entry| entry.meal_slot == slot)
            .cloned()
            .collect()
    }

    /// Progress toward a target as a percentage; a zero target reads 0.
    ///
    /// Not capped: the display layer clips bars at 100% and uses
    /// [`ProgressStatus`] for the over/under flags.
    pub fn progress_ratio(current: f64, target: f64) -> f64 {
        if target == 0.0 {
            return 0.0;
        }
        (current / target) * 100.0
    }

    /// Per-food contributions to one nutrient's total, largest first.
    ///
    /// Zero contributions are dropped. The sort is stable, so equal
    /// contributions keep their original entry order. Percentages are shares
    /// of the aggregate total from [`Self::sum_nutrients`], 0 when the total
    /// is 0.
    pub fn contributions_by_food<P: Portion>(
        portions: &[P],
        nutrient: Nutrient,
    ) -> Vec<FoodContribution> {
        let total = Self::sum_nutrients(portions).amount(nutrient);

        let mut contributions: Vec<FoodContribution> = portions
            .iter()
            .map(|portion| {
                let factor = portion.quantity_g() / 100.0;
                let contribution = portion.nutrients_per_100g().amount(nutrient) * factor;
                FoodContribution {
                    food_name: portion.food_name().to_string(),
                    quantity: portion.quantity_g(),
                    contribution,
                    percentage_of_total: if total > 0.0 {
                        (contribution / total) * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .filter(|c| c.contribution > 0.0)
            .collect();

        contributions.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        contributions
    }

    /// Build one day's aggregate for a profile: its entries on `date`, their
    /// summed totals, and the profile's targets
    pub fn daily_intake(
        profile: &UserProfile,
        entries: &[FoodEntry],
        date: NaiveDate,
    ) -> DailyIntake {
        let own_entries: Vec<FoodEntry> = entries
            .iter()
            .filter(|entry| entry.profile_id == profile.id)
            .cloned()
            .collect();
        let day_entries = Self::filter_by_date(&own_entries, date);
        let total_nutrients = Self::sum_nutrients(&day_entries);
        let targets = TargetCalculator::nutrient_targets(profile);

        DailyIntake {
            date,
            profile_id: profile.id.clone(),
            total_nutrients,
            entries: day_entries,
            targets,
        }
    }
}
