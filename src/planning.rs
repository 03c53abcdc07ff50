//! Weekly planning helpers
//!
//! This module turns entry and meal-plan collections into week-level views:
//! - Shopping lists merged across every family member's week
//! - Day and slot totals for planned meals

use crate::intake::IntakeAggregator;
use crate::types::{FoodEntry, MealPlan, MealSlot, NutrientData, PlannedFood, ShoppingItem};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// The Sunday on or before `date`, the start of its planning week
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday();
    date - Days::new(u64::from(days_from_sunday))
}

/// Shopping list for the week starting at `week_start`.
///
/// Merges every entry in the inclusive window `[week_start, week_start + 7]`
/// across all profiles, summing quantities per food, and sorts by food name
/// (case-insensitive). Quantities stay in grams.
pub fn shopping_list(entries: &[FoodEntry], week_start: NaiveDate) -> Vec<ShoppingItem> {
    let week_end = week_start + Days::new(7);
    let mut items: BTreeMap<String, ShoppingItem> = BTreeMap::new();

    for entry in entries {
        let day = entry.date.date_naive();
        if day < week_start || day > week_end {
            continue;
        }

        items
            .entry(entry.food_id.clone())
            .and_modify(|item| item.total_quantity += entry.quantity)
            .or_insert_with(|| ShoppingItem {
                food_id: entry.food_id.clone(),
                food_name: entry.food_name.clone(),
                total_quantity: entry.quantity,
                unit: "g".to_string(),
                category: None,
            });
    }

    let mut list: Vec<ShoppingItem> = items.into_values().collect();
    list.sort_by(|a, b| {
        a.food_name
            .to_lowercase()
            .cmp(&b.food_name.to_lowercase())
            .then_with(|| a.food_name.cmp(&b.food_name))
    });
    list
}

/// Total planned nutrients for a calendar day, optionally narrowed to one
/// meal slot. Planned foods aggregate exactly like logged entries.
pub fn planned_nutrients(
    plans: &[MealPlan],
    date: NaiveDate,
    slot: Option<MealSlot>,
) -> NutrientData {
    let foods: Vec<PlannedFood> = plans
        .iter()
        .filter(|plan| plan.date.date_naive() == date)
        .filter(|plan| slot.map_or(true, |s| plan.meal_slot == s))
        .flat_map(|plan| plan.foods.iter().cloned())
        .collect();

    IntakeAggregator::sum_nutrients(&foods)
}
