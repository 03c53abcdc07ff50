//! Core types for the nutricore engine
//!
//! This module defines the data model shared by every stage of the engine:
//! profiles, foods, logged entries, meal plans, computed targets, and the
//! nutrient vector they all exchange.

use crate::error::NutritionError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex, as used by the energy-expenditure formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Weekly training mode; rest weeks lower the effective activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekMode {
    Normal,
    Rest,
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl FromStr for MealSlot {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "snack" => Ok(MealSlot::Snack),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(NutritionError::UnknownMealSlot(other.to_string())),
        }
    }
}

/// Physical activity level, ordered from least to most active.
///
/// The PAL multipliers follow the standard bands: sedentary (< 1.40),
/// lightly active (1.40-1.69), active (1.70-1.99), very active (2.00-2.40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    /// All levels, in ascending order. Ordering matters: rest mode steps one
    /// level down this list.
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    /// Physical activity level multiplier applied to resting metabolic rate
    pub fn pal(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.3,
            ActivityLevel::Light => 1.5,
            ActivityLevel::Moderate => 1.7,
            ActivityLevel::Active => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (< 1.40)",
            ActivityLevel::Light => "Lightly active (1.40 - 1.69)",
            ActivityLevel::Moderate => "Active (1.70 - 1.99)",
            ActivityLevel::Active => "Very active (2.00 - 2.40)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Desk work, minimal movement, little or no sport",
            ActivityLevel::Light => "Daily walking, no regular sport",
            ActivityLevel::Moderate => "Moderate to intense activity (3-5 sessions/week)",
            ActivityLevel::Active => "Frequent training or physically demanding work",
        }
    }

    /// The level immediately below this one; sedentary is the floor
    pub fn step_down(&self) -> ActivityLevel {
        match self {
            ActivityLevel::Sedentary => ActivityLevel::Sedentary,
            ActivityLevel::Light => ActivityLevel::Sedentary,
            ActivityLevel::Moderate => ActivityLevel::Light,
            ActivityLevel::Active => ActivityLevel::Moderate,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            other => Err(NutritionError::UnknownActivityLevel(other.to_string())),
        }
    }
}

/// Dietary objective driving calorie and macro adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Loss,
    Maintain,
    Gain,
}

impl Objective {
    /// Default daily calorie delta (kcal) applied when the profile carries no
    /// custom delta
    pub fn default_calorie_delta(&self) -> f64 {
        match self {
            Objective::Loss => -300.0,
            Objective::Maintain => 0.0,
            Objective::Gain => 200.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Loss => "loss",
            Objective::Maintain => "maintain",
            Objective::Gain => "gain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Objective::Loss => "Customizable calorie deficit",
            Objective::Maintain => "Maintain current weight",
            Objective::Gain => "Customizable calorie surplus",
        }
    }
}

impl FromStr for Objective {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loss" => Ok(Objective::Loss),
            "maintain" => Ok(Objective::Maintain),
            "gain" => Ok(Objective::Gain),
            other => Err(NutritionError::UnknownObjective(other.to_string())),
        }
    }
}

/// Every nutrient key trackable in an intake record.
///
/// Used for exhaustive iteration when summing intake vectors and when building
/// progress reports; matching on this enum keeps the key set closed at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Energy,
    Proteins,
    Carbohydrates,
    Lipids,
    Fibers,
    Calcium,
    Iron,
    Magnesium,
    Potassium,
    Sodium,
    Phosphorus,
    Zinc,
    Selenium,
    Iodine,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB6,
    VitaminB9,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
}

impl Nutrient {
    pub const ALL: [Nutrient; 23] = [
        Nutrient::Energy,
        Nutrient::Proteins,
        Nutrient::Carbohydrates,
        Nutrient::Lipids,
        Nutrient::Fibers,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Potassium,
        Nutrient::Sodium,
        Nutrient::Phosphorus,
        Nutrient::Zinc,
        Nutrient::Selenium,
        Nutrient::Iodine,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB6,
        Nutrient::VitaminB9,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
    ];

    /// Wire key, matching the stored food document fields
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Proteins => "proteins",
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Lipids => "lipids",
            Nutrient::Fibers => "fibers",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Potassium => "potassium",
            Nutrient::Sodium => "sodium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Zinc => "zinc",
            Nutrient::Selenium => "selenium",
            Nutrient::Iodine => "iodine",
            Nutrient::VitaminB1 => "vitaminB1",
            Nutrient::VitaminB2 => "vitaminB2",
            Nutrient::VitaminB3 => "vitaminB3",
            Nutrient::VitaminB6 => "vitaminB6",
            Nutrient::VitaminB9 => "vitaminB9",
            Nutrient::VitaminB12 => "vitaminB12",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::VitaminE => "vitaminE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Proteins => "Proteins",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Lipids => "Lipids",
            Nutrient::Fibers => "Fibers",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Potassium => "Potassium",
            Nutrient::Sodium => "Sodium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Zinc => "Zinc",
            Nutrient::Selenium => "Selenium",
            Nutrient::Iodine => "Iodine",
            Nutrient::VitaminB1 => "Vitamin B1",
            Nutrient::VitaminB2 => "Vitamin B2",
            Nutrient::VitaminB3 => "Vitamin B3",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::VitaminB9 => "Vitamin B9",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
        }
    }

    /// Display unit for absolute amounts
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Proteins
            | Nutrient::Carbohydrates
            | Nutrient::Lipids
            | Nutrient::Fibers => "g",
            Nutrient::Calcium
            | Nutrient::Iron
            | Nutrient::Magnesium
            | Nutrient::Potassium
            | Nutrient::Sodium
            | Nutrient::Phosphorus
            | Nutrient::Zinc
            | Nutrient::VitaminB1
            | Nutrient::VitaminB2
            | Nutrient::VitaminB3
            | Nutrient::VitaminB6
            | Nutrient::VitaminC
            | Nutrient::VitaminE => "mg",
            Nutrient::Selenium
            | Nutrient::Iodine
            | Nutrient::VitaminB9
            | Nutrient::VitaminB12
            | Nutrient::VitaminD => "µg",
        }
    }
}

/// Nutrient amounts, either per 100 g of a food or as an absolute daily total.
///
/// Energy is kcal, macros are grams, micronutrients are mg or µg (see
/// [`Nutrient::unit`]). The five macro fields are always present; every
/// micronutrient is optional and reads as 0 when absent. All present values
/// are >= 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientData {
    pub kcal: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub lipids: f64,
    #[serde(default)]
    pub fibers: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zinc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selenium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iodine: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b6: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b9: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b12: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_e: Option<f64>,
}

impl Default for NutrientData {
    fn default() -> Self {
        Self {
            kcal: 0.0,
            proteins: 0.0,
            carbohydrates: 0.0,
            lipids: 0.0,
            fibers: 0.0,
            calcium: None,
            iron: None,
            magnesium: None,
            potassium: None,
            sodium: None,
            phosphorus: None,
            zinc: None,
            selenium: None,
            iodine: None,
            vitamin_b1: None,
            vitamin_b2: None,
            vitamin_b3: None,
            vitamin_b6: None,
            vitamin_b9: None,
            vitamin_b12: None,
            vitamin_c: None,
            vitamin_d: None,
            vitamin_e: None,
        }
    }
}

impl NutrientData {
    /// A total with every key present and zero, the identity for accumulation
    pub fn zeroed() -> Self {
        let mut data = Self::default();
        for nutrient in Nutrient::ALL {
            data.set(nutrient, 0.0);
        }
        data
    }

    /// Amount for a key; absent micronutrients read as 0
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.kcal,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Lipids => self.lipids,
            Nutrient::Fibers => self.fibers,
            Nutrient::Calcium => self.calcium.unwrap_or(0.0),
            Nutrient::Iron => self.iron.unwrap_or(0.0),
            Nutrient::Magnesium => self.magnesium.unwrap_or(0.0),
            Nutrient::Potassium => self.potassium.unwrap_or(0.0),
            Nutrient::Sodium => self.sodium.unwrap_or(0.0),
            Nutrient::Phosphorus => self.phosphorus.unwrap_or(0.0),
            Nutrient::Zinc => self.zinc.unwrap_or(0.0),
            Nutrient::Selenium => self.selenium.unwrap_or(0.0),
            Nutrient::Iodine => self.iodine.unwrap_or(0.0),
            Nutrient::VitaminB1 => self.vitamin_b1.unwrap_or(0.0),
            Nutrient::VitaminB2 => self.vitamin_b2.unwrap_or(0.0),
            Nutrient::VitaminB3 => self.vitamin_b3.unwrap_or(0.0),
            Nutrient::VitaminB6 => self.vitamin_b6.unwrap_or(0.0),
            Nutrient::VitaminB9 => self.vitamin_b9.unwrap_or(0.0),
            Nutrient::VitaminB12 => self.vitamin_b12.unwrap_or(0.0),
            Nutrient::VitaminC => self.vitamin_c.unwrap_or(0.0),
            Nutrient::VitaminD => self.vitamin_d.unwrap_or(0.0),
            Nutrient::VitaminE => self.vitamin_e.unwrap_or(0.0),
        }
    }

    /// Set the amount for a key; micronutrients become present
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Energy => self.kcal = value,
            Nutrient::Proteins => self.proteins = value,
            Nutrient::Carbohydrates => self.carbohydrates = value,
            Nutrient::Lipids => self.lipids = value,
            Nutrient::Fibers => self.fibers = value,
            Nutrient::Calcium => self.calcium = Some(value),
            Nutrient::Iron => self.iron = Some(value),
            Nutrient::Magnesium => self.magnesium = Some(value),
            Nutrient::Potassium => self.potassium = Some(value),
            Nutrient::Sodium => self.sodium = Some(value),
            Nutrient::Phosphorus => self.phosphorus = Some(value),
            Nutrient::Zinc => self.zinc = Some(value),
            Nutrient::Selenium => self.selenium = Some(value),
            Nutrient::Iodine => self.iodine = Some(value),
            Nutrient::VitaminB1 => self.vitamin_b1 = Some(value),
            Nutrient::VitaminB2 => self.vitamin_b2 = Some(value),
            Nutrient::VitaminB3 => self.vitamin_b3 = Some(value),
            Nutrient::VitaminB6 => self.vitamin_b6 = Some(value),
            Nutrient::VitaminB9 => self.vitamin_b9 = Some(value),
            Nutrient::VitaminB12 => self.vitamin_b12 = Some(value),
            Nutrient::VitaminC => self.vitamin_c = Some(value),
            Nutrient::VitaminD => self.vitamin_d = Some(value),
            Nutrient::VitaminE => self.vitamin_e = Some(value),
        }
    }
}

/// A food from the catalogue, with nutrients per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub nutritional_values: NutrientData,
    pub per_100g: bool,
}

/// A user profile; treated as a value, updates replace the whole object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub gender: Gender,
    /// Age in years (> 0)
    pub age: u32,
    /// Height in cm (> 0)
    pub height: f64,
    /// Weight in kg (> 0)
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub objective: Objective,
    /// Per-day kcal override for loss/gain objectives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_calorie_delta: Option<f64>,
    pub week_mode: WeekMode,
}

/// A logged food entry.
///
/// Carries its own copy of the food's nutrient vector, captured at log time.
/// Later edits to the catalogue food never retroactively change past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub food_id: String,
    pub food_name: String,
    /// Quantity consumed in grams (> 0)
    pub quantity: f64,
    #[serde(rename = "mealType")]
    pub meal_slot: MealSlot,
    /// Snapshot of the food's per-100 g nutrients at log time
    pub nutritional_values: NutrientData,
    pub date: DateTime<Utc>,
    #[serde(rename = "userId")]
    pub profile_id: String,
}

impl FoodEntry {
    /// Log a food for a profile, snapshotting its nutrient vector
    pub fn log(
        food: &Food,
        quantity: f64,
        meal_slot: MealSlot,
        date: DateTime<Utc>,
        profile_id: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity,
            meal_slot,
            nutritional_values: food.nutritional_values.clone(),
            date,
            profile_id: profile_id.to_string(),
        }
    }
}

/// One planned food inside a meal plan, snapshotted like a logged entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedFood {
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    pub nutritional_values: NutrientData,
}

/// A planned meal for a date and slot; template plans are shared family-wide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(rename = "mealType")]
    pub meal_slot: MealSlot,
    pub foods: Vec<PlannedFood>,
    pub is_template: bool,
    #[serde(default)]
    pub is_family_plan: bool,
}

impl MealPlan {
    pub fn new(
        profile_id: Option<String>,
        date: DateTime<Utc>,
        meal_slot: MealSlot,
        foods: Vec<PlannedFood>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile_id,
            date,
            meal_slot,
            foods,
            is_template: false,
            is_family_plan: false,
        }
    }
}

/// Daily micronutrient targets, absolute amounts in the units of
/// [`Nutrient::unit`] (copper mg, vitamin A µg, vitamin K µg)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicronutrientTargets {
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub potassium: f64,
    pub sodium: f64,
    pub phosphorus: f64,
    pub zinc: f64,
    pub selenium: f64,
    pub iodine: f64,
    pub copper: f64,
    pub vitamin_a: f64,
    pub vitamin_b1: f64,
    pub vitamin_b2: f64,
    pub vitamin_b3: f64,
    pub vitamin_b6: f64,
    pub vitamin_b9: f64,
    pub vitamin_b12: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
    pub vitamin_k: f64,
}

impl MicronutrientTargets {
    /// Target for an intake-trackable key, if one exists.
    ///
    /// Energy and macros have their own fields on [`NutrientTargets`]; copper,
    /// vitamin A, and vitamin K have targets but no intake counterpart.
    pub fn amount(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy
            | Nutrient::Proteins
            | Nutrient::Carbohydrates
            | Nutrient::Lipids
            | Nutrient::Fibers => None,
            Nutrient::Calcium => Some(self.calcium),
            Nutrient::Iron => Some(self.iron),
            Nutrient::Magnesium => Some(self.magnesium),
            Nutrient::Potassium => Some(self.potassium),
            Nutrient::Sodium => Some(self.sodium),
            Nutrient::Phosphorus => Some(self.phosphorus),
            Nutrient::Zinc => Some(self.zinc),
            Nutrient::Selenium => Some(self.selenium),
            Nutrient::Iodine => Some(self.iodine),
            Nutrient::VitaminB1 => Some(self.vitamin_b1),
            Nutrient::VitaminB2 => Some(self.vitamin_b2),
            Nutrient::VitaminB3 => Some(self.vitamin_b3),
            Nutrient::VitaminB6 => Some(self.vitamin_b6),
            Nutrient::VitaminB9 => Some(self.vitamin_b9),
            Nutrient::VitaminB12 => Some(self.vitamin_b12),
            Nutrient::VitaminC => Some(self.vitamin_c),
            Nutrient::VitaminD => Some(self.vitamin_d),
            Nutrient::VitaminE => Some(self.vitamin_e),
        }
    }
}

/// Computed daily targets for a profile; every value is > 0 for a valid profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTargets {
    /// kcal/day
    pub calories: f64,
    /// g/day
    pub proteins: f64,
    /// g/day
    pub carbohydrates: f64,
    /// g/day
    pub lipids: f64,
    /// g/day
    pub fibers: f64,
    pub micronutrients: MicronutrientTargets,
}

impl NutrientTargets {
    /// Target for any intake-trackable key
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.calories,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Lipids => self.lipids,
            Nutrient::Fibers => self.fibers,
            other => self.micronutrients.amount(other).unwrap_or(0.0),
        }
    }
}

/// One day's aggregate for a profile; recomputed on demand, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntake {
    pub date: NaiveDate,
    #[serde(rename = "userId")]
    pub profile_id: String,
    pub total_nutrients: NutrientData,
    pub entries: Vec<FoodEntry>,
    pub targets: NutrientTargets,
}

/// One line of a generated shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub food_id: String,
    pub food_name: String,
    pub total_quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_micronutrient_reads_zero() {
        let data = NutrientData {
            kcal: 52.0,
            proteins: 0.3,
            carbohydrates: 14.0,
            lipids: 0.2,
            fibers: 2.4,
            ..Default::default()
        };

        assert_eq!(data.amount(Nutrient::Energy), 52.0);
        assert_eq!(data.amount(Nutrient::Iron), 0.0);
        assert_eq!(data.amount(Nutrient::VitaminB12), 0.0);
    }

    #[test]
    fn test_zeroed_populates_every_key() {
        let data = NutrientData::zeroed();
        assert_eq!(data.calcium, Some(0.0));
        assert_eq!(data.vitamin_e, Some(0.0));
        for nutrient in Nutrient::ALL {
            assert_eq!(data.amount(nutrient), 0.0);
        }
    }

    #[test]
    fn test_step_down_floors_at_sedentary() {
        assert_eq!(ActivityLevel::Active.step_down(), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::Moderate.step_down(), ActivityLevel::Light);
        assert_eq!(ActivityLevel::Light.step_down(), ActivityLevel::Sedentary);
        assert_eq!(
            ActivityLevel::Sedentary.step_down(),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn test_entry_snapshot_is_a_copy() {
        let mut food = Food {
            id: "food-1".to_string(),
            name: "Lentils".to_string(),
            category: Some("Legumes".to_string()),
            nutritional_values: NutrientData {
                kcal: 116.0,
                proteins: 9.0,
                carbohydrates: 20.0,
                lipids: 0.4,
                fibers: 7.9,
                iron: Some(3.3),
                ..Default::default()
            },
            per_100g: true,
        };

        let entry = FoodEntry::log(&food, 150.0, MealSlot::Lunch, Utc::now(), "profile-1");

        // Editing the catalogue food must not touch the logged snapshot
        food.nutritional_values.iron = Some(99.0);
        assert_eq!(entry.nutritional_values.iron, Some(3.3));
        assert_eq!(entry.food_name, "Lentils");
    }

    #[test]
    fn test_entry_wire_format_round_trip() {
        let json = r#"{
            "id": "e-1",
            "foodId": "food-1",
            "foodName": "Oats",
            "quantity": 60,
            "mealType": "breakfast",
            "nutritionalValues": {
                "kcal": 389,
                "proteins": 16.9,
                "carbohydrates": 66.3,
                "lipids": 6.9,
                "fibers": 10.6,
                "magnesium": 177
            },
            "date": "2024-03-02T07:45:00Z",
            "userId": "profile-1"
        }"#;

        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.meal_slot, MealSlot::Breakfast);
        assert_eq!(entry.nutritional_values.magnesium, Some(177.0));
        assert_eq!(entry.nutritional_values.amount(Nutrient::Calcium), 0.0);

        let back = serde_json::to_string(&entry).unwrap();
        let reparsed: FoodEntry = serde_json::from_str(&back).unwrap();
        assert_eq!(entry, reparsed);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        for slot in MealSlot::ALL {
            assert_eq!(slot.as_str().parse::<MealSlot>().unwrap(), slot);
        }
        assert!(matches!(
            "extreme".parse::<ActivityLevel>(),
            Err(NutritionError::UnknownActivityLevel(_))
        ));
        assert!(matches!(
            "brunch".parse::<MealSlot>(),
            Err(NutritionError::UnknownMealSlot(_))
        ));
        assert!(matches!(
            "bulk".parse::<Objective>(),
            Err(NutritionError::UnknownObjective(_))
        ));
    }
}
