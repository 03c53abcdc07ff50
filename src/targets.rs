//! Daily target computation
//!
//! This module maps a user profile to its daily nutrition targets:
//! - Resting metabolic rate (Harris-Benedict revised)
//! - Total daily energy expenditure (RMR x PAL, rest-mode aware)
//! - Calorie target (objective delta, custom override)
//! - Macronutrient targets (per-kg coefficients by activity level)
//! - Micronutrient targets (guideline values, age/gender branched)
//!
//! All functions are total over well-formed profiles; malformed inputs
//! (non-positive weight/height/age) are the responsibility of the profile
//! construction boundary and produce arithmetic garbage, not errors.

use crate::types::{
    ActivityLevel, Gender, MicronutrientTargets, NutrientTargets, Objective, UserProfile, WeekMode,
};

/// Daily fiber target in grams, constant across profiles
pub const FIBER_TARGET_G: f64 = 30.0;

/// kcal-to-megajoule divisor for the energy-scaled B-vitamin targets
/// (4184 kJ per 1000 kcal)
const MEGAJOULE_KCAL_DIVISOR: f64 = 4184.0;

/// Target calculator mapping profiles to daily targets
pub struct TargetCalculator;

impl TargetCalculator {
    /// Resting metabolic rate in kcal/day (Harris-Benedict revised)
    pub fn resting_metabolic_rate(profile: &UserProfile) -> f64 {
        match profile.gender {
            Gender::Female => {
                447.593 + 9.247 * profile.weight + 3.098 * profile.height
                    - 4.330 * f64::from(profile.age)
            }
            Gender::Male => {
                88.362 + 13.397 * profile.weight + 4.799 * profile.height
                    - 5.677 * f64::from(profile.age)
            }
        }
    }

    /// Total daily energy expenditure in kcal/day (RMR x effective PAL).
    ///
    /// Rest weeks use the PAL of the activity level one step below the
    /// profile's; sedentary is the floor.
    pub fn total_daily_energy_expenditure(profile: &UserProfile) -> f64 {
        let rmr = Self::resting_metabolic_rate(profile);
        rmr * effective_pal(profile)
    }

    /// Daily calorie target in kcal/day.
    ///
    /// A custom delta overrides the objective default, but only for loss
    /// (subtracted) and gain (added); maintain always uses the default delta.
    pub fn calorie_target(profile: &UserProfile) -> f64 {
        let tdee = Self::total_daily_energy_expenditure(profile);

        if let Some(delta) = profile.custom_calorie_delta {
            match profile.objective {
                Objective::Loss => return tdee - delta,
                Objective::Gain => return tdee + delta,
                Objective::Maintain => {}
            }
        }

        tdee + profile.objective.default_calorie_delta()
    }

    /// Macronutrient targets in g/day: weight x per-kg coefficient x
    /// objective multiplier
    pub fn macro_targets(profile: &UserProfile) -> MacroTargets {
        let coeffs = macro_coefficients(profile.activity_level);
        let (carb_mult, protein_mult, lipid_mult) = objective_multipliers(profile.objective);

        MacroTargets {
            carbohydrates: profile.weight * coeffs.carbohydrates * carb_mult,
            proteins: profile.weight * coeffs.proteins * protein_mult,
            lipids: profile.weight * coeffs.lipids * lipid_mult,
        }
    }

    /// Micronutrient targets from the guideline table.
    ///
    /// Calcium branches on age (1000 mg up to 24 years, 950 mg after); iron,
    /// magnesium, zinc, copper, vitamins A/E/B6 branch on gender; B1 and B3
    /// scale with the computed calorie target above a fixed floor.
    pub fn micronutrient_targets(profile: &UserProfile, calories: f64) -> MicronutrientTargets {
        let is_female = profile.gender == Gender::Female;
        let is_young = profile.age <= 24;
        let megajoules = calories / MEGAJOULE_KCAL_DIVISOR;

        MicronutrientTargets {
            calcium: if is_young { 1000.0 } else { 950.0 },
            // Higher for women (menstrual losses)
            iron: if is_female { 16.0 } else { 11.0 },
            magnesium: if is_female { 300.0 } else { 380.0 },
            potassium: 3500.0,
            // Baseline outside physical activity
            sodium: 1500.0,
            phosphorus: 550.0,
            zinc: if is_female { 9.0 } else { 12.0 },
            selenium: 70.0,
            iodine: 150.0,
            copper: if is_female { 1.5 } else { 1.9 },
            vitamin_a: if is_female { 650.0 } else { 750.0 },
            // 0.1 mg per MJ of energy, floored at 1.1 mg
            vitamin_b1: f64::max(1.1, megajoules * 0.1),
            vitamin_b2: 1.6,
            // 1.6 mg NE per MJ of energy, floored at 11 mg
            vitamin_b3: f64::max(11.0, megajoules * 1.6),
            vitamin_b6: if is_female { 1.6 } else { 1.7 },
            vitamin_b9: 330.0,
            vitamin_b12: 4.0,
            vitamin_c: 110.0,
            vitamin_d: 15.0,
            vitamin_e: if is_female { 9.0 } else { 10.0 },
            vitamin_k: 79.0,
        }
    }

    /// Full daily targets for a profile; the composition entry point
    pub fn nutrient_targets(profile: &UserProfile) -> NutrientTargets {
        let calories = Self::calorie_target(profile);
        let macros = Self::macro_targets(profile);
        let micronutrients = Self::micronutrient_targets(profile, calories);

        NutrientTargets {
            calories,
            proteins: macros.proteins,
            carbohydrates: macros.carbohydrates,
            lipids: macros.lipids,
            fibers: FIBER_TARGET_G,
            micronutrients,
        }
    }
}

/// Macronutrient targets in g/day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub carbohydrates: f64,
    pub proteins: f64,
    pub lipids: f64,
}

/// Per-kg macronutrient coefficients for an activity level (g/kg/day)
#[derive(Debug, Clone, Copy)]
struct MacroCoefficients {
    carbohydrates: f64,
    proteins: f64,
    lipids: f64,
}

fn macro_coefficients(level: ActivityLevel) -> MacroCoefficients {
    match level {
        ActivityLevel::Sedentary => MacroCoefficients {
            carbohydrates: 3.0,
            proteins: 1.2,
            lipids: 1.0,
        },
        ActivityLevel::Light => MacroCoefficients {
            // Midpoints of the 4-5 g/kg and 1.0-1.1 g/kg guideline ranges
            carbohydrates: 4.5,
            proteins: 1.5,
            lipids: 1.05,
        },
        ActivityLevel::Moderate => MacroCoefficients {
            carbohydrates: 6.0,
            proteins: 1.8,
            lipids: 1.2,
        },
        ActivityLevel::Active => MacroCoefficients {
            carbohydrates: 7.5,
            proteins: 2.0,
            lipids: 1.3,
        },
    }
}

/// Objective multipliers for (carbohydrates, proteins, lipids)
fn objective_multipliers(objective: Objective) -> (f64, f64, f64) {
    match objective {
        // -20% carbs, +25% proteins
        Objective::Loss => (0.8, 1.25, 1.0),
        Objective::Maintain => (1.0, 1.0, 1.0),
        // +30% carbs
        Objective::Gain => (1.3, 1.0, 1.0),
    }
}

/// PAL after applying the profile's week mode
fn effective_pal(profile: &UserProfile) -> f64 {
    match profile.week_mode {
        WeekMode::Normal => profile.activity_level.pal(),
        WeekMode::Rest => profile.activity_level.step_down().pal(),
    }
}
