use crate::models::{BmiStatus, Diet, Gender, Goal, HealthMetrics, MacroTarget, Macronutrient, PlanRequest};

/// Meters per foot
pub const FEET_TO_METERS: f64 = 0.3048;

/// Fixed activity multiplier applied to BMR (light-to-moderate activity)
pub const ACTIVITY_FACTOR: f64 = 1.4;

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 24.9;

#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

#[inline]
pub fn meters_to_cm(meters: f64) -> f64 {
    meters * 100.0
}

/// Body Mass Index, rounded to one decimal place
///
/// Formula: BMI = weight_kg / height_m²
///
/// Rounding is `f64::round` on the value scaled by ten, so exact halves go
/// away from zero. Decimal-exact rounding can land one tenth lower on a
/// value like 24.95 whose binary form sits just under the half.
#[inline]
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    round_to_tenth(weight_kg / height_m.powi(2))
}

/// Classify a (rounded) BMI into one of three bands
///
/// - Healthy: 18.5 ..= 24.9
/// - Overweight: above 24.9
/// - Underweight: everything else
pub fn classify_bmi(bmi: f64) -> BmiStatus {
    if (HEALTHY_BMI_MIN..=HEALTHY_BMI_MAX).contains(&bmi) {
        BmiStatus::Healthy
    } else if bmi > HEALTHY_BMI_MAX {
        BmiStatus::Overweight
    } else {
        BmiStatus::Underweight
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Male: +5
/// - Female and Other: -161
pub fn bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);

    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Total Daily Energy Expenditure
#[inline]
pub fn tdee(bmr: f64) -> f64 {
    bmr * ACTIVITY_FACTOR
}

/// Daily calorie offset from TDEE for a goal
pub fn goal_offset(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -500.0,
        Goal::WeightGain => 500.0,
        Goal::MuscleGain => 300.0,
        Goal::Maintenance => 0.0,
    }
}

/// Daily calorie target, truncated toward zero
pub fn calorie_target(tdee: f64, goal: Goal) -> i64 {
    (tdee + goal_offset(goal)) as i64
}

/// Macronutrient split for a diet, in display order
pub fn macro_split(diet: Diet) -> Vec<MacroTarget> {
    let split: [(Macronutrient, f64); 3] = match diet {
        Diet::Keto => [
            (Macronutrient::Fats, 0.70),
            (Macronutrient::Protein, 0.25),
            (Macronutrient::Carbs, 0.05),
        ],
        Diet::Veg | Diet::NonVeg | Diet::Vegan => [
            (Macronutrient::Protein, 0.30),
            (Macronutrient::Carbs, 0.40),
            (Macronutrient::Fats, 0.30),
        ],
    };

    split
        .into_iter()
        .map(|(nutrient, share)| MacroTarget { nutrient, share })
        .collect()
}

/// Compute all metrics for an already validated request
pub fn compute(request: &PlanRequest) -> HealthMetrics {
    let height_m = feet_to_meters(request.height_ft);
    let height_cm = meters_to_cm(height_m);
    let bmi = bmi(request.weight_kg, height_m);
    let bmr = bmr(request.weight_kg, height_cm, request.age, request.gender);
    let tdee = tdee(bmr);

    HealthMetrics {
        height_m,
        height_cm,
        bmi,
        bmi_status: classify_bmi(bmi),
        bmr,
        tdee,
        daily_calories: calorie_target(tdee, request.goal),
        macros: macro_split(request.diet),
    }
}

#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_height_conversion() {
        assert!(approx(feet_to_meters(6.0), 1.8288));
        assert!(approx(meters_to_cm(1.8288), 182.88));
    }

    #[test]
    fn test_bmi_rounding() {
        // 80 / 1.8288² = 23.919...
        assert_eq!(bmi(80.0, 1.8288), 23.9);
        // 70 / 1.75² = 22.857...
        assert_eq!(bmi(70.0, 1.75), 22.9);
    }

    #[test]
    fn test_bmi_exact_half_rounds_away_from_zero() {
        // 22.25 is exact in binary
        assert_eq!(bmi(22.25, 1.0), 22.3);
    }

    #[test]
    fn test_classify_bmi_bands() {
        assert_eq!(classify_bmi(18.4), BmiStatus::Underweight);
        assert_eq!(classify_bmi(18.5), BmiStatus::Healthy);
        assert_eq!(classify_bmi(24.9), BmiStatus::Healthy);
        assert_eq!(classify_bmi(25.0), BmiStatus::Overweight);
    }

    #[test]
    fn test_bmr_gender_branches() {
        let male = bmr(70.0, 180.0, 30, Gender::Male);
        let female = bmr(70.0, 180.0, 30, Gender::Female);
        let other = bmr(70.0, 180.0, 30, Gender::Other);

        assert!(approx(male, 1680.0));
        assert!(approx(female, 1514.0));
        assert!(approx(male - female, 166.0));
        assert_eq!(other, female);
    }

    #[test]
    fn test_calorie_offsets() {
        assert_eq!(calorie_target(2000.0, Goal::WeightLoss), 1500);
        assert_eq!(calorie_target(2000.0, Goal::WeightGain), 2500);
        assert_eq!(calorie_target(2000.0, Goal::MuscleGain), 2300);
        assert_eq!(calorie_target(2000.0, Goal::Maintenance), 2000);
    }

    #[test]
    fn test_calorie_target_truncates() {
        assert_eq!(calorie_target(2552.9, Goal::Maintenance), 2552);
        assert_eq!(calorie_target(2552.9, Goal::WeightLoss), 2052);
    }

    #[test]
    fn test_macro_split_keto() {
        let split = macro_split(Diet::Keto);
        let percents: Vec<(Macronutrient, u8)> = split.iter().map(|m| (m.nutrient, m.percent())).collect();
        assert_eq!(
            percents,
            vec![(Macronutrient::Fats, 70), (Macronutrient::Protein, 25), (Macronutrient::Carbs, 5)]
        );
    }

    #[test]
    fn test_macro_split_sums_to_one() {
        for diet in [Diet::Keto, Diet::Veg, Diet::NonVeg, Diet::Vegan] {
            let total: f64 = macro_split(diet).iter().map(|m| m.share).sum();
            assert!(approx(total, 1.0), "{:?} split sums to {}", diet, total);
        }
    }

    #[test]
    fn test_compute_default_profile() {
        let request = PlanRequest {
            location: "Canada".to_string(),
            ..PlanRequest::default()
        };

        let metrics = compute(&request);

        assert_eq!(metrics.bmi, 23.9);
        assert_eq!(metrics.bmi_status, BmiStatus::Healthy);
        assert!(approx(metrics.bmr, 1823.0));
        assert!(approx(metrics.tdee, 2552.2));
        assert_eq!(metrics.daily_calories, 3052);
    }
}
