use crate::models::{HealthMetrics, PlanRequest};

/// Characters stripped from model output so it renders as plain text
const MARKUP_CHARS: [char; 3] = ['*', '#', '`'];

/// Build the coaching prompt sent to the model
///
/// Weight is printed in float notation (`80.0`, `72.5`) and BMI with one
/// decimal place.
pub fn build_prompt(request: &PlanRequest, metrics: &HealthMetrics) -> String {
    format!(
        "Professional fitness coach. Plan for: {age}yo {gender}, {weight:?}kg. BMI: {bmi:.1}. \
         Target: {calories} cal. Goal: {goal}, Diet: {diet}, Budget: {budget}, Location: {location}, \
         Equipment: {equipment}. Provide Health Analysis, Meal Plan, and Workout. Clean plain text, no markdown.",
        age = request.age,
        gender = request.gender,
        weight = request.weight_kg,
        bmi = metrics.bmi,
        calories = metrics.daily_calories,
        goal = request.goal,
        diet = request.diet,
        budget = request.budget,
        location = request.location,
        equipment = request.equipment,
    )
}

/// Remove markdown markup characters from generated text
pub fn clean_response(text: &str) -> String {
    text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::compute;
    use crate::models::{Budget, Diet, Equipment, Gender, Goal};

    #[test]
    fn test_build_prompt_exact() {
        let request = PlanRequest {
            goal: Goal::WeightLoss,
            diet: Diet::Veg,
            age: 30,
            weight_kg: 72.5,
            height_ft: 5.5,
            gender: Gender::Female,
            budget: Budget::Medium,
            location: "Kerala, India".to_string(),
            equipment: Equipment::Dumbbells,
        };
        let metrics = compute(&request);

        let expected = format!(
            "Professional fitness coach. Plan for: 30yo Female, 72.5kg. BMI: {:.1}. Target: {} cal. \
             Goal: Weight Loss, Diet: Veg, Budget: Medium, Location: Kerala, India, Equipment: Dumbbells. \
             Provide Health Analysis, Meal Plan, and Workout. Clean plain text, no markdown.",
            metrics.bmi, metrics.daily_calories
        );

        assert_eq!(build_prompt(&request, &metrics), expected);
    }

    #[test]
    fn test_whole_weight_keeps_decimal() {
        let request = PlanRequest {
            location: "Peru".to_string(),
            ..PlanRequest::default()
        };
        let metrics = compute(&request);

        let prompt = build_prompt(&request, &metrics);
        assert!(prompt.contains("25yo Male, 80.0kg. BMI: 23.9. Target: 3052 cal."));
        assert!(prompt.contains("Equipment: No Equipment."));
    }

    #[test]
    fn test_clean_response_strips_markup_only() {
        let raw = "## Meal Plan\n**Breakfast**: oats & `milk` - 300 kcal";
        assert_eq!(clean_response(raw), " Meal Plan\nBreakfast: oats & milk - 300 kcal");
    }
}
