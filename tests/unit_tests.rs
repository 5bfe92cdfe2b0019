// Unit tests for Wellness Planner

use wellness_planner::core::metrics::{
    bmi, bmr, calorie_target, classify_bmi, compute, feet_to_meters, meters_to_cm, tdee,
};
use wellness_planner::core::prompt::{build_prompt, clean_response};
use wellness_planner::models::{BmiStatus, Budget, Diet, Equipment, Gender, Goal, PlanRequest};

fn create_test_request(age: i32, weight_kg: f64, height_ft: f64, location: &str) -> PlanRequest {
    PlanRequest {
        goal: Goal::Maintenance,
        diet: Diet::NonVeg,
        age,
        weight_kg,
        height_ft,
        gender: Gender::Male,
        budget: Budget::High,
        location: location.to_string(),
        equipment: Equipment::FullGym,
    }
}

#[test]
fn test_bmi_is_deterministic() {
    let height_m = feet_to_meters(5.8);
    let first = bmi(68.0, height_m);
    let second = bmi(68.0, height_m);
    assert_eq!(first, second);
}

#[test]
fn test_bmi_standard_formula() {
    // 90 / 1.8² = 27.777...
    assert_eq!(bmi(90.0, 1.8), 27.8);
    assert_eq!(classify_bmi(bmi(90.0, 1.8)), BmiStatus::Overweight);

    // 45 / 1.7² = 15.57...
    assert_eq!(bmi(45.0, 1.7), 15.6);
    assert_eq!(classify_bmi(bmi(45.0, 1.7)), BmiStatus::Underweight);
}

#[test]
fn test_bmr_male_female_offset() {
    let height_cm = meters_to_cm(feet_to_meters(5.5));

    let male = bmr(60.0, height_cm, 40, Gender::Male);
    let female = bmr(60.0, height_cm, 40, Gender::Female);

    let expected_male = 10.0 * 60.0 + 6.25 * height_cm - 5.0 * 40.0 + 5.0;
    assert!((male - expected_male).abs() < 1e-9);
    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_bmr_other_uses_female_constant() {
    assert_eq!(
        bmr(75.0, 170.0, 35, Gender::Other),
        bmr(75.0, 170.0, 35, Gender::Female)
    );
}

#[test]
fn test_calorie_target_offsets_from_tdee() {
    let tdee = tdee(1500.0);
    assert!((tdee - 2100.0).abs() < 1e-9);

    let maintenance = calorie_target(tdee, Goal::Maintenance);
    assert_eq!(calorie_target(tdee, Goal::WeightLoss), maintenance - 500);
    assert_eq!(calorie_target(tdee, Goal::WeightGain), maintenance + 500);
    assert_eq!(calorie_target(tdee, Goal::MuscleGain), maintenance + 300);
}

#[test]
fn test_out_of_range_age_rejected() {
    for age in [9, 121, -1] {
        let errors = create_test_request(age, 70.0, 5.9, "Kenya").check().unwrap_err();
        assert_eq!(errors[0].message, "Age must be between 10 and 120.");
    }
    assert!(create_test_request(10, 70.0, 5.9, "Kenya").check().is_ok());
    assert!(create_test_request(120, 70.0, 5.9, "Kenya").check().is_ok());
}

#[test]
fn test_out_of_range_weight_rejected() {
    for weight in [20.0, 5.0, 300.5] {
        let errors = create_test_request(30, weight, 5.9, "Kenya").check().unwrap_err();
        assert_eq!(errors[0].message, "Please enter a realistic weight (20kg - 300kg).");
    }
}

#[test]
fn test_out_of_range_height_rejected() {
    for height in [1.9, 8.6] {
        let errors = create_test_request(30, 70.0, height, "Kenya").check().unwrap_err();
        assert_eq!(errors[0].message, "Please enter a realistic height (2ft - 8.5ft).");
    }
    assert!(create_test_request(30, 70.0, 2.0, "Kenya").check().is_ok());
    assert!(create_test_request(30, 70.0, 8.5, "Kenya").check().is_ok());
}

#[test]
fn test_blank_location_rejected() {
    for location in ["", "   ", "\t\n"] {
        let errors = create_test_request(30, 70.0, 5.9, location).check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Please enter your Country/Region.");
    }
}

#[test]
fn test_prompt_reflects_metrics() {
    let request = create_test_request(42, 95.0, 5.75, "Brazil");
    let metrics = compute(&request);
    let prompt = build_prompt(&request, &metrics);

    assert!(prompt.starts_with("Professional fitness coach. Plan for: 42yo Male, 95.0kg."));
    assert!(prompt.contains(&format!("Target: {} cal.", metrics.daily_calories)));
    assert!(prompt.contains("Goal: Maintenance, Diet: Non-Veg, Budget: High, Location: Brazil, Equipment: Full Gym."));
    assert!(prompt.ends_with("Clean plain text, no markdown."));
}

#[test]
fn test_clean_response_keeps_plain_text() {
    let plain = "Breakfast: eggs, 2 slices toast (approx. 450 kcal)";
    assert_eq!(clean_response(plain), plain);
    assert_eq!(clean_response("***###```"), "");
}
