use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::domain::{Budget, Diet, Equipment, Gender, Goal};
use crate::models::responses::FieldError;

/// Order in which per-field validation messages are reported
const FIELD_ORDER: [&str; 4] = ["age", "weight_kg", "height_ft", "location"];

/// One plan request, as submitted by the form or the JSON API
///
/// Missing fields fall back to the form defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlanRequest {
    pub goal: Goal,
    pub diet: Diet,
    #[validate(range(min = 10, max = 120, message = "Age must be between 10 and 120."))]
    pub age: i32,
    #[validate(range(
        exclusive_min = 20.0,
        max = 300.0,
        message = "Please enter a realistic weight (20kg - 300kg)."
    ))]
    #[serde(rename = "weightKg", alias = "weight_kg")]
    pub weight_kg: f64,
    #[validate(range(min = 2.0, max = 8.5, message = "Please enter a realistic height (2ft - 8.5ft)."))]
    #[serde(rename = "heightFt", alias = "height_ft")]
    pub height_ft: f64,
    pub gender: Gender,
    pub budget: Budget,
    #[validate(custom(function = "validate_location"))]
    pub location: String,
    pub equipment: Equipment,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            goal: Goal::WeightGain,
            diet: Diet::Keto,
            age: 25,
            weight_kg: 80.0,
            height_ft: 6.0,
            gender: Gender::Male,
            budget: Budget::Low,
            location: String::new(),
            equipment: Equipment::NoEquipment,
        }
    }
}

impl PlanRequest {
    /// Run range checks and return one message per failing field, in form order
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(ordered_field_errors(&errors)),
        }
    }
}

/// Browser form submission of a [`PlanRequest`]
///
/// A cleared or garbled number input arrives as `age=` or `weightKg=abc`;
/// those become `None` here so they are reported like any other
/// out-of-range value instead of failing the whole form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanForm {
    pub goal: Goal,
    pub diet: Diet,
    #[serde(deserialize_with = "lenient_number")]
    pub age: Option<i32>,
    #[serde(rename = "weightKg", alias = "weight_kg", deserialize_with = "lenient_number")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "heightFt", alias = "height_ft", deserialize_with = "lenient_number")]
    pub height_ft: Option<f64>,
    pub gender: Gender,
    pub budget: Budget,
    pub location: String,
    pub equipment: Equipment,
}

impl Default for PlanForm {
    fn default() -> Self {
        PlanRequest::default().into()
    }
}

impl From<PlanRequest> for PlanForm {
    fn from(request: PlanRequest) -> Self {
        Self {
            goal: request.goal,
            diet: request.diet,
            age: Some(request.age),
            weight_kg: Some(request.weight_kg),
            height_ft: Some(request.height_ft),
            gender: request.gender,
            budget: request.budget,
            location: request.location,
            equipment: request.equipment,
        }
    }
}

impl PlanForm {
    /// Turn the submission into a validated request
    ///
    /// On failure, returns the request to re-render (missing numbers fall
    /// back to the form defaults) together with the per-field messages.
    pub fn into_request(self) -> Result<PlanRequest, (PlanRequest, Vec<FieldError>)> {
        // Missing numbers get values outside every range so the usual
        // per-field message is produced for them
        let checked = PlanRequest {
            goal: self.goal,
            diet: self.diet,
            age: self.age.unwrap_or(i32::MIN),
            weight_kg: self.weight_kg.unwrap_or(f64::INFINITY),
            height_ft: self.height_ft.unwrap_or(f64::INFINITY),
            gender: self.gender,
            budget: self.budget,
            location: self.location,
            equipment: self.equipment,
        };

        match checked.check() {
            Ok(()) => Ok(checked),
            Err(errors) => {
                let defaults = PlanRequest::default();
                let shown = PlanRequest {
                    age: self.age.unwrap_or(defaults.age),
                    weight_kg: self.weight_kg.unwrap_or(defaults.weight_kg),
                    height_ft: self.height_ft.unwrap_or(defaults.height_ft),
                    ..checked
                };
                Err((shown, errors))
            }
        }
    }
}

/// Blank or unparseable input becomes `None`
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

fn validate_location(location: &str) -> Result<(), ValidationError> {
    if location.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Please enter your Country/Region."));
        return Err(error);
    }
    Ok(())
}

fn ordered_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect()
}
