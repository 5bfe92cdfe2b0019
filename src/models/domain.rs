use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of form options with a human-readable label
///
/// The label doubles as the wire value, so `"Weight Loss"` is both what the
/// form shows and what the JSON API accepts.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option in display order
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

macro_rules! impl_choice_display {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

/// Fitness goal driving the calorie offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Gain")]
    WeightGain,
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "Maintenance")]
    Maintenance,
}

impl Choice for Goal {
    const ALL: &'static [Self] = &[Self::WeightGain, Self::WeightLoss, Self::MuscleGain, Self::Maintenance];

    fn label(&self) -> &'static str {
        match self {
            Self::WeightGain => "Weight Gain",
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Keto,
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Vegan,
}

impl Choice for Diet {
    const ALL: &'static [Self] = &[Self::Keto, Self::Veg, Self::NonVeg, Self::Vegan];

    fn label(&self) -> &'static str {
        match self {
            Self::Keto => "Keto",
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
            Self::Vegan => "Vegan",
        }
    }
}

/// Gender as entered on the form
///
/// Only `Male` selects the male Mifflin-St Jeor constant; `Female` and
/// `Other` both use the female one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::Other];

    fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Weekly grocery budget level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Choice for Budget {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equipment {
    #[serde(rename = "No Equipment")]
    NoEquipment,
    Dumbbells,
    #[serde(rename = "Full Gym")]
    FullGym,
}

impl Choice for Equipment {
    const ALL: &'static [Self] = &[Self::NoEquipment, Self::Dumbbells, Self::FullGym];

    fn label(&self) -> &'static str {
        match self {
            Self::NoEquipment => "No Equipment",
            Self::Dumbbells => "Dumbbells",
            Self::FullGym => "Full Gym",
        }
    }
}

impl_choice_display!(Goal, Diet, Gender, Budget, Equipment);

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    Healthy,
    Overweight,
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Protein,
    Carbs,
    Fats,
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fats => "Fats",
        };
        f.write_str(label)
    }
}

/// Share of daily calories for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub nutrient: Macronutrient,
    /// Fraction in `0.0..=1.0`
    pub share: f64,
}

impl MacroTarget {
    pub fn percent(&self) -> u8 {
        (self.share * 100.0).round() as u8
    }
}

/// Everything derived from the body metrics of one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    #[serde(rename = "heightM")]
    pub height_m: f64,
    #[serde(rename = "heightCm")]
    pub height_cm: f64,
    /// Rounded to one decimal place
    pub bmi: f64,
    #[serde(rename = "bmiStatus")]
    pub bmi_status: BmiStatus,
    pub bmr: f64,
    pub tdee: f64,
    #[serde(rename = "dailyCalories")]
    pub daily_calories: i64,
    pub macros: Vec<MacroTarget>,
}
