//! Wellness Planner - personalized fitness and nutrition plans
//!
//! Computes BMI, BMR, TDEE and a daily calorie target from a user's body
//! metrics, then asks Gemini for a matching meal plan and workout.

pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_prompt, clean_response, compute};
pub use models::{HealthMetrics, PlanRequest, PlanResponse};
pub use services::{GeminiClient, GeminiError};
