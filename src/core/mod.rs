// Core calculation exports
pub mod metrics;
pub mod prompt;

pub use metrics::{bmi, bmr, calorie_target, classify_bmi, compute, macro_split, tdee};
pub use prompt::{build_prompt, clean_response};
