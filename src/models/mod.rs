// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Budget, BmiStatus, Choice, Diet, Equipment, Gender, Goal, HealthMetrics, MacroTarget, Macronutrient};
pub use requests::{PlanForm, PlanRequest};
pub use responses::{ErrorResponse, FieldError, HealthResponse, PlanResponse};
