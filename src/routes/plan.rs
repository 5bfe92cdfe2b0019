use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use thiserror::Error;

use crate::core::{build_prompt, clean_response, compute};
use crate::models::{ErrorResponse, FieldError, HealthMetrics, HealthResponse, PlanRequest, PlanResponse};
use crate::services::{GeminiClient, GeminiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

/// Why a plan could not be produced
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Validation failed")]
    Invalid(Vec<FieldError>),

    #[error("AI service error: {0}")]
    Service(#[from] GeminiError),
}

/// A generated plan together with the metrics it was built from
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub metrics: HealthMetrics,
    pub plan: String,
}

/// Validate, compute metrics, and ask the model for a plan
///
/// Validation runs before anything leaves the process.
pub async fn generate_plan(gemini: &GeminiClient, request: &PlanRequest) -> Result<GeneratedPlan, PlanError> {
    request.check().map_err(PlanError::Invalid)?;

    let metrics = compute(request);
    tracing::debug!(
        "Computed metrics: bmi={}, status={}, calories={}",
        metrics.bmi,
        metrics.bmi_status,
        metrics.daily_calories
    );

    let prompt = build_prompt(request, &metrics);
    let raw = gemini.generate_content(&prompt).await?;

    Ok(GeneratedPlan {
        metrics,
        plan: clean_response(&raw),
    })
}

/// Configure JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/plan", web::post().to(create_plan));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create plan endpoint
///
/// POST /api/v1/plan
///
/// Request body (all fields optional, form defaults apply):
/// ```json
/// {
///   "goal": "Weight Loss",
///   "diet": "Veg",
///   "age": 30,
///   "weightKg": 72.5,
///   "heightFt": 5.5,
///   "gender": "Female",
///   "budget": "Medium",
///   "location": "India",
///   "equipment": "Dumbbells"
/// }
/// ```
async fn create_plan(
    state: web::Data<AppState>,
    req: web::Json<PlanRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4().to_string();

    match generate_plan(&state.gemini, &req).await {
        Ok(generated) => {
            tracing::info!(
                "Generated plan {} ({} chars, model {})",
                request_id,
                generated.plan.len(),
                state.gemini.model()
            );

            HttpResponse::Ok().json(PlanResponse {
                request_id,
                metrics: generated.metrics,
                plan: generated.plan,
                generated_at: chrono::Utc::now(),
            })
        }
        Err(PlanError::Invalid(fields)) => {
            tracing::info!("Validation failed for plan request {}: {:?}", request_id, fields);
            HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: fields
                    .iter()
                    .map(|f| f.message.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                status_code: 422,
                fields,
            })
        }
        Err(e @ PlanError::Service(_)) => {
            tracing::error!("Plan request {} failed: {}", request_id, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "AI service error".to_string(),
                message: e.to_string(),
                status_code: 502,
                fields: vec![],
            })
        }
    }
}
