use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::models::{FieldError, PlanForm, PlanRequest};
use crate::render;
use crate::routes::plan::{generate_plan, AppState, PlanError};

/// Configure browser-facing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/plan", web::post().to(submit_plan));
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Empty form with default values
async fn index() -> impl Responder {
    html(StatusCode::OK, render::form_page(&PlanRequest::default(), &[]))
}

/// Form submission
///
/// POST /plan (application/x-www-form-urlencoded)
async fn submit_plan(
    state: web::Data<AppState>,
    form: web::Form<PlanForm>,
) -> impl Responder {
    let request = match form.into_inner().into_request() {
        Ok(request) => request,
        Err((shown, fields)) => return rejected(&shown, &fields),
    };

    match generate_plan(&state.gemini, &request).await {
        Ok(generated) => html(
            StatusCode::OK,
            render::result_page(&request, &generated.metrics, &generated.plan),
        ),
        Err(PlanError::Invalid(fields)) => rejected(&request, &fields),
        Err(PlanError::Service(e)) => {
            tracing::error!("AI service error: {}", e);
            html(
                StatusCode::BAD_GATEWAY,
                render::service_error_page(&request, &e.to_string()),
            )
        }
    }
}

fn rejected(request: &PlanRequest, fields: &[FieldError]) -> HttpResponse {
    tracing::info!("Form rejected: {} invalid field(s)", fields.len());
    html(StatusCode::UNPROCESSABLE_ENTITY, render::form_page(request, fields))
}
