//! Admin handlers for testimonials.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::{require_non_blank, validate_input};
use folio_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use folio_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/api/testimonials
///
/// `?q=` searches client name, company and quote.
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::search(&state.pool, params.term()).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /admin/api/testimonials
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    require_non_blank("client_name", &input.client_name)?;
    require_non_blank("quote", &input.quote)?;

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(
        testimonial_id = testimonial.id,
        user_id = staff.user_id,
        "Testimonial created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// GET /admin/api/testimonials/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// PUT /admin/api/testimonials/{id}
pub async fn update(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    tracing::info!(testimonial_id = id, user_id = staff.user_id, "Testimonial updated");
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /admin/api/testimonials/{id}
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(testimonial_id = id, user_id = staff.user_id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
