use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_any, AuthenticatedUser},
    errors::AppError,
    models::{domain::Role, dto::request::CreateSubjectRequest},
};

#[post("/subjects")]
async fn create_subject(
    state: web::Data<AppState>,
    request: web::Json<CreateSubjectRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;
    request.validate()?;

    let subject = state
        .subject_service
        .create_subject(request.into_inner(), auth.0.sub)
        .await?;
    Ok(HttpResponse::Created().json(subject))
}

#[get("/subjects")]
async fn get_all_subjects(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let subjects = state.subject_service.get_all_subjects().await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[get("/subjects/course/{courseId}")]
async fn get_subjects_by_course(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let subjects = state
        .subject_service
        .get_subjects_by_course(&course_id)
        .await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[delete("/subjects/{id}")]
async fn delete_subject(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    state.subject_service.delete_subject(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
