use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_any, AuthenticatedUser},
    errors::AppError,
    models::{domain::Role, dto::request::CreateCourseRequest},
};

#[post("/courses")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor])?;
    request.validate()?;

    let course = state
        .course_service
        .create_course(request.into_inner(), auth.0.sub)
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/courses")]
async fn get_all_courses(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.get_all_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/courses/{id}")]
async fn delete_course(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    state.course_service.delete_course(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
