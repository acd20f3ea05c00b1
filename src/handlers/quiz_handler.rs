use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_any, require_owner_or_admin, require_role, AuthenticatedUser},
    errors::AppError,
    models::{
        domain::Role,
        dto::request::{GenerateQuizRequest, SubmitAttemptRequest},
    },
};

#[post("/quizzes/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, Role::Instructor)?;
    request.validate()?;

    let quiz = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

/// Full quizzes, answers included. Management view only.
#[get("/quizzes")]
async fn get_all_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    let quizzes = state.quiz_service.get_all_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

/// Summaries without questions; safe for the student lobby.
#[get("/quizzes/all")]
async fn get_quiz_summaries(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summaries = state.quiz_service.get_quiz_summaries().await?;
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/quizzes/topic/{topicId}")]
async fn get_quizzes_by_topic(
    state: web::Data<AppState>,
    topic_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    let quizzes = state.quiz_service.get_quizzes_by_topic(&topic_id).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quizzes/public/{displayId}")]
async fn get_quiz_by_display_id(
    state: web::Data<AppState>,
    display_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, Role::Student)?;

    let quiz = state
        .quiz_service
        .get_quiz_by_display_id(&display_id)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/submit-attempt")]
async fn submit_attempt(
    state: web::Data<AppState>,
    request: web::Json<SubmitAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, Role::Student)?;
    // Students submit under their own id regardless of the payload.
    require_owner_or_admin(&auth.0, request.user_id)?;

    let attempt = state.quiz_service.save_attempt(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(attempt))
}

#[get("/quizzes/user-attempts/{userId}")]
async fn get_user_attempts(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner_or_admin(&auth.0, *user_id)?;

    let attempts = state.quiz_service.get_attempts_by_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/quizzes/attempts")]
async fn get_all_attempts(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    let attempts = state.quiz_service.get_all_attempts().await?;
    Ok(HttpResponse::Ok().json(attempts))
}
