use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::UserResponse,
    },
};

#[post("/auth/register")]
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let user = state.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[post("/auth/login")]
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
