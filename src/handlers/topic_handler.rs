use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{require_any, AuthenticatedUser},
    errors::AppError,
    models::{domain::Role, domain::TopicKind, dto::request::CreateTopicForm},
    services::NewTopic,
};

#[post("/topics")]
async fn create_topic(
    state: web::Data<AppState>,
    form: MultipartForm<CreateTopicForm>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    let form = form.into_inner();
    let kind = TopicKind::parse_normalized(&form.kind)
        .ok_or_else(|| AppError::Validation(format!("Unknown topic type '{}'", *form.kind)))?;

    let topic = state
        .topic_service
        .create_topic(NewTopic {
            name: &form.name,
            kind,
            subject_id: *form.subject_id,
            content: form.content.as_ref().map(|t| t.as_str()),
            url: form.url.as_ref().map(|t| t.as_str()),
            file: form
                .file
                .as_ref()
                .map(|f| (f.file.path(), f.file_name.as_deref().unwrap_or("upload"))),
        })
        .await?;
    Ok(HttpResponse::Created().json(topic))
}

#[get("/topics")]
async fn get_all_topics(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let topics = state.topic_service.get_all_topics().await?;
    Ok(HttpResponse::Ok().json(topics))
}

#[get("/topics/subject/{subjectId}")]
async fn get_topics_by_subject(
    state: web::Data<AppState>,
    subject_id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let topics = state
        .topic_service
        .get_topics_by_subject(&subject_id)
        .await?;
    Ok(HttpResponse::Ok().json(topics))
}

#[delete("/topics/{id}")]
async fn delete_topic(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    state.topic_service.delete_topic(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
