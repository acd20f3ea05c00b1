use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, http::header, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{require_any, AuthenticatedUser},
    errors::AppError,
    models::{domain::MaterialKind, domain::Role, dto::request::UploadMaterialForm},
    services::NewMaterial,
};

#[post("/materials/upload")]
async fn upload_material(
    state: web::Data<AppState>,
    form: MultipartForm<UploadMaterialForm>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor])?;

    let form = form.into_inner();
    let kind = MaterialKind::parse_normalized(&form.kind)
        .ok_or_else(|| AppError::Validation(format!("Unknown material type '{}'", *form.kind)))?;

    let material = state
        .material_service
        .upload(NewMaterial {
            title: &form.title,
            kind,
            topic_id: *form.topic_id,
            url: form.url.as_ref().map(|t| t.as_str()),
            file: form
                .file
                .as_ref()
                .map(|f| (f.file.path(), f.file_name.as_deref().unwrap_or("upload"))),
        })
        .await?;
    Ok(HttpResponse::Created().json(material))
}

#[get("/materials/topic/{topicId}")]
async fn get_materials_by_topic(
    state: web::Data<AppState>,
    topic_id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let materials = state.material_service.get_by_topic(&topic_id).await?;
    Ok(HttpResponse::Ok().json(materials))
}

#[get("/materials/download/{fileName}")]
async fn download_material(
    state: web::Data<AppState>,
    file_name: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let path = state.material_service.resolve_download(&file_name)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read stored file: {}", e)))?;

    Ok(HttpResponse::Ok()
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .content_type("application/octet-stream")
        .body(bytes))
}

#[delete("/materials/{id}")]
async fn delete_material(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_any(&auth.0, &[Role::Instructor, Role::Admin])?;

    state.material_service.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
