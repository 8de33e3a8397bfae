//! Tour HTTP Handlers
//!
//! `/api/v1/tours` 스코프는 선택적 인증 미들웨어로 감싸져 있습니다.
//! 조회는 익명으로 가능하고, 변경 작업은 `admin`, `lead-guide` 역할만 허용됩니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::json;

use crate::{
    core::{errors::AppError, registry::ServiceRegistry},
    domain::{
        dto::tours::request::TourDraft,
        entities::users::Role,
        models::auth::AuthenticatedUser,
    },
};

const TOUR_MANAGERS: [Role; 2] = [Role::Admin, Role::LeadGuide];

#[get("")]
pub async fn list_tours(registry: web::Data<ServiceRegistry>) -> Result<HttpResponse, AppError> {
    let tours = registry.tours.list_tours().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "results": tours.len(),
        "data": { "tours": tours }
    })))
}

#[get("/{id}")]
pub async fn get_tour(
    registry: web::Data<ServiceRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let tour = registry.tours.get_tour(&path).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": { "tour": tour }
    })))
}

#[post("")]
pub async fn create_tour(
    registry: web::Data<ServiceRegistry>,
    current_user: AuthenticatedUser,
    payload: web::Json<TourDraft>,
) -> Result<HttpResponse, AppError> {
    current_user.restrict_to(&TOUR_MANAGERS)?;

    let tour = registry.tours.create_tour(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "tour": tour }
    })))
}

#[patch("/{id}")]
pub async fn update_tour(
    registry: web::Data<ServiceRegistry>,
    current_user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<TourDraft>,
) -> Result<HttpResponse, AppError> {
    current_user.restrict_to(&TOUR_MANAGERS)?;

    let tour = registry
        .tours
        .update_tour(&path, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": { "tour": tour }
    })))
}

#[delete("/{id}")]
pub async fn delete_tour(
    registry: web::Data<ServiceRegistry>,
    current_user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    current_user.restrict_to(&TOUR_MANAGERS)?;

    registry.tours.delete_tour(&path).await?;
    log::info!("투어 삭제 요청 처리: {} by {}", path, current_user.user_id);

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{id}/reviews")]
pub async fn get_tour_reviews(
    registry: web::Data<ServiceRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reviews = registry.tours.reviews_for_tour(&path).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "results": reviews.len(),
        "data": { "reviews": reviews }
    })))
}
