//! # Routes
//!
//! 모든 HTTP 라우트를 등록합니다.
//!
//! ```text
//! /health
//! /api/v1/users   signup, login
//! /api/v1/me      [required]  GET, PATCH /password
//! /api/v1/tours   [optional]  CRUD, /{id}/reviews
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_tour_routes(cfg);
}

/// 잘못된 JSON 본문은 400 검증 에러로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::auth::signup)
            .service(handlers::auth::login),
    );

    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::get_me)
            .service(handlers::auth::update_password),
    );
}

fn configure_tour_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tours")
            .wrap(AuthMiddleware::optional())
            .service(handlers::tours::list_tours)
            .service(handlers::tours::create_tour)
            .service(handlers::tours::get_tour_reviews)
            .service(handlers::tours::get_tour)
            .service(handlers::tours::update_tour)
            .service(handlers::tours::delete_tour),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "tour_booking_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "authentication": "JWT (HS256)"
        }
    }))
}
