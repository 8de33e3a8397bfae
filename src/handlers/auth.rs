//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회, 비밀번호 변경 엔드포인트입니다.
//! 성공 응답은 모두 `status: "success"` 를 포함하며, 토큰을 발급하는 엔드포인트는
//! [`AuthResponse`] 형식을 사용합니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/api/v1/users/signup` | - |
//! | POST | `/api/v1/users/login` | - |
//! | GET | `/api/v1/me` | required |
//! | PATCH | `/api/v1/me/password` | required |

use actix_web::{HttpResponse, get, patch, post, web};
use serde_json::json;

use crate::{
    core::{errors::AppError, registry::ServiceRegistry},
    domain::{
        dto::users::{
            request::{LoginRequest, SignUpRequest, UpdatePasswordRequest},
            response::{AuthResponse, UserResponse},
        },
        models::auth::AuthenticatedUser,
    },
};

/// 회원가입
///
/// 생성된 사용자와 바로 사용할 수 있는 액세스 토큰을 반환합니다 (`201 Created`).
#[post("/signup")]
pub async fn signup(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let user = registry.users.sign_up(payload.into_inner()).await?;
    let token = registry.tokens.generate_access_token(&user)?;

    Ok(HttpResponse::Created().json(AuthResponse::new(user, token)))
}

#[post("/login")]
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = registry.users.login(payload.into_inner()).await?;
    let token = registry.tokens.generate_access_token(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.email, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(AuthResponse::new(user, token)))
}

#[get("")]
pub async fn get_me(
    registry: web::Data<ServiceRegistry>,
    current_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = registry.users.get_user(&current_user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": { "user": UserResponse::from(user) }
    })))
}

/// 비밀번호 변경
///
/// 변경 이전에 발급된 토큰은 더 이상 인증에 사용할 수 없으므로 새 토큰을 함께 반환합니다.
#[patch("/password")]
pub async fn update_password(
    registry: web::Data<ServiceRegistry>,
    current_user: AuthenticatedUser,
    payload: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let user = registry
        .users
        .update_password(&current_user.user_id, payload.into_inner())
        .await?;
    let token = registry.tokens.generate_access_token(&user)?;

    Ok(HttpResponse::Ok().json(AuthResponse::new(user, token)))
}
