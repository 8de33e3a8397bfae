//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let auth_result = authenticate(&req).await;

            match (mode, auth_result) {
                // 토큰이 있었지만 유효하지 않음 (두 모드 공통)
                (_, Err(err)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
                (AuthMode::Required, Ok(None)) => {
                    log::debug!("인증 토큰 없음: {} {}", req.method(), req.path());
                    let response = AppError::AuthenticationError(
                        "로그인이 필요합니다. 인증 토큰을 제공해주세요".to_string(),
                    )
                    .error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
                (AuthMode::Optional, Ok(None)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
                (_, Ok(Some(user))) => {
                    log::debug!("인증 성공: 사용자 ID {} ({})", user.user_id, user.role.as_str());
                    req.extensions_mut().insert(user);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더가 없으면 `Ok(None)`.
///
/// 헤더가 있으면 토큰 검증, 사용자 존재 확인, 비밀번호 변경 여부 확인을 모두 통과해야 합니다.
async fn authenticate(req: &ServiceRequest) -> Result<Option<AuthenticatedUser>, AppError> {
    let Some(auth_header) = req.headers().get("Authorization") else {
        return Ok(None);
    };

    let registry = req
        .app_data::<web::Data<ServiceRegistry>>()
        .ok_or_else(|| AppError::InternalError("ServiceRegistry 가 등록되지 않았습니다".to_string()))?;

    let auth_header = auth_header.to_str().map_err(|_| {
        AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
    })?;

    let token = registry.tokens.extract_bearer_token(auth_header)?;
    let claims = registry.tokens.verify_token(token)?;

    let user = match registry.users.get_user(&claims.sub).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) | Err(AppError::ValidationError(_)) => {
            return Err(AppError::AuthenticationError(
                "이 토큰의 사용자가 더 이상 존재하지 않습니다".to_string(),
            ));
        }
        Err(e) => return Err(e),
    };

    if user.changed_password_after(claims.iat) {
        return Err(AppError::AuthenticationError(
            "최근에 비밀번호가 변경되었습니다. 다시 로그인해주세요".to_string(),
        ));
    }

    Ok(Some(AuthenticatedUser::from_user(&user, claims.iat)))
}
