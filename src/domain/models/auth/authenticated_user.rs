use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::core::errors::AppError;
use crate::domain::entities::users::{Role, User};

/// 인증 미들웨어가 요청 extensions 에 넣는 현재 사용자
///
/// 토큰 검증 후 저장소에서 다시 읽은 사용자이므로 역할은 현재 저장된 값입니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// 인증에 사용된 토큰의 발급 시간
    pub issued_at: i64,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User, issued_at: i64) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            issued_at,
        }
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// 허용된 역할이 아니면 403
    ///
    /// ```rust,ignore
    /// user.restrict_to(&[Role::Admin, Role::LeadGuide])?;
    /// ```
    pub fn restrict_to(&self, roles: &[Role]) -> Result<(), AppError> {
        if self.has_any_role(roles) {
            Ok(())
        } else {
            log::warn!(
                "권한 부족: user={} role={} 요구={:?}",
                self.user_id,
                self.role.as_str(),
                roles
            );
            Err(AppError::AuthorizationError(
                "이 작업을 수행할 권한이 없습니다".to_string(),
            ))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "로그인이 필요합니다".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "5c8a22c62f8fb814b56fa18b".to_string(),
            name: "Steve".to_string(),
            email: "steve@example.com".to_string(),
            role: Role::Guide,
            issued_at: 0,
        }
    }

    #[test]
    fn test_restrict_to() {
        let user = guide();

        assert!(user.restrict_to(&[Role::Guide, Role::LeadGuide]).is_ok());
        assert!(matches!(
            user.restrict_to(&[Role::Admin, Role::LeadGuide]),
            Err(AppError::AuthorizationError(_))
        ));
    }
}
