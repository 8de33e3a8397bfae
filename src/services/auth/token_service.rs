//! JWT 토큰 관리 서비스 구현
//!
//! HS256 액세스 토큰의 발급, 검증, `Authorization` 헤더 파싱을 담당합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::{entities::users::User, models::token::TokenClaims},
};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 현재 시각을 `iat` 로 하는 액세스 토큰을 발급합니다.
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        self.generate_access_token_at(user, Utc::now())
    }

    pub(crate) fn generate_access_token_at(
        &self,
        user: &User,
        issued_at: DateTime<Utc>,
    ) -> AppResult<String> {
        let expiration = issued_at + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다. 모든 실패는 인증 에러입니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use mongodb::bson::oid::ObjectId;

    fn saved_user() -> User {
        let mut user = User::new(
            "Lead".to_string(),
            "lead@example.com".to_string(),
            None,
            Role::LeadGuide,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_generate_and_verify() {
        let service = TokenService::new("test-secret", 1);
        let user = saved_user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.role, Role::LeadGuide);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-a", 1);
        let verifier = TokenService::new("secret-b", 1);
        let token = issuer.generate_access_token(&saved_user()).unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret", 1);
        let issued_at = Utc::now() - Duration::hours(3);
        let token = service
            .generate_access_token_at(&saved_user(), issued_at)
            .unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected expiry error, got {:?}", other),
        }
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        let service = TokenService::new("test-secret", 1);
        let user = User::new("N".to_string(), "n@example.com".to_string(), None, Role::User);

        assert!(matches!(
            service.generate_access_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("test-secret", 1);

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
