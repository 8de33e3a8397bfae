use serde::Serialize;

use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 확인 값은 필드 자체가 없으므로 어떤 경우에도 응답에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub role: Role,
    /// RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_changed_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            photo,
            role,
            password_changed_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            photo,
            role,
            password_changed_at: password_changed_at.and_then(|at| at.try_to_rfc3339_string().ok()),
        }
    }
}

/// 토큰을 발급하는 응답 (회원가입, 로그인, 비밀번호 변경)
///
/// ```json
/// { "status": "success", "token": "eyJ...", "user": { ... } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub status: &'static str,
    pub token: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            status: "success",
            token,
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, oid::ObjectId};

    #[test]
    fn test_user_response_omits_password() {
        let mut user = User::new(
            "Jonas".to_string(),
            "jonas@example.com".to_string(),
            Some("user-1.jpg".to_string()),
            Role::Guide,
        );
        user.id = Some(ObjectId::new());
        user.password = Some("$2b$04$hash".to_string());
        user.password_changed_at = Some(DateTime::from_millis(0));

        let json = serde_json::to_value(AuthResponse::new(user, "token".to_string())).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["user"]["role"], "guide");
        assert_eq!(json["user"]["passwordChangedAt"], "1970-01-01T00:00:00Z");
        assert!(json["user"].get("password").is_none());
        assert!(json["user"].get("confirmPassword").is_none());
    }
}
