//! 인증 요청관련 DTO
//!
//! 로그인과 비밀번호 변경 요청을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

use super::signup_request::check_password_pair;
use crate::core::errors::{AppError, AppResult, FieldViolation};

/// 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl LoginRequest {
    /// 저장 형식과 같은 소문자 이메일
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// 비밀번호 변경 요청
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(required(message = "현재 비밀번호는 필수입니다"))]
    pub password_current: Option<String>,

    #[validate(required(message = "새 비밀번호는 필수입니다"))]
    pub password: Option<String>,

    #[validate(required(message = "비밀번호 확인은 필수입니다"))]
    pub confirm_password: Option<String>,
}

/// 검증을 통과한 비밀번호 변경 값
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub current: String,
    pub new_password: String,
}

impl UpdatePasswordRequest {
    /// 새 비밀번호 쌍을 회원가입과 같은 규칙으로 검증합니다.
    pub fn into_password_change(self, min_password_length: u64) -> AppResult<PasswordChange> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldViolation::from_validation_errors(&errors),
        };

        check_password_pair(
            self.password.as_deref(),
            self.confirm_password.as_deref(),
            min_password_length,
            &mut violations,
        );

        if !violations.is_empty() {
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(AppError::InvalidFields(violations));
        }

        let (Some(current), Some(new_password)) = (self.password_current, self.password) else {
            return Err(AppError::InternalError(
                "검증을 통과한 비밀번호 변경 요청에 필수 값이 없습니다".to_string(),
            ));
        };

        Ok(PasswordChange {
            current,
            new_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_email_is_normalized() {
        let request = LoginRequest {
            email: " Admin@Natours.IO ".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(request.normalized_email(), "admin@natours.io");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest {
            email: String::new(),
            password: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_password_change_requires_matching_pair() {
        let request = UpdatePasswordRequest {
            password_current: Some("old-password".to_string()),
            password: Some("new-password".to_string()),
            confirm_password: Some("new-passw0rd".to_string()),
        };

        match request.into_password_change(8) {
            Err(AppError::InvalidFields(violations)) => {
                assert_eq!(violations[0].field, "confirmPassword");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_password_change_missing_current() {
        let request = UpdatePasswordRequest {
            password_current: None,
            password: Some("new-password".to_string()),
            confirm_password: Some("new-password".to_string()),
        };

        match request.into_password_change(8) {
            Err(AppError::InvalidFields(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "passwordCurrent");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_password_change() {
        let request: UpdatePasswordRequest = serde_json::from_str(
            r#"{"passwordCurrent":"old-password","password":"new-password","confirmPassword":"new-password"}"#,
        )
        .unwrap();

        let change = request.into_password_change(8).unwrap();
        assert_eq!(change.current, "old-password");
        assert_eq!(change.new_password, "new-password");
    }
}
