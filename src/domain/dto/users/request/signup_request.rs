//! 회원가입 요청 DTO
//!
//! 필드 규칙은 `validator` derive 로 선언하고, 설정값(최소 비밀번호 길이)에
//! 의존하거나 필드 간 비교가 필요한 규칙은 [`SignUpRequest::into_new_user`] 에서
//! 명시적으로 검사합니다. 모든 위반은 하나의 `InvalidFields` 로 보고됩니다.

use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, FieldViolation};
use crate::domain::entities::users::Role;
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 요청
///
/// 누락된 필드를 역직렬화 에러가 아닌 필드 위반으로 보고하기 위해 모든 필드가 `Option` 입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(
        required(message = "이름은 필수입니다"),
        length(min = 1, message = "이름은 필수입니다")
    )]
    pub name: Option<String>,

    /// 로그인과 같은 값으로 비교되도록 검증 전에 앞뒤 공백을 제거합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "이메일은 필수입니다"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo: Option<String>,

    #[validate(required(message = "비밀번호는 필수입니다"))]
    pub password: Option<String>,

    /// password 와 일치해야 하며 저장되지 않습니다.
    #[validate(required(message = "비밀번호 확인은 필수입니다"))]
    pub confirm_password: Option<String>,

    pub role: Option<String>,
}

/// 검증을 통과한 회원가입 값
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    /// 소문자로 정규화된 이메일
    pub email: String,
    pub photo: Option<String>,
    pub role: Role,
    /// 해시 전 평문 비밀번호
    pub password: String,
}

impl SignUpRequest {
    /// 요청을 검증하고 [`NewUser`] 로 변환합니다.
    ///
    /// # Errors
    ///
    /// 위반이 하나라도 있으면 필드 이름 순으로 정렬된 `AppError::InvalidFields`.
    pub fn into_new_user(self, min_password_length: u64) -> AppResult<NewUser> {
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

        let role = match self.role.as_deref() {
            None => Role::default(),
            Some(raw) => Role::parse(raw).unwrap_or_else(|| {
                violations.push(FieldViolation::new(
                    "role",
                    format!("허용되지 않는 역할입니다: {}", raw),
                ));
                Role::default()
            }),
        };

        if !violations.is_empty() {
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(AppError::InvalidFields(violations));
        }

        let (Some(name), Some(email), Some(password)) = (self.name, self.email, self.password)
        else {
            return Err(AppError::InternalError(
                "검증을 통과한 회원가입 요청에 필수 값이 없습니다".to_string(),
            ));
        };

        Ok(NewUser {
            name,
            email: email.to_lowercase(),
            photo: self.photo,
            role,
            password,
        })
    }
}

/// 비밀번호 최소 길이와 확인 값 일치 여부를 검사합니다.
///
/// 누락은 `required` 규칙이 보고하므로 여기서는 값이 있는 경우만 검사합니다.
pub(crate) fn check_password_pair(
    password: Option<&str>,
    confirm_password: Option<&str>,
    min_length: u64,
    violations: &mut Vec<FieldViolation>,
) {
    if let Some(password) = password {
        if (password.chars().count() as u64) < min_length {
            violations.push(FieldViolation::new(
                "password",
                format!("비밀번호는 최소 {}자 이상이어야 합니다", min_length),
            ));
        }
    }

    if let (Some(password), Some(confirm)) = (password, confirm_password) {
        if password != confirm {
            violations.push(FieldViolation::new(
                "confirmPassword",
                "비밀번호가 일치하지 않습니다",
            ));
        }
    }
}
