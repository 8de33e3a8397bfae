//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 에러 타입과 HTTP 응답 변환을 정의합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON 본문, 잘못된 ID 형식 |
//! | `InvalidFields` | 400 Bad Request | 필드 단위 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 만료/무효 |
//! | `AuthorizationError` | 403 Forbidden | 역할 제한 위반 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | unique 인덱스 위반 (이메일, 투어 이름) |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "status": "fail",
//!   "error": "Validation failed: confirmPassword",
//!   "details": [
//!     { "field": "confirmPassword", "message": "비밀번호가 일치하지 않습니다" }
//!   ]
//! }
//! ```
//!
//! `status` 는 4xx 에서 `"fail"`, 5xx 에서 `"error"` 입니다.
//! `details` 는 `InvalidFields` 에만 포함됩니다.

use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 필드 단위 검증 위반
///
/// `field` 는 요청 JSON 에서 사용하는 camelCase 이름입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// `validator` 의 필드 에러를 필드 이름 순으로 정렬된 위반 목록으로 변환합니다.
    ///
    /// 메시지가 지정되지 않은 규칙은 규칙 코드(`required`, `length` 등)를 메시지로 사용합니다.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = to_camel_case(field.as_ref());
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldViolation::new(field.clone(), message)
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }
}

/// `max_group_size` → `maxGroupSize`. 이미 camelCase 인 이름은 그대로 둡니다.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

fn join_fields(violations: &[FieldViolation]) -> String {
    let mut fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    fields.dedup();
    fields.join(", ")
}

/// 애플리케이션 전역 에러 타입
///
/// `actix_web::ResponseError` 를 구현하므로 핸들러에서 `?` 로 그대로 전파하면
/// 상태 코드와 JSON 본문이 결정됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패 (duplicate key 제외)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 단일 메시지 검증 에러
    ///
    /// JSON 파싱 실패나 경로 파라미터 형식 오류처럼 특정 필드에 묶이지 않는 경우에 사용합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러 목록
    ///
    /// # 예제
    /// ```rust,ignore
    /// return Err(AppError::InvalidFields(vec![
    ///     FieldViolation::new("confirmPassword", "비밀번호가 일치하지 않습니다"),
    /// ]));
    /// ```
    #[error("Validation failed: {}", join_fields(.0))]
    InvalidFields(Vec<FieldViolation>),

    #[error("Not found: {0}")]
    NotFound(String),

    /// unique 인덱스 위반 등 기존 데이터와의 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패
    ///
    /// - 잘못된 이메일/비밀번호
    /// - 만료되었거나 서명이 잘못된 JWT
    /// - 토큰 발급 이후 비밀번호가 변경된 경우
    /// - 토큰 소유자가 삭제된 경우
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증은 되었으나 역할이 부족한 경우
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 쓰기 연산의 MongoDB 에러를 변환합니다.
    ///
    /// duplicate key(11000) 는 `conflict_message` 를 담은 [`AppError::ConflictError`] 로,
    /// 나머지는 [`AppError::DatabaseError`] 로 변환됩니다.
    pub fn from_write_error(err: mongodb::error::Error, conflict_message: &str) -> Self {
        if is_duplicate_key(&err) {
            AppError::ConflictError(conflict_message.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

/// MongoDB 에러가 unique 인덱스 위반인지 확인합니다.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidFields(FieldViolation::from_validation_errors(&errors))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let mut body = serde_json::json!({
            "status": if status.is_server_error() { "error" } else { "fail" },
            "error": self.to_string(),
        });

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        if let AppError::InvalidFields(violations) = self {
            body["details"] = serde_json::json!(violations);
        }

        actix_web::HttpResponse::build(status).json(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError` 로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(plain, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use validator::{Validate, ValidationError};

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "너무 짧습니다"))]
        max_group_size: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidFields(vec![]), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("x".into()), StatusCode::CONFLICT),
            (AppError::AuthenticationError("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::AuthorizationError("x".into()), StatusCode::FORBIDDEN),
            (AppError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{}", error);
        }
    }

    #[actix_web::test]
    async fn test_invalid_fields_body_carries_details() {
        let error = AppError::InvalidFields(vec![FieldViolation::new(
            "confirmPassword",
            "비밀번호가 일치하지 않습니다",
        )]);

        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "fail");
        assert_eq!(json["details"][0]["field"], "confirmPassword");
        assert_eq!(json["details"][0]["message"], "비밀번호가 일치하지 않습니다");
    }

    #[actix_web::test]
    async fn test_server_error_body_status() {
        let error = AppError::DatabaseError("connection reset".into());

        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "error");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_validation_errors_become_sorted_camel_case_violations() {
        let sample = Sample {
            max_group_size: "a".into(),
            name: String::new(),
        };

        let violations = FieldViolation::from_validation_errors(&sample.validate().unwrap_err());

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("maxGroupSize", "너무 짧습니다"),
                FieldViolation::new("name", "length"),
            ]
        );
    }

    #[test]
    fn test_from_validation_errors_conversion() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("required"));

        match AppError::from(errors) {
            AppError::InvalidFields(violations) => {
                assert_eq!(violations, vec![FieldViolation::new("email", "required")]);
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_camel_case_conversion() {
        assert_eq!(to_camel_case("max_group_size"), "maxGroupSize");
        assert_eq!(to_camel_case("priceDiscount"), "priceDiscount");
        assert_eq!(to_camel_case("name"), "name");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
