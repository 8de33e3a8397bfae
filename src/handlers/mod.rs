//! # HTTP Handlers
//!
//! - [`auth`]: 회원가입, 로그인, 현재 사용자, 비밀번호 변경
//! - [`tours`]: 투어 CRUD 와 리뷰 조회
//!
//! 모든 핸들러는 `web::Data<ServiceRegistry>` 로 서비스에 접근하고 `AppError` 를 반환합니다.

pub mod auth;
pub mod tours;
