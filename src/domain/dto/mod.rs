//! # Data Transfer Objects
//!
//! API 경계의 요청/응답 구조입니다. 요청 DTO 는 검증을 거쳐 도메인 값으로 변환되고,
//! 응답 DTO 는 엔티티에서 노출 가능한 필드만 골라 camelCase JSON 으로 직렬화됩니다.

pub mod tours;
pub mod users;

pub use tours::{GuideSummary, ReviewResponse, TourDraft, TourResponse};
pub use users::{
    AuthResponse, LoginRequest, NewUser, PasswordChange, SignUpRequest, UpdatePasswordRequest,
    UserResponse,
};
