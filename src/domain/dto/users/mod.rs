//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API 의 요청/응답 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── signup_request.rs  # 회원가입 (SignUpRequest → NewUser)
//! │   └── auth_request.rs    # 로그인, 비밀번호 변경
//! └── response/
//!     └── user_response.rs   # UserResponse, AuthResponse
//! ```
//!
//! 요청 DTO 는 검증 후 도메인 값(`NewUser`, `PasswordChange`)으로 변환되며,
//! 응답 DTO 는 비밀번호 관련 필드를 갖지 않습니다.
//!
//! ## 회원가입 응답 예제
//! ```json
//! {
//!   "status": "success",
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "name": "Test User",
//!     "email": "test@example.com",
//!     "role": "user"
//!   }
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
