//! # Services
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 저장소 trait(`Arc<dyn ...Store>`)에만 의존하며,
//! [`ServiceRegistry`](crate::core::registry::ServiceRegistry) 를 통해 핸들러에 전달됩니다.
//!
//! - [`UserService`]: 회원가입, 로그인, 비밀번호 변경
//! - [`TourService`]: 투어 CRUD, 가이드 채우기, 리뷰 조회
//! - [`TokenService`]: JWT 발급/검증

pub mod auth;
pub mod tours;
pub mod users;

pub use auth::TokenService;
pub use tours::TourService;
pub use users::UserService;
