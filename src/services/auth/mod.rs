//! 인증 관련 서비스
//!
//! HS256 JWT 발급과 검증을 제공합니다.

pub mod token_service;

pub use token_service::TokenService;
