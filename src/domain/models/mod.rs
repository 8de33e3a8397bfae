//! 요청 처리 중에만 존재하는 인증 모델
//!
//! - [`auth`] - 인증 미들웨어 모드와 현재 사용자 추출자
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
