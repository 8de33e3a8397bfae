//! Users Entity Module
//!
//! 사용자 엔티티, 역할, 그리고 투어 조회에 쓰이는 가이드 요약을 정의합니다.

pub mod user;

pub use user::{GuideProfile, Role, User};
