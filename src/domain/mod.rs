//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 엔티티 (User, Tour, Review)
//! ├── dto       - 요청/응답 계약과 요청 검증
//! └── models    - 인증 과정에서만 쓰이는 모델 (JWT 클레임, 현재 사용자)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! 요청은 `dto` 에서 검증되어 `entities` 의 값(`NewUser`, `TourFields`)으로 바뀐 뒤
//! 서비스 계층으로 전달됩니다. 엔티티는 검증 규칙을 알지 못하고,
//! 저장 직전 단계(비밀번호 해시, 슬러그)만 담당합니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use entities::{GuideProfile, Review, Role, Tour, User};
pub use models::{AuthMode, AuthenticatedUser, TokenClaims};
