//! 투어 예약 서비스 백엔드
//!
//! 사용자 가입/인증과 투어 관리를 제공하는 REST API 입니다.
//!
//! # Features
//!
//! - **사용자**: 회원가입, 로그인, 비밀번호 변경 (bcrypt)
//! - **JWT 인증**: HS256 액세스 토큰, 비밀번호 변경 이전 토큰 무효화
//! - **투어**: CRUD, 슬러그 자동 생성, 가이드 참조 채우기, 리뷰 조회
//! - **MongoDB**: unique 인덱스로 이메일/투어 이름 중복 차단
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 역할 제한
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 변환(해시/슬러그) → 저장 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 trait + MongoDB 구현
//! └─────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
