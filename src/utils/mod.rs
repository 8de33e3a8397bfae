//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 슬러그 생성, 입력 문자열 정리

pub mod string_utils;
