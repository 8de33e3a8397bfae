//! # Core
//!
//! 애플리케이션 전역 에러 타입과 서비스 조립을 담당합니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
