//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 비밀번호 정책, Rate Limiting
//! - [`auth_config`] - JWT 설정
//!
//! 각 설정은 환경 변수를 읽는 함수와 순수 파싱 함수(`parse_*`)로 나뉘어 있어
//! 파싱 규칙은 환경 변수 없이 테스트할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, JwtConfig, PasswordConfig, ServerConfig};
//!
//! let env = Environment::current();
//! dotenv::from_filename(env.env_file()).ok();
//!
//! let bind_address = ServerConfig::bind_address();
//! let policy = PasswordConfig::policy();
//! let secret = JwtConfig::secret();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export PROFILE="dev"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="tour_booking"
//!
//! # JWT
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 비밀번호 정책
//! export USER_PASSWORD_LENGTH="8"
//! export BCRYPT_COST="12"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
