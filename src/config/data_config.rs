//! 데이터/서버/비밀번호 정책 관련 설정
//!
//! 모든 설정값은 환경 변수에서 읽으며, 파싱 로직은 `parse_*` 함수로 분리해
//! 환경 변수를 건드리지 않고도 테스트할 수 있도록 했습니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` (없으면 `PROFILE`) 환경 변수로 현재 환경을 결정합니다.
    ///
    /// 둘 다 없으면 개발 환경으로 간주합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .unwrap_or_else(|_| "dev".to_string());

        Self::from_str(&raw)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별로 로드할 `.env` 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env.dev",
            Environment::Test => ".env.test",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.prod",
        }
    }
}

/// 비밀번호 정책 설정
///
/// ## 환경 변수
/// - `USER_PASSWORD_LENGTH`: 최소 비밀번호 길이 (기본값 8)
/// - `BCRYPT_COST`: bcrypt cost (기본값 12, 허용 범위 4-31)
pub struct PasswordConfig;

impl PasswordConfig {
    pub const DEFAULT_MIN_LENGTH: u64 = 8;
    pub const DEFAULT_BCRYPT_COST: u32 = 12;

    pub fn min_length() -> u64 {
        Self::parse_min_length(env::var("USER_PASSWORD_LENGTH").ok().as_deref())
    }

    pub fn parse_min_length(raw: Option<&str>) -> u64 {
        raw.and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_MIN_LENGTH)
    }

    pub fn bcrypt_cost() -> u32 {
        Self::parse_bcrypt_cost(env::var("BCRYPT_COST").ok().as_deref())
    }

    /// bcrypt 가 허용하지 않는 cost 는 기본값으로 대체합니다.
    pub fn parse_bcrypt_cost(raw: Option<&str>) -> u32 {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(Self::DEFAULT_BCRYPT_COST)
    }

    /// 현재 환경 변수로 [`PasswordPolicy`] 를 구성합니다.
    pub fn policy() -> PasswordPolicy {
        PasswordPolicy {
            min_length: Self::min_length(),
            bcrypt_cost: Self::bcrypt_cost(),
        }
    }
}

/// 사용자 서비스에 주입되는 비밀번호 정책 값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// 최소 비밀번호 길이 (문자 수)
    pub min_length: u64,
    /// bcrypt cost
    pub bcrypt_cost: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: PasswordConfig::DEFAULT_MIN_LENGTH,
            bcrypt_cost: PasswordConfig::DEFAULT_BCRYPT_COST,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "tour_booking_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` 에서 읽습니다.
    pub fn from_env() -> Self {
        Self::parse(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    pub fn parse(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PER_SECOND);
                    Self::DEFAULT_PER_SECOND
                })
            })
            .unwrap_or(Self::DEFAULT_PER_SECOND);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_BURST_SIZE);
                    Self::DEFAULT_BURST_SIZE
                })
            })
            .unwrap_or(Self::DEFAULT_BURST_SIZE);

        Self {
            per_second,
            burst_size,
        }
    }
}
