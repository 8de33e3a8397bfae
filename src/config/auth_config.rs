use std::env;

/// JWT 발급/검증 설정
///
/// ## 환경 변수
/// - `JWT_SECRET`: HS256 서명 키
/// - `JWT_EXPIRATION_HOURS`: 액세스 토큰 만료 시간 (기본값 24시간)
pub struct JwtConfig;

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        Self::parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    pub fn parse_expiration_hours(raw: Option<&str>) -> i64 {
        raw.and_then(|value| value.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_HOURS)
    }
}
