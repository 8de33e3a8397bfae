//! JWT 클레임 구조체
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::Role;

/// JWT 토큰의 클레임(Payload)
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `role`: 발급 시점의 역할
/// - `iat`: 발급 시간 (Unix timestamp, 초). 비밀번호 변경 여부 판단에 사용됩니다.
/// - `exp`: 만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
