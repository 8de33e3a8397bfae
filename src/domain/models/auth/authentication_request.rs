/// 인증 미들웨어 동작 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 토큰이 없으면 401
    Required,
    /// 토큰이 없으면 익명 요청으로 통과. 토큰이 있으면 반드시 유효해야 합니다.
    Optional,
}
