use serde::{Deserialize, Serialize};

/// JWT 페이로드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
