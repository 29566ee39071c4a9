//! 测试 token 签发：claims 构造与 HS256 签名。

mod claims;
mod jwt;
pub mod secrets;

use domain::{Audience, UserIdentity};
use std::time::Duration;

pub use claims::{ClaimBuilder, ClaimSet};
pub use jwt::TokenSigner;

/// 签发相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("validity must be at least one second, got {0:?}")]
    InvalidValidity(Duration),
    #[error("claims built for {actual} cannot be signed by the {expected} signer")]
    AudienceMismatch { expected: Audience, actual: Audience },
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

/// 一次签发结果。
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub audience: Audience,
    pub token: String,
    pub claims: ClaimSet,
}

/// 同一身份的 access/refresh token。
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// 按受众选择密钥的签发器。
pub struct FixtureIssuer {
    access: TokenSigner,
    refresh: TokenSigner,
}

impl FixtureIssuer {
    /// 创建签发器（使用固定密钥）。
    pub fn new() -> Self {
        Self::with_signers(
            TokenSigner::for_audience(Audience::Access),
            TokenSigner::for_audience(Audience::Refresh),
        )
    }

    pub fn with_signers(access: TokenSigner, refresh: TokenSigner) -> Self {
        Self { access, refresh }
    }

    pub fn signer(&self, audience: Audience) -> &TokenSigner {
        match audience {
            Audience::Access => &self.access,
            Audience::Refresh => &self.refresh,
        }
    }

    /// 确认签名器与所在槽位的受众一致，并依次做签发/解码自检。
    pub fn self_check(&self) -> Result<(), AuthError> {
        let slots = [
            (Audience::Access, &self.access),
            (Audience::Refresh, &self.refresh),
        ];
        for (expected, signer) in slots {
            if signer.audience() != expected {
                return Err(AuthError::AudienceMismatch {
                    expected,
                    actual: signer.audience(),
                });
            }
            signer.self_check()?;
        }
        Ok(())
    }

    /// 构造 claims 并用对应受众的密钥签名。
    pub fn issue(
        &self,
        user: &UserIdentity,
        audience: Audience,
        validity: Duration,
    ) -> Result<IssuedToken, AuthError> {
        let claims = ClaimBuilder::new(audience, validity).build(user)?;
        self.sign_claims(claims)
    }

    /// 签发同一身份的 access 与 refresh token。
    pub fn issue_pair(
        &self,
        user: &UserIdentity,
        access_validity: Duration,
        refresh_validity: Duration,
    ) -> Result<TokenPair, AuthError> {
        let access = self.issue(user, Audience::Access, access_validity)?;
        let refresh = self.issue(user, Audience::Refresh, refresh_validity)?;
        Ok(TokenPair { access, refresh })
    }

    fn sign_claims(&self, claims: ClaimSet) -> Result<IssuedToken, AuthError> {
        let audience = claims.audience();
        let token = self.signer(audience).sign(&claims)?;
        tracing::debug!(
            audience = %audience,
            sub = claims.subject(),
            role = %claims.role(),
            exp = claims.expires_at(),
            "token issued"
        );
        Ok(IssuedToken {
            audience,
            token,
            claims,
        })
    }
}

impl Default for FixtureIssuer {
    fn default() -> Self {
        Self::new()
    }
}
