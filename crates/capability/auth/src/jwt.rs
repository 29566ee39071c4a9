use crate::claims::{ClaimBuilder, ClaimSet};
use crate::{AuthError, secrets};
use domain::{Audience, Role, UserIdentity};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// 单一受众的 HS256 签名器。
pub struct TokenSigner {
    audience: Audience,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    /// 使用指定密钥创建签名器。
    pub fn new(audience: Audience, secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();
        Self {
            audience,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// 使用被测服务部署配置中的固定密钥。
    pub fn for_audience(audience: Audience) -> Self {
        Self::new(audience, secrets::secret_for(audience))
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// 签名 claims；同一 claims 与密钥总是得到相同的 token。
    pub fn sign(&self, claims: &ClaimSet) -> Result<String, AuthError> {
        claims.check_invariants(self.audience)?;
        jsonwebtoken::encode(&Header::new(SIGNING_ALGORITHM), claims, &self.encoding)
            .map_err(|err| AuthError::Internal(err.to_string()))
    }

    /// 校验签名与过期时间并还原 claims。
    pub fn decode(&self, token: &str) -> Result<ClaimSet, AuthError> {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = true;
        let decoded = jsonwebtoken::decode::<ClaimSet>(token, &self.decoding, &validation)
            .map_err(map_jwt_error)?;
        // 外部 token 的受众不符一律视为无效
        decoded
            .claims
            .check_invariants(self.audience)
            .map_err(|_| AuthError::TokenInvalid)?;
        Ok(decoded.claims)
    }

    /// 启动自检：签发并解码一个短期 token。
    pub fn self_check(&self) -> Result<(), AuthError> {
        let user = UserIdentity::new(0, "self-check@localhost", Role::Operator);
        let claims = ClaimBuilder::new(self.audience, Duration::from_secs(60)).build(&user)?;
        let token = self.sign(&claims)?;
        let decoded = self.decode(&token)?;
        if decoded != claims {
            return Err(AuthError::Internal(format!(
                "{} signer self-check did not round-trip",
                self.audience
            )));
        }
        Ok(())
    }
}

/// 将 jwt 库错误映射为业务错误。
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    }
}
