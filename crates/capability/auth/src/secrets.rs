//! 被测服务部署配置中的固定密钥，需与其 docker-compose 手动保持一致。

use domain::Audience;

pub const ACCESS_SECRET: &str = "super-secret-access";
pub const REFRESH_SECRET: &str = "super-secret-refresh";

pub fn secret_for(audience: Audience) -> &'static str {
    match audience {
        Audience::Access => ACCESS_SECRET,
        Audience::Refresh => REFRESH_SECRET,
    }
}
