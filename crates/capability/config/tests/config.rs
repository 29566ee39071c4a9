use std::time::Duration;

use tokfix_config::{ACCESS_TTL_KEY, ConfigError, FixtureConfig, REFRESH_TTL_KEY};

// 环境变量为进程级状态，所有断言放在同一个测试里顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var(ACCESS_TTL_KEY, "3600");
        std::env::remove_var(REFRESH_TTL_KEY);
        std::env::set_var("TOKFIX_API_BASE_URL", "http://127.0.0.1:9000/");
        std::env::remove_var("TOKFIX_API_PROBE_PATH");
        std::env::remove_var("TOKFIX_IMPORT_OUTPUT");
    }

    let config = FixtureConfig::from_env().expect("config");
    assert_eq!(config.access_ttl_seconds.as_deref(), Some("3600"));
    assert_eq!(config.refresh_ttl_seconds, None);
    assert_eq!(config.api_probe_url(), "http://127.0.0.1:9000/chats/all");
    assert_eq!(config.import_output.extension().and_then(|e| e.to_str()), Some("xlsx"));

    assert_eq!(
        config.access_validity(None).expect("env ttl"),
        Duration::from_secs(3600)
    );
    assert_eq!(
        config.access_validity(Some(60)).expect("flag ttl"),
        Duration::from_secs(60)
    );
    assert!(matches!(
        config.refresh_validity(None),
        Err(ConfigError::Missing(_))
    ));
    assert!(matches!(
        config.access_validity(Some(0)),
        Err(ConfigError::Invalid(_, _))
    ));

    // 非法有效期不影响加载，只在签发时报错
    unsafe {
        std::env::set_var(REFRESH_TTL_KEY, "seven-days");
    }
    let config = FixtureConfig::from_env().expect("config with bad ttl");
    assert!(matches!(
        config.refresh_validity(None),
        Err(ConfigError::Invalid(key, value)) if key == REFRESH_TTL_KEY && value == "seven-days"
    ));
    assert_eq!(
        config.refresh_validity(Some(120)).expect("flag wins"),
        Duration::from_secs(120)
    );
}
