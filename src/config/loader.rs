//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 兼容旧部署的无前缀环境变量 -> 配置键
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DATABASE_URI", "database.url"),
    ("REDIS_HOST", "cache.host"),
    ("REDIS_PORT", "cache.port"),
];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BWW_`，层级分隔符 `__`；以及 `PORT` 等旧变量）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BWW_SERVER__PORT=8080`
/// - `BWW_DATABASE__URL=sqlite:/data/bww.db?mode=rwc`
/// - `REDIS_HOST=redis`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.url", "sqlite:data/bww-store.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("cache.host", "localhost")?
        .set_default("cache.port", 6379)?
        .set_default("chat.max_history", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BWW_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("BWW")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    for (var, key) in LEGACY_ENV_OVERRIDES {
        builder = builder.set_override_option(*key, std::env::var(var).ok())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database URL cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections cannot be 0".to_string(),
        ));
    }

    if config.cache.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Cache host cannot be empty".to_string(),
        ));
    }

    if config.chat.max_history == 0 {
        return Err(ConfigError::ValidationError(
            "Chat max_history cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Database: {}", config.database.url);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Cache: {}", config.cache.url());
    tracing::info!("Chat Max History: {}", config.chat.max_history);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// 环境变量是进程级的，读写环境的测试串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// 设置环境变量，drop 时恢复
    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|(key, value)| {
                    let old = std::env::var(key).ok();
                    std::env::set_var(key, value);
                    (*key, old)
                })
                .collect();
            Self { saved, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, old) in &self.saved {
                match old {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_history() {
        let mut config = AppConfig::default();
        config.chat.max_history = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let _env = EnvGuard::set(&[]);
        let file = config_file("[server]\nhost = \"127.0.0.1\"\n\n[chat]\nmax_history = 4\n");

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.chat.max_history, 4);
        assert_eq!(config.cache.host, "localhost");
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let _env = EnvGuard::set(&[]);
        let file = config_file("[chat]\nmax_history = 0\n");

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        let _env = EnvGuard::set(&[("BWW_SERVER__PORT", "5000"), ("BWW_CHAT__MAX_HISTORY", "7")]);
        let file = config_file("[server]\nport = 4000\n\n[chat]\nmax_history = 4\n");

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.chat.max_history, 7);
    }

    #[test]
    fn test_legacy_env_overrides_everything() {
        let _env = EnvGuard::set(&[
            ("BWW_SERVER__PORT", "5000"),
            ("PORT", "8080"),
            ("DATABASE_URI", "sqlite::memory:"),
            ("REDIS_HOST", "redis"),
            ("REDIS_PORT", "6380"),
        ]);
        let file = config_file("[server]\nport = 4000\n\n[cache]\nhost = \"cache.local\"\n");

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.cache.host, "redis");
        assert_eq!(config.cache.port, 6380);
    }

    #[test]
    fn test_invalid_legacy_port_is_rejected() {
        let _env = EnvGuard::set(&[("PORT", "0")]);
        let file = config_file("");

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
