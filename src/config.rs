use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// 上传接口允许的最大请求体 (字节)
    pub limit_bytes: usize,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_LIMIT: usize = 50 * 1024 * 1024;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            upload: UploadConfig {
                limit_bytes: DEFAULT_UPLOAD_LIMIT,
            },
        }
    }
}

impl AppConfig {
    /// 默认值 + 环境变量覆盖 (`GSTR_SERVER__HOST`, `GSTR_SERVER__PORT`, `GSTR_UPLOAD__LIMIT_BYTES`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::environment())
    }

    /// 从环境变量加载配置, 出错时回退到默认值
    pub fn from_env() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration ({}), using defaults", e);
            Self::default()
        })
    }

    fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    // 前缀与键之间用单下划线, 嵌套层级之间用双下划线
    fn environment() -> Environment {
        Environment::with_prefix("GSTR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("upload.limit_bytes", DEFAULT_UPLOAD_LIMIT as i64)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_impl() {
        let config: AppConfig = AppConfig::with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut vars = config::Map::new();
        vars.insert("GSTR_SERVER__HOST".to_string(), "0.0.0.0".to_string());
        vars.insert("GSTR_SERVER__PORT".to_string(), "8089".to_string());
        vars.insert("GSTR_UPLOAD__LIMIT_BYTES".to_string(), "1024".to_string());
        vars.insert("OTHER_SERVER__PORT".to_string(), "1".to_string());

        let config = AppConfig::load_from(AppConfig::environment().source(Some(vars))).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8089);
        assert_eq!(config.upload.limit_bytes, 1024);
        assert_eq!(config.bind_addr(), "0.0.0.0:8089");
    }

    #[test]
    fn partial_environment_keeps_other_defaults() {
        let mut vars = config::Map::new();
        vars.insert("GSTR_UPLOAD__LIMIT_BYTES".to_string(), "2048".to_string());

        let config = AppConfig::load_from(AppConfig::environment().source(Some(vars))).unwrap();
        assert_eq!(config.server, AppConfig::default().server);
        assert_eq!(config.upload.limit_bytes, 2048);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let mut vars = config::Map::new();
        vars.insert("GSTR_SERVER__PORT".to_string(), "not-a-port".to_string());

        assert!(AppConfig::load_from(AppConfig::environment().source(Some(vars))).is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.upload.limit_bytes, 52_428_800);
    }
}
