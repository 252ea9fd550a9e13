//! 配置服务
//!
//! 配置文件位于 `<config_dir>/shift-manager/config.toml`，可用 `--config` 指定。
//! 文件不存在时使用默认值并写出一份默认配置；文件格式错误视为启动错误。

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shift_manager_core::{CoreResult, HttpClientConfig};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 编译期注入的日历域名
const BUILD_DOMAIN: Option<&str> = option_env!("DOMAIN");

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the user config directory")]
    NoConfigDir,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 根地址
    pub api_base_url: String,
    /// 订阅链接使用的域名
    pub calendar_domain: String,
    /// 会话令牌（作为 cookie 发送）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 界面语言（`zh-CN` / `en-US`）
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            calendar_domain: BUILD_DOMAIN.unwrap_or("localhost").to_string(),
            session_token: None,
            request_timeout_secs: 10,
            language: Language::ZhCn.code().to_string(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 界面语言，无法识别时回退到简体中文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language {:?}, falling back to zh-CN", self.language);
            Language::ZhCn
        })
    }

    /// HTTP 客户端配置
    pub fn http_config(&self) -> CoreResult<HttpClientConfig> {
        Ok(HttpClientConfig::new(&self.api_base_url)?
            .with_session_token(self.session_token.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs)))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地配置服务（TOML 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认位置
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("shift-manager").join("config.toml")))
    }

    /// 使用指定文件
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 日志目录：配置文件旁边的 `logs/`
    pub fn log_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map_or_else(|| PathBuf::from("logs"), |dir| dir.join("logs"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                // 首次运行写出默认配置，失败不影响启动
                if let Err(e) = self.save(&config) {
                    log::warn!("Could not write default config: {e}");
                }
                return Ok(config);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let write = || -> io::Result<()> {
            if let Some(dir) = self.path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&self.path, content)
        };
        write().map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 临时目录随 `TempDir` 一起删除
    fn temp_config() -> (tempfile::TempDir, LocalConfigService) {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let service = LocalConfigService::with_path(tmp.path().join("nested").join("config.toml"));
        (tmp, service)
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            api_base_url = "https://shift.example.com/api"
            theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://shift.example.com/api");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.language(), Language::ZhCn);
    }

    #[test]
    fn unknown_language_falls_back_to_chinese() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::ZhCn);
    }

    #[test]
    fn missing_file_writes_defaults() {
        let (_tmp, service) = temp_config();
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(service.path().exists());
    }

    #[test]
    fn saved_config_loads_back() {
        let (_tmp, service) = temp_config();
        let config = AppConfig {
            calendar_domain: "shift.example.com".to_string(),
            session_token: Some("abc".to_string()),
            language: "en-US".to_string(),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let (_tmp, service) = temp_config();
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "request_timeout_secs = \"soon\"").unwrap();

        let err = service.load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn http_config_carries_token_and_timeout() {
        let config = AppConfig {
            session_token: Some("abc".to_string()),
            request_timeout_secs: 3,
            ..AppConfig::default()
        };
        let http = config.http_config().unwrap();
        assert_eq!(http.session_token.as_deref(), Some("abc"));
        assert_eq!(http.timeout, Duration::from_secs(3));
    }

    #[test]
    fn log_dir_sits_next_to_config() {
        let service = LocalConfigService::with_path(PathBuf::from("/tmp/sm/config.toml"));
        assert_eq!(service.log_dir(), PathBuf::from("/tmp/sm/logs"));
    }
}
