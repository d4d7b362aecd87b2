//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use user_directory_core::DEFAULT_ENDPOINT;

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 用户集合的地址
    pub endpoint: String,
    pub theme: Theme,
    /// 语言代码，如 `en-US`、`zh-CN`
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文本解析，缺失字段取默认值
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config file")
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务，读取 `<config_dir>/user-directory/config.json`
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("user-directory").join("config.json")),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path.as_ref().filter(|p| p.exists()) else {
            return Ok(AppConfig::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        AppConfig::from_json(&text)
    }
}
