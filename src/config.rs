//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assistant::TierThresholds;
use crate::search::{ScoreWeights, SearchOptions};

/// Environment override for the documents directory / 文档目录环境变量
pub const DOCS_DIR_ENV: &str = "SOP_DOCS_DIR";

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Catalog source / 目录来源
    pub catalog: CatalogConfig,
    /// Document directory / 文档目录
    pub documents: DocumentsConfig,
    /// Search and assistant tuning / 搜索配置
    pub search: SearchConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Catalog configuration / 目录配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON file, empty means the embedded catalog / 目录文件路径，空表示使用内置目录
    pub path: String,
}

/// Documents configuration / 文档配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Root of the SOP Word files / SOP文档根目录
    pub base_dir: String,
}

/// Search configuration / 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum hits per query / 每次查询最大结果数
    pub max_results: usize,
    /// Shorter queries return nothing over HTTP / 最短查询长度
    pub min_query_len: usize,
    /// Tokens of this length or shorter are not keywords / 关键词最小长度
    pub min_keyword_len: usize,
    pub weights: ScoreWeights,
    /// Assistant relevance tiers / 助手相关度分级
    pub tiers: TierThresholds,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8180,
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            base_dir: "docs".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            max_results: options.limit,
            min_query_len: 2,
            min_keyword_len: options.min_keyword_len,
            weights: ScoreWeights::default(),
            tiers: TierThresholds::default(),
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_limit(self.max_results)
            .with_min_keyword_len(self.min_keyword_len)
    }
}

impl AppConfig {
    /// Catalog file, None for the embedded catalog / 目录文件路径
    pub fn get_catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    /// Documents directory, `SOP_DOCS_DIR` wins over the file / 获取文档目录
    pub fn get_docs_dir(&self) -> PathBuf {
        match std::env::var(DOCS_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(&self.documents.base_dir),
        }
    }

    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> anyhow::Result<AppConfig> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {:?}", config_path))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", config_path))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(config_path, content)
        .with_context(|| format!("Failed to write config file {:?}", config_path))?;

    Ok(())
}
