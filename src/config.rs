use crate::error::{AppError, AppResult};
use crate::models::DEFAULT_WEB_URL;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 默认配置文件名（位于当前工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "crawler.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenReview API 地址
    pub api_base_url: String,
    /// OpenReview 网页地址，用于拼接论文链接
    pub web_base_url: String,
    /// 导出 JSON 的目录
    pub output_dir: String,
    /// 同时抓取评审的论文数量，1 表示严格串行
    pub max_concurrent_fetches: usize,
    /// 拉取投稿列表时每页的条数
    pub submission_page_size: usize,
    /// 失败记录文件
    pub failure_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api2.openreview.net".to_string(),
            web_base_url: DEFAULT_WEB_URL.to_string(),
            output_dir: "example_out".to_string(),
            max_concurrent_fetches: 1,
            submission_page_size: 1000,
            failure_log_file: "crawl_failures.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    ///
    /// TOML 文件路径取自 `CRAWLER_CONFIG`，未设置时尝试当前目录下的 `crawler.toml`。
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("CRAWLER_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::Config(format!("{} ({})", e, path.display())))
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("TOML解析失败: {}", e)))
    }

    /// 用环境变量覆盖已有配置，无法解析的数值保持原值
    pub fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("OPENREVIEW_API_BASE_URL").unwrap_or(self.api_base_url),
            web_base_url: std::env::var("OPENREVIEW_WEB_BASE_URL").unwrap_or(self.web_base_url),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(self.output_dir),
            max_concurrent_fetches: env_parse("MAX_CONCURRENT_FETCHES")
                .unwrap_or(self.max_concurrent_fetches),
            submission_page_size: env_parse("SUBMISSION_PAGE_SIZE")
                .unwrap_or(self.submission_page_size),
            failure_log_file: std::env::var("FAILURE_LOG_FILE").unwrap_or(self.failure_log_file),
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
