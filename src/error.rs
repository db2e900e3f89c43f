use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络请求失败（连接、超时、响应体解码）
    #[error("API请求失败 ({endpoint}): {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// API 返回非 2xx 响应
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    /// 评分 / 置信度字段无法解析
    #[error("无法解析字段 {field}: {raw}")]
    Parse { field: String, raw: String },

    /// 导出文件写入失败
    #[error("写入文件失败 ({path}): {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建评分解析错误
    pub fn parse(field: impl Into<String>, raw: impl Into<String>) -> Self {
        AppError::Parse {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// 创建文件写入错误
    pub fn export(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Export {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
