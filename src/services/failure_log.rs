//! 失败记录服务 - 业务能力层
//!
//! 只负责"写失败记录文件"能力，不关心流程

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

/// 失败记录服务
///
/// 每篇补全失败的论文追加一行：论文 ID + 原因
pub struct FailureLog {
    path: String,
}

impl FailureLog {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 重建文件并写入本次运行的表头
    pub fn init(&self, conference: &str) -> Result<()> {
        let header = format!(
            "{}\n抓取失败记录 - {} - {}\n{}\n\n",
            "=".repeat(60),
            conference,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        std::fs::write(&self.path, header)?;
        Ok(())
    }

    /// 追加一条失败记录
    ///
    /// # 参数
    /// - `paper_id`: 论文ID
    /// - `cause`: 失败原因
    pub fn write(&self, paper_id: &str, cause: &str) -> Result<()> {
        debug!("写入失败记录: 论文 {} | {}", paper_id, cause);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "论文 {} | 原因: {}", paper_id, cause)?;

        Ok(())
    }
}
