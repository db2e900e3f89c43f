//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建 API 客户端、抓取器和失败记录文件
//! 2. **抓取**：惰性拉取投稿并逐篇补全，单篇失败只记录不中断
//! 3. **排名**：选出评分最高的接收论文和评分最低的拒绝论文
//! 4. **导出**：两类论文各写一个 JSON 文件，导出失败直接返回错误
//! 5. **全局统计**：汇总成功 / 失败数量

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::StreamExt;
use tracing::{info, warn};

use crate::clients::OpenReviewClient;
use crate::config::Config;
use crate::models::{Paper, Venue};
use crate::orchestrator::crawler::Crawler;
use crate::orchestrator::report::CrawlReport;
use crate::services::{export, scan_limit_for, select, FailureLog};
use crate::utils::logging::{log_paper_details, log_section, log_startup, print_final_stats};

/// 单次运行参数（来自命令行）
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub venue: Venue,
    /// 每类保留的论文数
    pub limit: usize,
    /// 扫描投稿数，未设置时按 `limit` 估算
    pub scan_limit: Option<usize>,
}

impl RunOptions {
    pub fn effective_scan_limit(&self) -> usize {
        self.scan_limit
            .unwrap_or_else(|| scan_limit_for(self.limit))
    }
}

/// 运行结果
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub failed: usize,
    pub top_accepted: Vec<String>,
    pub bottom_rejected: Vec<String>,
    pub exported: Vec<PathBuf>,
}

/// 应用主结构
pub struct App {
    config: Config,
    options: RunOptions,
    crawler: Crawler<OpenReviewClient>,
    failure_log: FailureLog,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, options: RunOptions) -> Result<Self> {
        let client = OpenReviewClient::new(&config)?;
        let crawler = Crawler::new(client, &options.venue)
            .max_concurrent(config.max_concurrent_fetches)
            .web_base_url(config.web_base_url.as_str());

        let failure_log = FailureLog::with_path(&config.failure_log_file);
        failure_log
            .init(options.venue.key)
            .with_context(|| format!("无法创建失败记录文件: {}", config.failure_log_file))?;

        Ok(Self {
            config,
            options,
            crawler,
            failure_log,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let scan_limit = self.options.effective_scan_limit();
        log_startup(
            &self.options.venue,
            self.options.limit,
            scan_limit,
            self.config.max_concurrent_fetches,
        );

        let report = self.crawl(scan_limit).await?;

        let decided = report.decided();
        info!("✓ 有决定的论文: {}/{}", decided.len(), report.total());

        let (top_accepted, bottom_rejected) = select(&decided, self.options.limit);
        let mut summary = RunSummary {
            scanned: report.total(),
            failed: report.failures.len(),
            top_accepted: top_accepted.iter().map(|p| p.id.clone()).collect(),
            bottom_rejected: bottom_rejected.iter().map(|p| p.id.clone()).collect(),
            exported: Vec::new(),
        };

        log_section(&format!(
            "TOP {} ACCEPTED PAPERS (Highest Rated)",
            top_accepted.len()
        ));
        top_accepted.iter().for_each(|p| log_paper_details(p));
        if !top_accepted.is_empty() {
            summary
                .exported
                .push(self.export_category(&top_accepted, "high")?);
        }

        log_section(&format!(
            "TOP {} REJECTED PAPERS (Lowest Rated)",
            bottom_rejected.len()
        ));
        bottom_rejected.iter().for_each(|p| log_paper_details(p));
        if !bottom_rejected.is_empty() {
            summary
                .exported
                .push(self.export_category(&bottom_rejected, "low")?);
        }

        print_final_stats(
            report.succeeded(),
            report.failures.len(),
            report.total(),
            self.failure_log.path(),
        );

        Ok(summary)
    }

    /// 抓取并汇总，单篇失败追加到失败记录文件
    async fn crawl(&self, scan_limit: usize) -> Result<CrawlReport> {
        let outcomes = self
            .crawler
            .crawl(scan_limit)
            .await
            .context("拉取投稿列表失败")?;
        futures::pin_mut!(outcomes);

        let mut report = CrawlReport::default();
        while let Some(outcome) = outcomes.next().await {
            if let Some(failure) = report.record(outcome) {
                if let Err(e) = self.failure_log.write(&failure.paper_id, &failure.cause) {
                    warn!("⚠️ 写入失败记录失败: {}", e);
                }
            }
        }

        Ok(report)
    }

    fn export_category(&self, papers: &[&Paper], quality: &str) -> Result<PathBuf> {
        let dir = Path::new(&self.config.output_dir);
        std::fs::create_dir_all(dir)
            .with_context(|| format!("无法创建输出目录: {}", dir.display()))?;

        let path = output_path(dir, self.options.venue.key, self.options.limit, quality);
        export(
            papers.iter().copied(),
            self.options.venue.label,
            &self.config.web_base_url,
            &path,
        )?;
        Ok(path)
    }
}

/// 导出文件路径：`<dir>/<会议>_<数量>_<high|low>_quality_papers.json`
pub fn output_path(dir: &Path, conference: &str, limit: usize, quality: &str) -> PathBuf {
    dir.join(format!("{}_{}_{}_quality_papers.json", conference, limit, quality))
}
