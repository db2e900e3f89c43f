use clap::Parser;

use crate::models::{Venue, DEFAULT_CONFERENCE};
use crate::orchestrator::RunOptions;
use crate::services::ranking::DEFAULT_LIMIT;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "openreview-crawler",
    version,
    about = "抓取 OpenReview 会议论文的评审，导出评分最高的接收论文和评分最低的拒绝论文"
)]
pub struct Cli {
    /// 会议简称，如 ICLR2025 / NeurIPS2025
    #[arg(long, default_value = DEFAULT_CONFERENCE, value_parser = parse_conference)]
    pub conference: Venue,

    /// 每类保留的论文数
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = parse_positive)]
    pub limit: usize,

    /// 扫描的投稿数（默认 min(limit * 200, 25000)）
    #[arg(long, value_parser = parse_positive)]
    pub scan_limit: Option<usize>,

    /// 导出目录，覆盖配置文件
    #[arg(long)]
    pub output_dir: Option<String>,

    /// 输出 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            venue: self.conference,
            limit: self.limit,
            scan_limit: self.scan_limit,
        }
    }
}

fn parse_conference(value: &str) -> Result<Venue, String> {
    Venue::find(value).ok_or_else(|| {
        format!(
            "未知会议 '{}'，可选: {}",
            value,
            Venue::keys().collect::<Vec<_>>().join(", ")
        )
    })
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("'{}' 不是正整数", value)),
    }
}
