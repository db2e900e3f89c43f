/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::models::{Paper, Venue};

/// 初始化 tracing
///
/// 优先使用 `RUST_LOG`，否则 `verbose` 时为 debug，默认 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        debug!("日志已初始化，沿用现有订阅者: {}", e);
    }
}

/// 记录程序启动信息
///
/// # 参数
/// - `venue`: 目标会议
/// - `limit`: 每类保留数量
/// - `scan_limit`: 扫描投稿数
/// - `max_concurrent`: 最大并发数
pub fn log_startup(venue: &Venue, limit: usize, scan_limit: usize, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", venue);
    info!(
        "📊 目标: 前 {} 篇接收论文 / 后 {} 篇拒绝论文，扫描 {} 篇",
        limit, limit, scan_limit
    );
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 打印分组标题
pub fn log_section(title: &str) {
    info!("\n{}", "=".repeat(50));
    info!(" {}", title);
    info!("{}", "=".repeat(50));
}

/// 打印单篇论文摘要
pub fn log_paper_details(paper: &Paper) {
    info!("Title: {}", paper.title);
    info!("Decision: {}", paper.decision.as_deref().unwrap_or("None"));
    info!("Avg Rating: {}", format_rating(paper.avg_rating));
    info!("{}", "-".repeat(40));
}

/// 平均分展示：两位小数，缺失时为 N/A
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{:.2}", rating),
        None => "N/A".to_string(),
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `failure_log_path`: 失败记录文件路径
pub fn print_final_stats(success: usize, failed: usize, total: usize, failure_log_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    if failed > 0 {
        info!("\n失败记录已保存至: {}", failure_log_path);
    }
}
