//! 排名筛选服务 - 业务能力层
//!
//! 按决定把论文分成接收 / 拒绝两组，再按平均分排序截取

use std::cmp::Ordering;

use crate::models::Paper;

/// 默认每类保留的论文数
pub const DEFAULT_LIMIT: usize = 5;

/// 扫描数量上限
pub const MAX_SCAN_LIMIT: usize = 25_000;

/// 为了凑够 `limit` 篇需要扫描的投稿数
///
/// 接口无法按决定或评分过滤，只能多扫一些
pub fn scan_limit_for(limit: usize) -> usize {
    limit.saturating_mul(200).min(MAX_SCAN_LIMIT)
}

/// 选出评分最高的接收论文和评分最低的拒绝论文
///
/// # 参数
/// - `papers`: 已补全评审信息的论文
/// - `count`: 每类最多保留的数量，0 时两类都为空
///
/// # 返回
/// `(top_accepted, bottom_rejected)`，同分时保持输入顺序
pub fn select(papers: &[Paper], count: usize) -> (Vec<&Paper>, Vec<&Paper>) {
    let mut accepted: Vec<&Paper> = papers.iter().filter(|p| p.is_accepted()).collect();
    let mut rejected: Vec<&Paper> = papers.iter().filter(|p| p.is_rejected()).collect();

    // sort_by 是稳定排序
    accepted.sort_by(|a, b| by_rating(b, a));
    rejected.sort_by(|a, b| by_rating(a, b));

    accepted.truncate(count);
    rejected.truncate(count);

    (accepted, rejected)
}

fn by_rating(a: &Paper, b: &Paper) -> Ordering {
    let a = a.avg_rating.unwrap_or(f64::NAN);
    let b = b.avg_rating.unwrap_or(f64::NAN);
    a.total_cmp(&b)
}
