//! 论文补全流程 - 流程层
//!
//! 核心职责：定义"一篇论文"的补全流程
//!
//! 流程顺序：
//! 1. 拉取 forum 下的全部回复
//! 2. 分类：评审 / 决定 / 其他
//! 3. 评审按拉取顺序解析进 `paper.reviews`
//! 4. 第一条决定记录写入 `paper.decision`
//! 5. 计算平均分

use tracing::{debug, error};

use crate::clients::NoteSource;
use crate::error::{AppError, AppResult};
use crate::models::{NoteKind, Paper, RawNote, Review};
use crate::services::{parse_decision, parse_review};

/// 单篇论文的补全结果
#[derive(Debug)]
pub enum PaperOutcome {
    /// 补全成功
    Enriched(Paper),
    /// 补全失败，论文保留解析出的基础字段
    Failed { paper: Paper, cause: AppError },
}

impl PaperOutcome {
    pub fn paper(&self) -> &Paper {
        match self {
            PaperOutcome::Enriched(paper) | PaperOutcome::Failed { paper, .. } => paper,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, PaperOutcome::Enriched(_))
    }
}

/// 论文补全流程
///
/// - 不持有任何数据，只借用数据来源
/// - 一篇论文的失败不影响其他论文
#[derive(Clone, Copy)]
pub struct EnrichFlow<'a> {
    source: &'a dyn NoteSource,
}

impl<'a> EnrichFlow<'a> {
    pub fn new(source: &'a dyn NoteSource) -> Self {
        Self { source }
    }

    /// 补全一篇论文的评审、决定和平均分
    pub async fn run(&self, paper: Paper) -> PaperOutcome {
        match self.source.list_replies(&paper.id).await {
            Ok(replies) => {
                let paper = apply_replies(paper, &replies);
                debug!(
                    "[论文 {}] ✓ {} 条回复，{} 条评审，决定: {:?}",
                    paper.id,
                    replies.len(),
                    paper.reviews.len(),
                    paper.decision
                );
                PaperOutcome::Enriched(paper)
            }
            Err(cause) => {
                error!("[论文 {}] ❌ 补全失败: {}", paper.id, cause);
                PaperOutcome::Failed { paper, cause }
            }
        }
    }

    /// 只拉取并解析某个 forum 的评审
    pub async fn get_reviews(&self, forum_id: &str) -> AppResult<Vec<Review>> {
        let replies = self.source.list_replies(forum_id).await?;
        Ok(collect_reviews(&replies))
    }
}

/// 用一组回复补全论文
pub fn apply_replies(mut paper: Paper, replies: &[RawNote]) -> Paper {
    paper.reviews = collect_reviews(replies);
    paper.decision = first_decision(replies);
    paper.refresh_avg_rating();
    paper
}

fn collect_reviews(replies: &[RawNote]) -> Vec<Review> {
    replies
        .iter()
        .filter(|note| note.kind() == NoteKind::Review)
        .map(parse_review)
        .collect()
}

/// 取第一条决定记录的 `decision` 字段
fn first_decision(replies: &[RawNote]) -> Option<String> {
    replies
        .iter()
        .find(|note| note.kind() == NoteKind::Decision)
        .and_then(parse_decision)
}
