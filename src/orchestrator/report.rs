//! 抓取结果汇总
//!
//! 把 [`PaperOutcome`] 流折叠成论文列表和失败记录

use futures::{Stream, StreamExt};

use crate::models::Paper;
use crate::workflow::PaperOutcome;

/// 单篇失败记录
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub paper_id: String,
    pub cause: String,
}

/// 抓取统计
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// 全部论文（补全失败的也保留基础字段）
    pub papers: Vec<Paper>,
    pub failures: Vec<Failure>,
}

impl CrawlReport {
    /// 记录一篇论文的结果，返回新增的失败记录（如有）
    pub fn record(&mut self, outcome: PaperOutcome) -> Option<&Failure> {
        match outcome {
            PaperOutcome::Enriched(paper) => {
                self.papers.push(paper);
                None
            }
            PaperOutcome::Failed { paper, cause } => {
                self.failures.push(Failure {
                    paper_id: paper.id.clone(),
                    cause: cause.to_string(),
                });
                self.papers.push(paper);
                self.failures.last()
            }
        }
    }

    /// 消费整个流
    pub async fn collect<St>(outcomes: St) -> Self
    where
        St: Stream<Item = PaperOutcome>,
    {
        outcomes
            .fold(Self::default(), |mut report, outcome| async move {
                report.record(outcome);
                report
            })
            .await
    }

    pub fn total(&self) -> usize {
        self.papers.len()
    }

    pub fn succeeded(&self) -> usize {
        self.papers.len() - self.failures.len()
    }

    /// 已有决定的论文
    pub fn decided(&self) -> Vec<Paper> {
        self.papers
            .iter()
            .filter(|paper| paper.decision.is_some())
            .cloned()
            .collect()
    }
}
