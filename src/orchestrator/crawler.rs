//! 投稿抓取器 - 编排层
//!
//! 拉取会议的投稿列表，逐篇补全评审，按顺序产出 [`PaperOutcome`]。
//!
//! 返回的是惰性流：调用方不再拉取时就不会再请求后续论文的回复。
//! `max_concurrent > 1` 时同时补全多篇论文，但产出顺序仍与投稿列表一致。

use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, info};

use crate::clients::NoteSource;
use crate::error::AppResult;
use crate::models::{Venue, DEFAULT_WEB_URL};
use crate::services::parse_paper;
use crate::workflow::{EnrichFlow, PaperOutcome};

/// 投稿抓取器
pub struct Crawler<S> {
    source: S,
    submission_invitation: String,
    web_base_url: String,
    max_concurrent: usize,
}

impl<S: NoteSource> Crawler<S> {
    /// 抓取某个会议的投稿
    pub fn new(source: S, venue: &Venue) -> Self {
        Self::with_invitation(source, venue.submission_invitation())
    }

    /// 使用自定义投稿 invitation
    pub fn with_invitation(source: S, submission_invitation: impl Into<String>) -> Self {
        Self {
            source,
            submission_invitation: submission_invitation.into(),
            web_base_url: DEFAULT_WEB_URL.to_string(),
            max_concurrent: 1,
        }
    }

    /// 设置同时补全的论文数量，最小为 1
    pub fn max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// 设置拼接论文链接使用的网页地址
    pub fn web_base_url(mut self, web_base_url: impl Into<String>) -> Self {
        self.web_base_url = web_base_url.into();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn submission_invitation(&self) -> &str {
        &self.submission_invitation
    }

    /// 抓取前 `limit` 篇投稿，投稿列表也只拉取这么多
    ///
    /// 投稿列表拉取失败时直接返回错误；单篇论文的失败体现在
    /// [`PaperOutcome::Failed`] 中，不会中断整个流。
    pub async fn crawl(&self, limit: usize) -> AppResult<impl Stream<Item = PaperOutcome> + '_> {
        info!("🔍 正在拉取投稿列表: {}", self.submission_invitation);
        let submissions = self
            .source
            .list_submissions(&self.submission_invitation, limit)
            .await?;

        let total = submissions.len().min(limit);
        info!("✓ 本次扫描 {} 篇投稿 (并发 {})", total, self.max_concurrent);

        let flow = EnrichFlow::new(&self.source);
        let web_base_url = self.web_base_url.as_str();

        Ok(stream::iter(submissions.into_iter().take(limit).enumerate())
            .map(move |(idx, note)| {
                let paper = parse_paper(&note, web_base_url);
                async move {
                    debug!("[{}/{}] 补全论文 {}", idx + 1, total, paper.id);
                    flow.run(paper).await
                }
            })
            .buffered(self.max_concurrent))
    }
}
