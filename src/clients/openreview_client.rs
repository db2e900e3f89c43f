/// OpenReview API 客户端
///
/// 封装所有与 OpenReview API 相关的调用逻辑
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{NotesPage, RawNote};
use async_trait::async_trait;
use tracing::debug;

/// 论文数据来源
///
/// 抓取流程只依赖这两个能力，测试中可以用内存实现替换
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// 按投稿顺序列出某个 invitation 下的前 `max` 篇投稿
    async fn list_submissions(&self, invitation: &str, max: usize) -> AppResult<Vec<RawNote>>;

    /// 列出某个 forum（论文）下的全部回复
    async fn list_replies(&self, forum_id: &str) -> AppResult<Vec<RawNote>>;
}

/// OpenReview API 客户端
#[derive(Debug, Clone)]
pub struct OpenReviewClient {
    http: reqwest::Client,
    base_url: String,
    page_size: usize,
}

impl OpenReviewClient {
    /// 创建新的 OpenReview 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_base_url(&config.api_base_url, config.submission_page_size)
    }

    /// 使用自定义地址创建客户端
    pub fn with_base_url(base_url: impl Into<String>, page_size: usize) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("openreview_crawler/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("无法创建HTTP客户端: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    /// 调用 `GET /notes`
    ///
    /// # 参数
    /// - `query`: 查询参数
    ///
    /// # 返回
    /// 返回解析后的一页 note
    async fn get_notes(&self, query: &[(&str, String)]) -> AppResult<NotesPage> {
        let url = self.notes_url();
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.ok().filter(|body| !body.is_empty());
            return Err(AppError::BadResponse {
                endpoint: url,
                status: status.as_u16(),
                message,
            });
        }

        let page: NotesPage = response
            .json()
            .await
            .map_err(|e| AppError::transport(&url, e))?;

        debug!("收到 {} 条记录 (count={:?})", page.notes.len(), page.count);
        Ok(page)
    }
}

#[async_trait]
impl NoteSource for OpenReviewClient {
    async fn list_submissions(&self, invitation: &str, max: usize) -> AppResult<Vec<RawNote>> {
        let mut notes = Vec::new();

        // 逐页拉取，够 `max` 篇或服务端没有更多投稿时停止
        while notes.len() < max {
            let requested = self.page_size.min(max - notes.len());
            let page = self
                .get_notes(&[
                    ("invitation", invitation.to_string()),
                    ("limit", requested.to_string()),
                    ("offset", notes.len().to_string()),
                ])
                .await?;

            let received = page.notes.len();
            notes.extend(page.notes);

            // 服务端可能把单页截得比请求的更短，有 count 时以 count 为准
            let exhausted = match page.count {
                Some(total) => notes.len() as u64 >= total,
                None => received < requested,
            };
            if received == 0 || exhausted {
                break;
            }
        }

        notes.truncate(max);
        Ok(notes)
    }

    async fn list_replies(&self, forum_id: &str) -> AppResult<Vec<RawNote>> {
        let page = self.get_notes(&[("forum", forum_id.to_string())]).await?;
        Ok(page.notes)
    }
}
