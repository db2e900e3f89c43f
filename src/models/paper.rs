use serde::{Deserialize, Serialize};

/// 投稿的初始状态
pub const DEFAULT_STATUS: &str = "Submitted";

/// OpenReview 网页地址
pub const DEFAULT_WEB_URL: &str = "https://openreview.net";

/// 论文 PDF 地址
pub fn pdf_url(web_base_url: &str, paper_id: &str) -> String {
    format!("{}/pdf?id={}", web_base_url.trim_end_matches('/'), paper_id)
}

/// 论文讨论页地址
pub fn forum_url(web_base_url: &str, paper_id: &str) -> String {
    format!("{}/forum?id={}", web_base_url.trim_end_matches('/'), paper_id)
}

/// 单条评审
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    /// 第一个签名，没有签名时为 "Anonymous"
    pub reviewer: String,
    pub rating: Option<i64>,
    pub confidence: Option<i64>,
    pub title: Option<String>,
    pub review_text: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    /// 来源 invitation
    pub invitation: String,
    pub reply_to: Option<String>,
}

/// 投稿论文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub abstract_text: String,
    pub pdf_url: String,
    pub keywords: Vec<String>,
    pub decision: Option<String>,
    pub avg_rating: Option<f64>,
    pub status: String,
    pub reviews: Vec<Review>,
}

impl Paper {
    /// 用评审列表刷新平均分
    ///
    /// 只统计有评分的评审，一个都没有时为 `None`
    pub fn refresh_avg_rating(&mut self) {
        self.avg_rating = average_rating(&self.reviews);
    }

    /// 是否已被接收（决定中包含 "Accept" 且有平均分）
    pub fn is_accepted(&self) -> bool {
        self.has_outcome("Accept")
    }

    /// 是否已被拒绝（决定中包含 "Reject" 且有平均分）
    pub fn is_rejected(&self) -> bool {
        self.has_outcome("Reject")
    }

    fn has_outcome(&self, marker: &str) -> bool {
        self.avg_rating.is_some()
            && self
                .decision
                .as_deref()
                .is_some_and(|decision| decision.contains(marker))
    }
}

/// 计算评审的平均分
///
/// 在 `f64` 上累加，极端评分不会溢出
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    let ratings: Vec<f64> = reviews
        .iter()
        .filter_map(|r| r.rating)
        .map(|rating| rating as f64)
        .collect();
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}
