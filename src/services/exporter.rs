//! 导出服务 - 业务能力层
//!
//! 把论文列表写成以论文 ID 为键的 JSON 文件

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{forum_url, Paper};

/// 没有决定时导出的占位值
pub const PENDING_DECISION: &str = "Pending";

/// 单篇论文的导出格式
#[derive(Debug, Clone, Serialize)]
pub struct ExportedPaper<'a> {
    pub venue: &'a str,
    pub title: &'a str,
    pub link: String,
    #[serde(rename = "abstract")]
    pub abstract_text: &'a str,
    pub decision: &'a str,
    #[serde(rename = "review scores")]
    pub review_scores: Vec<i64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl<'a> ExportedPaper<'a> {
    pub fn new(paper: &'a Paper, venue: &'a str, web_base_url: &str) -> Self {
        let reviews = &paper.reviews;
        Self {
            venue,
            title: &paper.title,
            link: forum_url(web_base_url, &paper.id),
            abstract_text: &paper.abstract_text,
            decision: paper.decision.as_deref().unwrap_or(PENDING_DECISION),
            review_scores: reviews.iter().filter_map(|r| r.rating).collect(),
            strengths: bullet_points(reviews.iter().map(|r| r.strengths.as_deref())),
            weaknesses: bullet_points(reviews.iter().map(|r| r.weaknesses.as_deref())),
        }
    }
}

fn bullet_points<'a>(texts: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    texts
        .flatten()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| format!("- {}", text))
        .collect()
}

/// 构建导出文档，键的顺序与输入顺序一致
pub fn build_document<'a, I>(
    papers: I,
    venue: &str,
    web_base_url: &str,
) -> AppResult<Map<String, Value>>
where
    I: IntoIterator<Item = &'a Paper>,
{
    let mut document = Map::new();
    for paper in papers {
        let entry = serde_json::to_value(ExportedPaper::new(paper, venue, web_base_url))?;
        document.insert(paper.id.clone(), entry);
    }
    Ok(document)
}

/// 导出论文到 JSON 文件
///
/// # 参数
/// - `papers`: 待导出的论文
/// - `venue`: 会议展示名称
/// - `web_base_url`: 论文链接使用的网页地址
/// - `destination`: 目标文件路径，已存在时覆盖
///
/// # 返回
/// 返回写入的论文数量；文件无法写入时返回 [`AppError::Export`]
pub fn export<'a, I>(
    papers: I,
    venue: &str,
    web_base_url: &str,
    destination: &Path,
) -> AppResult<usize>
where
    I: IntoIterator<Item = &'a Paper>,
{
    let document = build_document(papers, venue, web_base_url)?;
    let count = document.len();

    info!("📤 正在导出 {} 篇论文到 {}", count, destination.display());

    let bytes = to_pretty_json(&Value::Object(document))?;
    std::fs::write(destination, bytes)
        .map_err(|e| AppError::export(destination.display().to_string(), e))?;

    info!("✓ 写入完成: {}", destination.display());
    Ok(count)
}

fn to_pretty_json(value: &Value) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
