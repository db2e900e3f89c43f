//! 记录解析服务 - 业务能力层
//!
//! 把原始 note 转成 [`Paper`] / [`Review`]，不做任何 I/O。
//! 缺失的可选字段落到默认值（空字符串 / 空列表 / None），不会报错。

use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::models::paper::DEFAULT_STATUS;
use crate::models::{pdf_url, Paper, RawNote, Review};

/// 签名为空时使用的评审人
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

/// 从投稿 note 构建论文，`web_base_url` 用于拼接 PDF 地址
pub fn parse_paper(note: &RawNote, web_base_url: &str) -> Paper {
    Paper {
        id: note.id.clone(),
        title: note.content_str("title", ""),
        authors: note.content_str_list("authors"),
        abstract_text: note.content_str("abstract", ""),
        pdf_url: pdf_url(web_base_url, &note.id),
        keywords: note.content_str_list("keywords"),
        decision: None,
        avg_rating: None,
        status: DEFAULT_STATUS.to_string(),
        reviews: Vec::new(),
    }
}

/// 从评审 note 构建评审
///
/// 评分 / 置信度无法解析时记一条警告并按缺失处理
pub fn parse_review(note: &RawNote) -> Review {
    Review {
        id: note.id.clone(),
        reviewer: note
            .signatures
            .first()
            .cloned()
            .unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string()),
        rating: lenient_score(note, "rating"),
        confidence: lenient_score(note, "confidence"),
        title: note.content_opt_str("title"),
        review_text: note.content_opt_str("review"),
        strengths: note.content_opt_str("strengths"),
        weaknesses: note.content_opt_str("weaknesses"),
        invitation: note.identifiers().next().unwrap_or_default().to_string(),
        reply_to: note.replyto.clone(),
    }
}

/// 提取决定记录中的 `decision` 字段
pub fn parse_decision(note: &RawNote) -> Option<String> {
    note.content_opt_str("decision")
}

fn lenient_score(note: &RawNote, field: &str) -> Option<i64> {
    match normalize_score(field, note.content_value(field)) {
        Ok(score) => score,
        Err(e) => {
            warn!("[评审 {}] ⚠️ {}，按缺失处理", note.id, e);
            None
        }
    }
}

/// 把评分类字段统一成整数
///
/// - `"8: accept, good paper"` → 8（取第一个冒号左侧）
/// - `7` / `7.0` → 7（浮点数截断）
/// - 字段缺失 → `None`
/// - 其他形式 → [`AppError::Parse`]
pub fn normalize_score(field: &str, raw: Option<&Value>) -> AppResult<Option<i64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw {
        Value::String(text) => {
            let head = text.split(':').next().unwrap_or_default().trim();
            head.parse::<i64>()
                .map(Some)
                .map_err(|_| AppError::parse(field, text.as_str()))
        }
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .map(Some)
            .ok_or_else(|| AppError::parse(field, number.to_string())),
        other => Err(AppError::parse(field, other.to_string())),
    }
}
