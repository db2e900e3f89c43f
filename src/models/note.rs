//! OpenReview 原始记录
//!
//! 投稿、评审、决定、评论在 API 中都是 note，只靠 invitation 区分。
//! v2 接口的 content 字段形如 `{"title": {"value": "..."}}`，
//! v1 接口则直接是 `{"title": "..."}`，统一由 [`RawNote::content_value`] 处理。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 评审记录的 invitation 标记
pub const REVIEW_MARKER: &str = "Official_Review";
/// 决定记录的 invitation 标记
pub const DECISION_MARKER: &str = "Decision";

/// 接口返回的原始 note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNote {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub forum: Option<String>,

    #[serde(default)]
    pub replyto: Option<String>,

    /// v2 接口：多个 invitation
    #[serde(default)]
    pub invitations: Vec<String>,

    /// v1 接口：单个 invitation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation: Option<String>,

    #[serde(default)]
    pub signatures: Vec<String>,

    #[serde(default)]
    pub content: Map<String, Value>,
}

/// note 分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Review,
    Decision,
    Other,
}

impl RawNote {
    /// 该记录携带的全部 invitation 标识
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.invitations
            .iter()
            .map(String::as_str)
            .chain(self.invitation.as_deref())
    }

    /// 按 invitation 子串判断记录类型，任一标识命中即可
    pub fn kind(&self) -> NoteKind {
        if self.identifiers().any(|inv| inv.contains(REVIEW_MARKER)) {
            NoteKind::Review
        } else if self.identifiers().any(|inv| inv.contains(DECISION_MARKER)) {
            NoteKind::Decision
        } else {
            NoteKind::Other
        }
    }

    /// 读取 content 字段
    ///
    /// # 返回
    /// - 字段是 `{"value": x}` 包装：返回 `x`
    /// - 字段是包装对象但缺少 `value` 或为 null：返回 `None`
    /// - 字段是裸值：返回该值本身
    /// - 字段不存在：返回 `None`
    pub fn content_value(&self, key: &str) -> Option<&Value> {
        match self.content.get(key)? {
            Value::Object(wrapper) => wrapper.get("value").filter(|v| !v.is_null()),
            Value::Null => None,
            bare => Some(bare),
        }
    }

    /// 读取字符串字段，缺失或类型不符时返回 `default`
    pub fn content_str(&self, key: &str, default: &str) -> String {
        self.content_value(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// 读取可选字符串字段
    pub fn content_opt_str(&self, key: &str) -> Option<String> {
        self.content_value(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// 读取字符串列表字段，非字符串元素被忽略
    pub fn content_str_list(&self, key: &str) -> Vec<String> {
        self.content_value(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `GET /notes` 的响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesPage {
    #[serde(default)]
    pub notes: Vec<RawNote>,
    #[serde(default)]
    pub count: Option<u64>,
}
