//! 会议 → OpenReview venue ID 的静态映射表

use phf::phf_ordered_map;

/// 默认抓取的会议
pub const DEFAULT_CONFERENCE: &str = "ICLR2025";

/// 会议信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    /// 命令行使用的简称，如 "ICLR2025"
    pub key: &'static str,
    /// OpenReview 中的 venue ID
    pub id: &'static str,
    /// 导出 JSON 中的展示名称
    pub label: &'static str,
}

static VENUES: phf::OrderedMap<&'static str, Venue> = phf_ordered_map! {
    "ICLR2025" => Venue { key: "ICLR2025", id: "ICLR.cc/2025/Conference", label: "ICLR 2025" },
    "ICML2025" => Venue { key: "ICML2025", id: "ICML.cc/2025/Conference", label: "ICML 2025" },
    "NeurIPS2025" => Venue { key: "NeurIPS2025", id: "NeurIPS.cc/2025/Conference", label: "NeurIPS 2025" },
    "ACL2025" => Venue { key: "ACL2025", id: "aclweb.org/ACL/2025/Conference", label: "ACL 2025" },
    "COLM2025" => Venue { key: "COLM2025", id: "colmweb.org/COLM/2025/Conference", label: "COLM 2025" },
    "AAAI2025" => Venue { key: "AAAI2025", id: "AAAI.org/2025", label: "AAAI 2025" },
    "EMNLP2025" => Venue { key: "EMNLP2025", id: "EMNLP/2025/Conference", label: "EMNLP 2025" },
};

impl Venue {
    /// 按简称精确查找
    pub fn from_key(key: &str) -> Option<Self> {
        VENUES.get(key).copied()
    }

    /// 查找会议，精确匹配失败时忽略大小写
    pub fn find(key: &str) -> Option<Self> {
        Self::from_key(key).or_else(|| {
            VENUES
                .values()
                .find(|venue| venue.key.eq_ignore_ascii_case(key))
                .copied()
        })
    }

    /// 所有会议简称，顺序与映射表一致
    pub fn keys() -> impl Iterator<Item = &'static str> {
        VENUES.keys().copied()
    }

    /// 投稿的 invitation，如 `ICLR.cc/2025/Conference/-/Submission`
    pub fn submission_invitation(&self) -> String {
        format!("{}/-/Submission", self.id)
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.key, self.id)
    }
}
