//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 持有配置、API 客户端、失败记录
//! - 抓取 → 排名 → 导出
//! - 输出全局统计信息
//!
//! ### `crawler` - 投稿抓取器
//! - 拉取投稿列表（一次批量请求）
//! - 以惰性流的形式逐篇交给 workflow 补全
//!
//! ### `report` - 结果汇总
//! - 把每篇论文的结果折叠成论文列表 + 失败记录
//!
//! ## 层次关系
//!
//! ```text
//! app (抓取 → 排名 → 导出)
//!     ↓
//! crawler (处理 Vec<RawNote>)
//!     ↓
//! workflow::EnrichFlow (处理单篇 Paper)
//!     ↓
//! services (能力层：parse / rank / export)
//!     ↓
//! clients (OpenReview API)
//! ```

pub mod app;
pub mod crawler;
pub mod report;

pub use app::{App, RunOptions, RunSummary};
pub use crawler::Crawler;
pub use report::{CrawlReport, Failure};
