//! # OpenReview Crawler
//!
//! 抓取 OpenReview 会议的投稿、评审和录用决定，汇总评分后导出 JSON
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 唯一做网络请求的地方
//! - `NoteSource` - 数据来源抽象：投稿列表 / forum 回复
//! - `OpenReviewClient` - 基于 reqwest 的 API v2 实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数能力，不做网络请求
//! - `record_parser` - note → Paper / Review
//! - `ranking` - 按决定分组、按评分排序截取
//! - `exporter` - 导出 JSON
//! - `FailureLog` - 写失败记录
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一篇论文"的补全流程
//! - `EnrichFlow` - 拉取回复 → 分类 → 解析评审 → 决定 → 平均分
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/crawler` - 惰性抓取流
//! - `orchestrator/report` - 结果汇总
//! - `orchestrator/app` - 抓取 → 排名 → 导出
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{NoteSource, OpenReviewClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{NoteKind, Paper, RawNote, Review, Venue};
pub use orchestrator::{App, CrawlReport, Crawler, RunOptions, RunSummary};
pub use workflow::{EnrichFlow, PaperOutcome};
