#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use openreview_crawler::{AppError, AppResult, NoteSource, RawNote};
use serde_json::{json, Value};

/// 内存数据来源
#[derive(Default)]
pub struct StaticSource {
    pub submissions: Vec<RawNote>,
    pub replies: HashMap<String, Vec<RawNote>>,
    pub failing: HashSet<String>,
    pub delays: HashMap<String, Duration>,
    pub reply_calls: AtomicUsize,
}

impl StaticSource {
    pub fn add_paper(&mut self, id: &str, title: &str, replies: Vec<RawNote>) {
        self.submissions.push(submission(id, title));
        self.replies.insert(id.to_string(), replies);
    }

    pub fn fail_on(&mut self, id: &str) {
        self.failing.insert(id.to_string());
    }

    pub fn delay(&mut self, id: &str, delay: Duration) {
        self.delays.insert(id.to_string(), delay);
    }

    pub fn calls(&self) -> usize {
        self.reply_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NoteSource for StaticSource {
    async fn list_submissions(&self, _invitation: &str, max: usize) -> AppResult<Vec<RawNote>> {
        Ok(self.submissions.iter().take(max).cloned().collect())
    }

    async fn list_replies(&self, forum_id: &str) -> AppResult<Vec<RawNote>> {
        self.reply_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(forum_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(forum_id) {
            return Err(AppError::BadResponse {
                endpoint: format!("/notes?forum={}", forum_id),
                status: 500,
                message: Some("internal error".to_string()),
            });
        }
        Ok(self.replies.get(forum_id).cloned().unwrap_or_default())
    }
}

pub fn note(value: Value) -> RawNote {
    serde_json::from_value(value).expect("valid note json")
}

pub fn submission(id: &str, title: &str) -> RawNote {
    note(json!({
        "id": id,
        "forum": id,
        "invitations": ["ICLR.cc/2025/Conference/-/Submission"],
        "content": {
            "title": { "value": title },
            "authors": { "value": ["Ada", "Grace"] },
            "abstract": { "value": format!("Abstract of {}", title) },
            "keywords": { "value": ["learning"] }
        }
    }))
}

pub fn review(forum: &str, id: &str, rating: Value) -> RawNote {
    note(json!({
        "id": id,
        "forum": forum,
        "replyto": forum,
        "invitations": [format!("ICLR.cc/2025/Conference/Submission{}/-/Official_Review", forum)],
        "signatures": [format!("ICLR.cc/2025/Conference/Submission{}/Reviewer_{}", forum, id)],
        "content": {
            "rating": { "value": rating },
            "confidence": { "value": "3: fairly confident" },
            "strengths": { "value": format!("Strength from {}", id) },
            "weaknesses": { "value": format!("Weakness from {}", id) }
        }
    }))
}

pub fn decision(forum: &str, id: &str, outcome: &str) -> RawNote {
    note(json!({
        "id": id,
        "forum": forum,
        "replyto": forum,
        "invitations": [format!("ICLR.cc/2025/Conference/Submission{}/-/Decision", forum)],
        "signatures": ["ICLR.cc/2025/Conference/Program_Chairs"],
        "content": { "decision": { "value": outcome } }
    }))
}

pub fn comment(forum: &str, id: &str) -> RawNote {
    note(json!({
        "id": id,
        "forum": forum,
        "replyto": forum,
        "invitations": [format!("ICLR.cc/2025/Conference/Submission{}/-/Official_Comment", forum)],
        "content": { "comment": { "value": "Thanks for the rebuttal." } }
    }))
}

/// 四篇论文：评分 [9, 7, 9, 3]，决定 [Accept, Accept, Accept, Reject]
pub fn ranked_fixture() -> StaticSource {
    let mut source = StaticSource::default();
    source.add_paper(
        "p1",
        "First",
        vec![review("p1", "r11", json!(9)), decision("p1", "d1", "Accept (Oral)")],
    );
    source.add_paper(
        "p2",
        "Second",
        vec![
            review("p2", "r21", json!("6: marginally above")),
            review("p2", "r22", json!(8)),
            decision("p2", "d2", "Accept (Poster)"),
        ],
    );
    source.add_paper(
        "p3",
        "Third",
        vec![
            comment("p3", "c31"),
            review("p3", "r31", json!("9: top 5%")),
            decision("p3", "d3", "Accept (Spotlight)"),
        ],
    );
    source.add_paper(
        "p4",
        "Fourth",
        vec![review("p4", "r41", json!(3.0)), decision("p4", "d4", "Reject")],
    );
    source
}
