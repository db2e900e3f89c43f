pub mod enrich_flow;

pub use enrich_flow::{apply_replies, EnrichFlow, PaperOutcome};
