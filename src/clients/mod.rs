pub mod openreview_client;

pub use openreview_client::{NoteSource, OpenReviewClient};
