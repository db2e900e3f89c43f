pub mod note;
pub mod paper;
pub mod venue;

pub use note::{NoteKind, NotesPage, RawNote};
pub use paper::{average_rating, forum_url, pdf_url, Paper, Review, DEFAULT_WEB_URL};
pub use venue::{Venue, DEFAULT_CONFERENCE};
