mod types;
mod validation;

pub use types::Note;
pub use validation::{validate_note_key, validate_user_id};
