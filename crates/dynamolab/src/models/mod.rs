mod music;
mod note;

pub use music::{MusicQuery, SeedResponse};
pub use note::DeleteNote;
